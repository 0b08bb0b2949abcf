use crate::commands::validate::validate_document;
use crate::commands::validate::DocumentStats;
use std::path::Path;

#[test]
fn valid_document_reports_counts() {
    let stats = validate_document(None, "
        query A { ...F }
        query B { ...F }
        fragment F on Query { __typename }
    ").expect("document is valid");

    assert_eq!(stats, DocumentStats {
        num_fragments: 1,
        num_operations: 2,
    });
}

#[test]
fn fragment_errors_are_rendered_with_locations() {
    let errors = validate_document(None, "
query { ...Missing }
fragment Unused on Query { __typename }
").expect_err("document has fragment errors");

    assert_eq!(errors, vec![
        "3:1: Fragment \"Unused\" is never used.".to_string(),
        "2:9: Unknown fragment \"Missing\".".to_string(),
    ]);
}

#[test]
fn fragment_cycles_are_reported() {
    let errors = validate_document(None, "
query { ...A }
fragment A on Query { ...B }
fragment B on Query { ...A }
").expect_err("A and B spread each other");

    assert_eq!(errors.len(), 1);
    assert!(
        errors[0].ends_with("Cannot spread fragment \"A\" within itself via \"B\"."),
        "{}",
        errors[0],
    );
}

#[test]
fn build_errors_are_prefixed_with_file_path() {
    let errors = validate_document(
        Some(Path::new("ops.graphql")),
        "fragment F on Query { a } fragment F on Query { b } query { ...F }",
    ).expect_err("F is defined twice");

    assert_eq!(errors, vec![
        "ops.graphql: Multiple fragments named `F` were defined".to_string(),
    ]);
}
