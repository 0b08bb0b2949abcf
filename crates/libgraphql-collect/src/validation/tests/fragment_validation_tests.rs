use crate::loc;
use crate::operation::ExecutableDocument;
use crate::operation::ExecutableDocumentBuilder;
use crate::validation::known_fragment_names;
use crate::validation::no_fragment_cycles;
use crate::validation::no_unused_fragments;
use crate::validation::validate_fragments;
use crate::validation::FragmentValidationError;

fn build_doc(content: &str) -> ExecutableDocument {
    ExecutableDocumentBuilder::from_str(None, content)
        .expect("document builds")
        .build()
}

fn pos(line: usize, col: usize) -> loc::SourceLocation {
    loc::SourceLocation::Position(loc::FilePosition {
        col,
        file: None,
        line,
    })
}

#[test]
fn valid_document_passes() {
    let doc = build_doc("
query { human(id: 4) { ...F1 ... on Human { ...F2 } } }
fragment F1 on Human { name }
fragment F2 on Human { name ...F3 }
fragment F3 on Human { pets { ...F1 } }
");
    assert_eq!(validate_fragments(&doc), Ok(()));
}

#[test]
fn mutually_spreading_unreachable_fragments_are_each_unused() {
    let doc = build_doc("{ human(id: 4) { name } }
fragment Unused1 on Human { name ...Unused2 }
fragment Unused2 on Human { name ...Unused1 }");

    let errors = no_unused_fragments(&doc);
    assert_eq!(errors, vec![
        FragmentValidationError::UnusedFragment {
            def_location: pos(2, 1),
            fragment_name: "Unused1".to_string(),
        },
        FragmentValidationError::UnusedFragment {
            def_location: pos(3, 1),
            fragment_name: "Unused2".to_string(),
        },
    ]);
    assert_eq!(errors[0].message(), "Fragment \"Unused1\" is never used.");
    assert_eq!(errors[1].message(), "Fragment \"Unused2\" is never used.");
    assert_eq!(errors[0].locations(), &[pos(2, 1)]);

    // The cycle between them is reported separately.
    let all_errors = validate_fragments(&doc).err().unwrap_or_default();
    assert_eq!(all_errors.len(), 3);
    assert_eq!(&all_errors[..2], errors.as_slice());
    assert!(matches!(all_errors[2], FragmentValidationError::FragmentCycle { .. }));
}

#[test]
fn fragments_reachable_only_through_other_fragments_are_used() {
    let doc = build_doc("
{ dog { ...A } }
fragment A on Dog { owner { ...B } }
fragment B on Human { ... on Human { ...C } }
fragment C on Human { name }
fragment D on Human { name }
");
    let unused: Vec<_> = no_unused_fragments(&doc).iter().map(|err| err.message()).collect();
    assert_eq!(unused, vec!["Fragment \"D\" is never used."]);
}

#[test]
fn unknown_fragment_names() {
    let doc = build_doc("
{ dog { ...Missing1 } }
fragment A on Dog { ...Missing2 ...A2 }
fragment A2 on Dog { name }
");
    let errors = known_fragment_names(&doc);
    assert_eq!(errors, vec![
        FragmentValidationError::UndefinedFragment {
            fragment_name: "Missing1".to_string(),
            reference_location: pos(2, 9),
        },
        FragmentValidationError::UndefinedFragment {
            fragment_name: "Missing2".to_string(),
            reference_location: pos(3, 21),
        },
    ]);
    assert_eq!(errors[0].message(), "Unknown fragment \"Missing1\".");
}

#[test]
fn direct_self_spread() {
    let doc = build_doc("
{ dog { ...A } }
fragment A on Dog { name ...A }
");
    let errors = no_fragment_cycles(&doc);
    assert_eq!(errors, vec![
        FragmentValidationError::FragmentCycle {
            fragment_name: "A".to_string(),
            locations: vec![pos(3, 26)],
            via: vec![],
        },
    ]);
    assert_eq!(errors[0].message(), "Cannot spread fragment \"A\" within itself.");
}

#[test]
fn indirect_cycle_is_reported_once() {
    let doc = build_doc("
{ dog { ...A } }
fragment A on Dog { ...B }
fragment B on Dog { ...C }
fragment C on Dog { owner { ... on Human { ...A } } }
");
    let errors = no_fragment_cycles(&doc);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message(),
        "Cannot spread fragment \"A\" within itself via \"B\", \"C\".",
    );
    assert_eq!(errors[0].locations(), &[pos(3, 21), pos(4, 21), pos(5, 44)]);
}

#[test]
fn cycle_entered_from_outside_reports_only_the_cycle() {
    let doc = build_doc("
{ dog { ...X } }
fragment X on Dog { ...A }
fragment A on Dog { ...B }
fragment B on Dog { ...A }
");
    let errors = no_fragment_cycles(&doc);
    assert_eq!(errors, vec![
        FragmentValidationError::FragmentCycle {
            fragment_name: "A".to_string(),
            locations: vec![pos(4, 21), pos(5, 21)],
            via: vec!["B".to_string()],
        },
    ]);
}

#[test]
fn independent_cycles_are_each_reported() {
    let doc = build_doc("
{ dog { ...A ...C } }
fragment A on Dog { ...B }
fragment B on Dog { ...A }
fragment C on Dog { ...C }
");
    let messages: Vec<_> = no_fragment_cycles(&doc).iter().map(|err| err.message()).collect();
    assert_eq!(messages, vec![
        "Cannot spread fragment \"A\" within itself via \"B\".",
        "Cannot spread fragment \"C\" within itself.",
    ]);
}

#[test]
fn spreads_of_undefined_fragments_do_not_form_cycles() {
    let doc = build_doc("
{ dog { ...A } }
fragment A on Dog { ...Missing }
");
    assert!(no_fragment_cycles(&doc).is_empty());
    assert_eq!(
        validate_fragments(&doc).err().map(|errors| errors.len()),
        Some(1),
    );
}

#[test]
fn deferred_and_skipped_spreads_still_form_cycles() {
    let doc = build_doc("
{ dog { ...A ...B } }
fragment A on Dog { name ...A @defer }
fragment B on Dog { ... @defer { ...B @skip(if: true) } }
");
    let errors = no_fragment_cycles(&doc);
    assert_eq!(errors, vec![
        FragmentValidationError::FragmentCycle {
            fragment_name: "A".to_string(),
            locations: vec![pos(3, 26)],
            via: vec![],
        },
        FragmentValidationError::FragmentCycle {
            fragment_name: "B".to_string(),
            locations: vec![pos(4, 34)],
            via: vec![],
        },
    ]);
}
