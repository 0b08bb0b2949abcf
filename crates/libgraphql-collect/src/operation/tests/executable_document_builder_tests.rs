use crate::loc;
use crate::operation::ExecutableDocument;
use crate::operation::ExecutableDocumentBuilder;
use crate::operation::ExecutableDocumentBuildError;
use crate::operation::Selection;
use crate::schema::GraphQLOperationType;
use crate::Value;
use std::path::Path;

type Result<T> = std::result::Result<T, Vec<ExecutableDocumentBuildError>>;

fn build_doc(content: &str) -> Result<ExecutableDocument> {
    ExecutableDocumentBuilder::from_str(None, content).map(|builder| builder.build())
}

fn pos(line: usize, col: usize) -> loc::SourceLocation {
    loc::SourceLocation::Position(loc::FilePosition {
        col,
        file: None,
        line,
    })
}

#[test]
fn shorthand_query_operation() -> Result<()> {
    let doc = build_doc("{ dog { name } }")?;

    let op = doc.operation(None).expect("document has one operation");
    assert_eq!(op.kind(), GraphQLOperationType::Query);
    assert_eq!(op.name(), None);
    assert!(op.variables().is_empty());

    let selections = op.selection_set().selections();
    assert_eq!(selections.len(), 1);
    let Selection::Field(dog) = &selections[0] else {
        panic!("expected a field selection, found {:?}", selections[0]);
    };
    assert_eq!(dog.name(), "dog");
    assert_eq!(dog.def_location(), &pos(1, 3));

    let sub_selections = dog.selection_set().expect("dog has a sub-selection");
    let Selection::Field(name) = &sub_selections.selections()[0] else {
        panic!("expected a field selection");
    };
    assert!(name.selection_set().is_none());

    Ok(())
}

#[test]
fn aliases_and_response_keys() -> Result<()> {
    let doc = build_doc("{ smallPic: profilePic(size: 64) bigPic: profilePic(size: 1024) name }")?;

    let op = doc.operation(None).expect("document has one operation");
    let fields: Vec<_> = op.selection_set().selections().iter().filter_map(|selection| {
        match selection {
            Selection::Field(field) => Some(field),
            _ => None,
        }
    }).collect();

    let keys: Vec<_> = fields.iter().map(|field| field.response_key()).collect();
    assert_eq!(keys, vec!["smallPic", "bigPic", "name"]);
    assert_eq!(fields[0].name(), "profilePic");
    assert_eq!(fields[0].alias(), Some("smallPic"));
    assert_eq!(fields[0].arguments().get("size"), Some(&Value::Int(64)));
    assert_eq!(fields[2].alias(), None);

    Ok(())
}

#[test]
fn named_operations_are_selected_by_name() -> Result<()> {
    let doc = build_doc("
        query GetDog { dog { name } }
        mutation RenameDog($name: String!) { renameDog(name: $name) { name } }
    ")?;

    assert!(doc.operation(None).is_none());

    let mutation = doc.operation(Some("RenameDog")).expect("operation is defined");
    assert_eq!(mutation.kind(), GraphQLOperationType::Mutation);
    assert_eq!(
        mutation.variables().get("name").map(|var| var.type_annotation().to_graphql_string()),
        Some("String!".to_string()),
    );

    assert!(doc.operation(Some("Missing")).is_none());

    Ok(())
}

#[test]
fn fragments_and_type_conditions() -> Result<()> {
    let doc = build_doc("
        query { pet { ...petFields ... on Dog { barkVolume } ... @include(if: true) { name } } }
        fragment petFields on Pet { name }
    ")?;

    let fragment = doc.fragment_registry().get("petFields").expect("fragment is defined");
    assert_eq!(fragment.type_condition_name(), "Pet");
    assert_eq!(fragment.def_location(), &pos(3, 9));

    let op = doc.operation(None).expect("document has one operation");
    let Selection::Field(pet) = &op.selection_set().selections()[0] else {
        panic!("expected a field selection");
    };
    let selections = pet.selection_set().expect("pet has a sub-selection").selections();

    let Selection::FragmentSpread(spread) = &selections[0] else {
        panic!("expected a fragment spread");
    };
    assert_eq!(spread.fragment_name(), "petFields");
    assert_eq!(spread.fragment(doc.fragment_registry()).ok(), Some(fragment));

    let Selection::InlineFragment(on_dog) = &selections[1] else {
        panic!("expected an inline fragment");
    };
    assert_eq!(on_dog.type_condition().map(|cond| cond.name()), Some("Dog"));

    let Selection::InlineFragment(untyped) = &selections[2] else {
        panic!("expected an inline fragment");
    };
    assert!(untyped.type_condition().is_none());
    assert_eq!(untyped.directives().len(), 1);
    assert_eq!(untyped.directives()[0].directive_name(), "include");
    assert_eq!(untyped.directives()[0].args().get("if"), Some(&Value::Bool(true)));

    Ok(())
}

#[test]
fn fragment_spreads_are_found_through_fields_and_inline_fragments() -> Result<()> {
    let doc = build_doc("
        {
          ...a
          dog { ...b owner { ...c } }
          ... on Query { ...d }
        }
    ")?;

    let op = doc.operation(None).expect("document has one operation");
    let names: Vec<_> = op.selection_set().fragment_spreads().iter()
        .map(|spread| spread.fragment_name())
        .collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);

    Ok(())
}

#[test]
fn undefined_fragments_are_not_a_build_error() -> Result<()> {
    let doc = build_doc("{ ...missing }")?;

    let op = doc.operation(None).expect("document has one operation");
    let Selection::FragmentSpread(spread) = &op.selection_set().selections()[0] else {
        panic!("expected a fragment spread");
    };
    assert!(spread.fragment(doc.fragment_registry()).is_err());

    Ok(())
}

#[test]
fn duplicate_definitions_are_all_reported() {
    let result = build_doc("
query A { a }
query A { b }
fragment F on Query { a }
fragment F on Query { b }
{ dog(name: \"x\", name: \"y\") }
");

    assert_eq!(result.err(), Some(vec![
        ExecutableDocumentBuildError::DuplicateOperationDefinition {
            operation_name: "A".to_string(),
            location1: pos(2, 1),
            location2: pos(3, 1),
        },
        ExecutableDocumentBuildError::DuplicateFragmentDefinition {
            fragment_name: "F".to_string(),
            location1: pos(4, 1),
            location2: pos(5, 1),
        },
        ExecutableDocumentBuildError::DuplicateArgument {
            argument_name: "name".to_string(),
            field_name: "dog".to_string(),
            location: pos(6, 3),
        },
    ]));
}

#[test]
fn parse_errors_carry_the_file_path() {
    let path = Path::new("query.graphql");
    let result = ExecutableDocumentBuilder::from_str(Some(path), "{ dog { ");

    let errors = result.err().expect("document fails to parse");
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        ExecutableDocumentBuildError::ParseError { file: Some(file), .. }
            if file == path,
    ));
}

fn root_selection_locations(doc: &ExecutableDocument) -> Vec<loc::SourceLocation> {
    let op = doc.operation(None).expect("document has one operation");
    op.selection_set().selections().iter()
        .map(|selection| selection.def_location().to_owned())
        .collect()
}

#[test]
fn spreads_and_inline_fragments_are_located_at_their_ellipsis() -> Result<()> {
    let doc = build_doc("{ ...F ... on Dog { name } }\nfragment F on Query { __typename }")?;

    assert_eq!(root_selection_locations(&doc), vec![pos(1, 3), pos(1, 8)]);

    let op = doc.operation(None).expect("document has one operation");
    let Selection::InlineFragment(inline_frag) = &op.selection_set().selections()[1] else {
        panic!("expected an inline fragment");
    };
    let type_condition = inline_frag.type_condition().expect("has a type condition");
    assert_eq!(type_condition.ref_location(), &pos(1, 8));

    Ok(())
}

#[test]
fn ellipsis_location_skips_ignored_tokens_across_lines() -> Result<()> {
    let doc = build_doc("{
  ... # type condition follows...
    on Query { __typename }
  ...,
  F
  ... @include(if: true) { __typename }
  __typename(tag: \"a#b\") ...
    on Query { __typename }
}
fragment F on Query { __typename }")?;

    assert_eq!(root_selection_locations(&doc), vec![
        pos(2, 3),
        pos(4, 3),
        pos(6, 3),
        pos(7, 3),
        pos(7, 26),
    ]);

    Ok(())
}

#[test]
fn nested_spread_locations_carry_the_file_path() -> Result<()> {
    let path = Path::new("queries/dog.graphql");
    let doc = ExecutableDocumentBuilder::from_str(
        Some(path),
        "{ dog { ... on Dog { ...F } } }\nfragment F on Dog { name }",
    )?.build();

    let op = doc.operation(None).expect("document has one operation");
    let spreads = op.selection_set().fragment_spreads();
    assert_eq!(spreads.len(), 1);
    assert_eq!(
        spreads[0].def_location(),
        &loc::SourceLocation::Position(loc::FilePosition {
            col: 22,
            file: Some(path.to_path_buf()),
            line: 1,
        }),
    );

    Ok(())
}

#[test]
fn ast_without_source_locates_selections_after_the_ellipsis() -> Result<()> {
    let ast_doc = crate::ast::operation::parse("{ ...F }\nfragment F on Query { __typename }")
        .expect("document parses");
    let doc = ExecutableDocumentBuilder::from_ast(None, &ast_doc)?.build();

    assert_eq!(root_selection_locations(&doc), vec![pos(1, 6)]);

    Ok(())
}
