use crate::execution::defer_info;
use crate::execution::should_include;
use crate::execution::tests::test_utils::Fixture;
use crate::execution::DeferInfo;
use crate::operation::Selection;
use crate::types::Directive;
use crate::DerefByNameError;
use crate::Value;
use crate::VariableValues;

#[test]
fn should_include_precedence_table() {
    let fixture = Fixture::new("
{
  a @skip(if: true) @include(if: true)
  b @skip(if: true) @include(if: false)
  c @skip(if: false) @include(if: true)
  d @skip(if: false) @include(if: false)
  e
}
");
    let variables = VariableValues::new();
    let included: Vec<_> = fixture.root_fields().into_iter()
        .map(|field| (field.name(), should_include(&variables, field)))
        .collect();

    assert_eq!(included, vec![
        ("a", false),
        ("b", false),
        ("c", true),
        ("d", false),
        ("e", true),
    ]);
}

#[test]
fn should_include_with_variables() {
    let fixture = Fixture::new("{ a @skip(if: $s) b @include(if: $i) }");
    let root_fields = fixture.root_fields();

    let unbound = VariableValues::new();
    assert!(should_include(&unbound, root_fields[0]));
    assert!(should_include(&unbound, root_fields[1]));

    let bound: VariableValues = [
        ("s", Value::Bool(true)),
        ("i", Value::Bool(false)),
    ].into_iter().collect();
    assert!(!should_include(&bound, root_fields[0]));
    assert!(!should_include(&bound, root_fields[1]));

    let non_boolean: VariableValues = [
        ("s", Value::String("true".to_string())),
        ("i", Value::Int(0)),
    ].into_iter().collect();
    assert!(should_include(&non_boolean, root_fields[0]));
    assert!(should_include(&non_boolean, root_fields[1]));
}

#[test]
fn defer_info_on_fragments() {
    let fixture = Fixture::new("
{
  ... { a }
  ... @defer { b }
  ... @defer(label: \"c\") { c }
  ... @defer(if: false) { d }
  ... @defer(if: $deferIt, label: \"e\") { e }
  ...F @defer(if: true)
}
");
    let selections = fixture.operation().selection_set().selections();
    let infos_with = |variables: &VariableValues| -> Vec<Option<DeferInfo>> {
        selections.iter().map(|selection| match selection {
            Selection::Field(field) => defer_info(variables, field),
            Selection::FragmentSpread(spread) => defer_info(variables, spread),
            Selection::InlineFragment(inline_frag) => defer_info(variables, inline_frag),
        }).collect()
    };

    let deferred = |label: Option<&str>| Some(DeferInfo {
        label: label.map(str::to_string),
    });

    assert_eq!(infos_with(&VariableValues::new()), vec![
        None,
        deferred(None),
        deferred(Some("c")),
        None,
        deferred(Some("e")),
        deferred(None),
    ]);

    let bound: VariableValues = [("deferIt", Value::Bool(false))].into_iter().collect();
    assert_eq!(infos_with(&bound)[4], None);
}

#[test]
fn annotations_resolve_to_schema_directives() {
    let fixture = Fixture::new("{ name @defer(label: \"n\") @cached }");
    let fields = fixture.root_fields();
    let annotations = fields[0].directives();

    let names: Vec<_> = annotations.iter().map(|annot| annot.directive_name()).collect();
    assert_eq!(names, vec!["defer", "cached"]);
    assert_eq!(annotations[0].directive_type(&fixture.schema), Ok(&Directive::Defer));
    assert_eq!(
        annotations[1].directive_type(&fixture.schema),
        Err(DerefByNameError::DanglingReference("cached".to_string())),
    );
}
