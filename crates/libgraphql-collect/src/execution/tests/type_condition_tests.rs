use crate::execution::does_fragment_type_apply;
use crate::execution::tests::test_utils::Fixture;
use crate::operation::Selection;

#[test]
fn inline_fragment_type_conditions() {
    let fixture = Fixture::new("
{
  ... { a }
  ... on Dog { b }
  ... on Cat { c }
  ... on Pet { d }
  ... on Named { e }
  ... on CatOrDog { f }
  ... on Query { g }
  ... on String { h }
  ... on Unknown { i }
}
");
    let selections = fixture.operation().selection_set().selections();
    let applies_to = |type_name: &str| -> Vec<bool> {
        let runtime_type = fixture.object_type(type_name);
        selections.iter().filter_map(|selection| match selection {
            Selection::InlineFragment(inline_frag) => Some(
                does_fragment_type_apply(&fixture.schema, inline_frag, runtime_type),
            ),
            _ => None,
        }).collect()
    };

    assert_eq!(
        applies_to("Dog"),
        vec![true, true, false, true, true, true, false, false, false],
    );
    assert_eq!(
        applies_to("Wolf"),
        vec![true, false, false, false, true, false, false, false, false],
    );
    assert_eq!(
        applies_to("Human"),
        vec![true, false, false, false, true, false, false, false, false],
    );
}

#[test]
fn named_fragment_type_conditions() {
    let fixture = Fixture::new("
{ a }
fragment OnPet on Pet { name }
fragment OnCatOrDog on CatOrDog { name }
fragment OnMissing on Missing { name }
");
    let fragments = fixture.doc.fragment_registry();
    let dog = fixture.object_type("Dog");
    let wolf = fixture.object_type("Wolf");

    let applies = |fragment_name: &str, runtime_type| {
        let fragment = fragments.get(fragment_name).expect("fragment is defined");
        does_fragment_type_apply(&fixture.schema, fragment, runtime_type)
    };

    assert!(applies("OnPet", dog));
    assert!(!applies("OnPet", wolf));
    assert!(applies("OnCatOrDog", dog));
    assert!(!applies("OnCatOrDog", wolf));
    assert!(!applies("OnMissing", dog));
}
