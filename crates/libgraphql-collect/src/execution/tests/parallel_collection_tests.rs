use crate::execution::tests::test_utils::keys;
use crate::execution::tests::test_utils::Fixture;
use crate::execution::FieldCollector;
use crate::Value;
use crate::VariableValues;
use rayon::prelude::*;

#[test]
fn concurrent_collections_are_independent() {
    let fixture = Fixture::new("
query ($deferNickname: Boolean) {
  name
  ...F
  ... on Pet @defer(if: $deferNickname, label: \"nick\") { nickname }
  ... @defer { ...F barkVolume }
}
fragment F on Dog { name owner { name } }
");
    let variables_sets: Vec<VariableValues> = vec![
        VariableValues::new(),
        [("deferNickname", Value::Bool(false))].into_iter().collect(),
    ];

    let expected: Vec<_> = variables_sets.iter()
        .map(|variables| fixture.collect("Dog", variables))
        .collect();

    let results: Vec<_> = (0..256).into_par_iter().map(|i| {
        let variables = &variables_sets[i % variables_sets.len()];
        let collector = FieldCollector::new(
            &fixture.schema,
            fixture.doc.fragment_registry(),
            variables,
            fixture.object_type("Dog"),
        );
        (i, collector.collect(fixture.operation().selection_set()))
    }).collect();

    for (i, result) in &results {
        assert_eq!(result, &expected[i % expected.len()]);
    }

    let deferred = &expected[0];
    assert_eq!(keys(deferred.fields()), vec!["name", "owner"]);
    assert_eq!(deferred.patches().len(), 2);
    assert_eq!(deferred.patches()[0].label(), Some("nick"));
    // `F` was already expanded outside the deferred fragment.
    assert_eq!(keys(deferred.patches()[1].fields()), vec!["barkVolume"]);

    let merged = &expected[1];
    assert_eq!(keys(merged.fields()), vec!["name", "owner", "nickname"]);
    assert_eq!(merged.patches().len(), 1);
}
