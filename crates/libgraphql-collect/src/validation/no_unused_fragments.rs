use crate::operation::ExecutableDocument;
use crate::validation::FragmentValidationError;
use std::collections::HashSet;

/// Every fragment must be reachable, through some chain of spreads, from at
/// least one operation.
///
/// Fragments that only spread one another are unused (and each one is
/// reported) unless an operation spreads one of them.
pub fn no_unused_fragments(doc: &ExecutableDocument) -> Vec<FragmentValidationError> {
    let fragments = doc.fragment_registry();

    let mut reachable = HashSet::new();
    let mut pending: Vec<_> = doc.operations().iter()
        .flat_map(|op| op.selection_set().fragment_spreads())
        .collect();
    while let Some(spread) = pending.pop() {
        if !reachable.insert(spread.fragment_name()) {
            continue;
        }
        if let Ok(fragment) = spread.fragment(fragments) {
            pending.extend(fragment.selection_set().fragment_spreads());
        }
    }

    fragments.iter()
        .filter(|fragment| !reachable.contains(fragment.name()))
        .map(|fragment| FragmentValidationError::UnusedFragment {
            def_location: fragment.def_location().to_owned(),
            fragment_name: fragment.name().to_string(),
        })
        .collect()
}
