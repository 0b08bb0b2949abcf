use crate::operation::ExecutableDocument;
use crate::validation::FragmentValidationError;

/// Every fragment spread must name a fragment defined in the document.
///
/// Spreads within operations are checked first (in operation order), then
/// spreads within fragment definitions.
pub fn known_fragment_names(doc: &ExecutableDocument) -> Vec<FragmentValidationError> {
    let fragments = doc.fragment_registry();
    let operation_sel_sets = doc.operations().iter().map(|op| op.selection_set());
    let fragment_sel_sets = fragments.iter().map(|fragment| fragment.selection_set());

    operation_sel_sets
        .chain(fragment_sel_sets)
        .flat_map(|selection_set| selection_set.fragment_spreads())
        .filter(|spread| fragments.get(spread.fragment_name()).is_none())
        .map(|spread| FragmentValidationError::UndefinedFragment {
            fragment_name: spread.fragment_name().to_string(),
            reference_location: spread.def_location().to_owned(),
        })
        .collect()
}
