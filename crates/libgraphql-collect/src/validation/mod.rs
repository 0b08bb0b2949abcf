//! Validation of the fragment graph of an [`ExecutableDocument`].
//!
//! Field collection (see [`crate::execution`]) assumes a document has passed
//! these rules. Every error found is reported, not just the first.

mod fragment_validation_error;
mod known_fragment_names;
mod no_fragment_cycles;
mod no_unused_fragments;

pub use fragment_validation_error::FragmentValidationError;
pub use known_fragment_names::known_fragment_names;
pub use no_fragment_cycles::no_fragment_cycles;
pub use no_unused_fragments::no_unused_fragments;

use crate::operation::ExecutableDocument;

/// Run every fragment validation rule against `doc`.
pub fn validate_fragments(
    doc: &ExecutableDocument,
) -> Result<(), Vec<FragmentValidationError>> {
    let mut errors = no_unused_fragments(doc);
    errors.extend(known_fragment_names(doc));
    errors.extend(no_fragment_cycles(doc));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests;
