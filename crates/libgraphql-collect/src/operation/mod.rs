mod executable_document;
mod executable_document_builder;
mod field_selection;
mod fragment;
mod fragment_registry;
mod fragment_spread;
mod inline_fragment;
mod operation;
mod selection;
mod selection_set;
mod type_conditioned;
mod variable;

pub use executable_document::ExecutableDocument;
pub use executable_document_builder::ExecutableDocumentBuilder;
pub use executable_document_builder::ExecutableDocumentBuildError;
pub use field_selection::FieldSelection;
pub use fragment::Fragment;
pub use fragment::NamedFragmentRef;
pub use fragment_registry::FragmentRegistry;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use operation::Operation;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use type_conditioned::TypeConditioned;
pub use variable::Variable;

#[cfg(test)]
mod tests;
