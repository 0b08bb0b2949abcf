//! Field collection: expanding a selection set into the fields to resolve for
//! one concrete runtime object type, with `@defer`red subtrees split out into
//! separately deliverable [`Patch`]es.

mod collection_result;
mod directive_evaluator;
mod field_collector;
mod grouped_fields;
mod type_condition;

pub use collection_result::CollectionResult;
pub use collection_result::Patch;
pub use directive_evaluator::defer_info;
pub use directive_evaluator::should_include;
pub use directive_evaluator::DeferInfo;
pub use field_collector::collect_fields;
pub use field_collector::collect_subfields;
pub use field_collector::FieldCollector;
pub use field_collector::VisitedFragmentNames;
pub use grouped_fields::GroupedFields;
pub use type_condition::does_fragment_type_apply;

#[cfg(test)]
mod tests;
