use crate::types::NamedGraphQLTypeRef;

/// Implemented by fragments (inline or named) whose selections only apply to
/// objects of some type.
pub trait TypeConditioned {
    fn type_condition(&self) -> Option<&NamedGraphQLTypeRef>;
}
