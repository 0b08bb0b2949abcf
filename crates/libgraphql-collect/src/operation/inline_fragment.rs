use crate::DirectiveAnnotated;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::SelectionSet;
use crate::operation::TypeConditioned;
use crate::types::NamedGraphQLTypeRef;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(super) def_location: loc::SourceLocation,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: Option<NamedGraphQLTypeRef>,
}
impl InlineFragment {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
#[inherent]
impl DirectiveAnnotated for InlineFragment {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }
}
#[inherent]
impl TypeConditioned for InlineFragment {
    /// `None` for inline fragments written without an `on Type` clause.
    pub fn type_condition(&self) -> Option<&NamedGraphQLTypeRef> {
        self.type_condition.as_ref()
    }
}
