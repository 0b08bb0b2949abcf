use crate::DerefByName;
use crate::DerefByNameError;
use crate::DirectiveAnnotated;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::NamedRef;
use crate::operation::FragmentRegistry;
use crate::operation::SelectionSet;
use crate::operation::TypeConditioned;
use crate::types::NamedGraphQLTypeRef;
use inherent::inherent;

pub type NamedFragmentRef = NamedRef<
    /* TSource = */ FragmentRegistry,
    /* TRefLocation = */ loc::SourceLocation,
    /* TResource = */ Fragment,
>;

/// A named fragment definition
/// (e.g. `fragment friendFields on User { id name }`).
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub(super) def_location: loc::SourceLocation,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: NamedGraphQLTypeRef,
}
impl Fragment {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The name of the type in this fragment's `on Type` clause.
    pub fn type_condition_name(&self) -> &str {
        self.type_condition.name()
    }
}
#[inherent]
impl DirectiveAnnotated for Fragment {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }
}
#[inherent]
impl TypeConditioned for Fragment {
    /// Always `Some`: a fragment definition must name its type condition.
    pub fn type_condition(&self) -> Option<&NamedGraphQLTypeRef> {
        Some(&self.type_condition)
    }
}
impl DerefByName for Fragment {
    type Source = FragmentRegistry;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        fragment_registry: &'a FragmentRegistry,
        name: &str,
    ) -> Result<&'a Fragment, DerefByNameError> {
        fragment_registry.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
