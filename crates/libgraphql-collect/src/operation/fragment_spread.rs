use crate::DerefByNameError;
use crate::DirectiveAnnotated;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::Fragment;
use crate::operation::FragmentRegistry;
use crate::operation::NamedFragmentRef;
use inherent::inherent;

/// A named fragment spread (e.g. `...friendFields @defer`).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) fragment_ref: NamedFragmentRef,
}
impl FragmentSpread {
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.fragment_ref.ref_location()
    }

    /// Look up the [`Fragment`] this spread refers to.
    ///
    /// Documents are not validated when built, so a spread may name a
    /// fragment that was never defined.
    pub fn fragment<'fragreg>(
        &self,
        fragment_registry: &'fragreg FragmentRegistry,
    ) -> Result<&'fragreg Fragment, DerefByNameError> {
        self.fragment_ref.deref(fragment_registry)
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_ref.name()
    }
}
#[inherent]
impl DirectiveAnnotated for FragmentSpread {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }
}
