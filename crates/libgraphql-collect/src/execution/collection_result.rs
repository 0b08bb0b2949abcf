use crate::execution::GroupedFields;

/// The fields of one `@defer`red fragment, to be delivered separately from
/// (and after) the fields they were deferred from.
#[derive(Clone, Debug, PartialEq)]
pub struct Patch<'doc> {
    pub(crate) fields: GroupedFields<'doc>,
    pub(crate) label: Option<String>,
}
impl<'doc> Patch<'doc> {
    pub fn fields(&self) -> &GroupedFields<'doc> {
        &self.fields
    }

    /// The `label` argument of the `@defer` that produced this patch.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Everything collected from one selection set: the fields to resolve now,
/// plus one [`Patch`] per deferred fragment.
///
/// Patches are flat. A deferred fragment nested in another deferred fragment
/// produces its own [`Patch`], which precedes the enclosing fragment's
/// [`Patch`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionResult<'doc> {
    pub(crate) fields: GroupedFields<'doc>,
    pub(crate) patches: Vec<Patch<'doc>>,
}
impl<'doc> CollectionResult<'doc> {
    pub fn fields(&self) -> &GroupedFields<'doc> {
        &self.fields
    }

    pub fn patches(&self) -> &[Patch<'doc>] {
        &self.patches
    }
}
