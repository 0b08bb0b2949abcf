use crate::operation::Fragment;
use indexmap::IndexMap;

/// All [`Fragment`]s defined by an executable document, keyed by name and
/// kept in definition order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentRegistry {
    pub(super) fragments: IndexMap<String, Fragment>,
}
impl FragmentRegistry {
    pub fn get(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.values()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}
