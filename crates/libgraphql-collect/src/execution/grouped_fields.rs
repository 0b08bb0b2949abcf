use crate::operation::FieldSelection;
use indexmap::IndexMap;

/// Field selections grouped by response key.
///
/// Keys iterate in the order they were first encountered, and each key maps
/// to every [`FieldSelection`] collected under it (in collection order).
/// Selections sharing a key are merged into one response entry by an
/// executor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupedFields<'doc>(IndexMap<&'doc str, Vec<&'doc FieldSelection>>);
impl<'doc> GroupedFields<'doc> {
    pub fn get(&self, response_key: &str) -> Option<&[&'doc FieldSelection]> {
        self.0.get(response_key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'doc str, &[&'doc FieldSelection])> {
        self.0.iter().map(|(response_key, fields)| (*response_key, fields.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Append `field` to the group for its response key, starting a new group
    /// (at the end) if this is the first field with that key.
    pub fn push(&mut self, field: &'doc FieldSelection) {
        self.0.entry(field.response_key()).or_default().push(field);
    }

    pub fn response_keys(&self) -> impl Iterator<Item = &'doc str> + '_ {
        self.0.keys().copied()
    }
}
