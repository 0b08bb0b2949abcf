use crate::DirectiveAnnotated;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::SelectionSet;
use crate::Value;
use indexmap::IndexMap;
use inherent::inherent;

/// A single field selected within a [`SelectionSet`]
/// (e.g. `smallPic: profilePic(size: 64) @include(if: $withPic)`).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(super) alias: Option<String>,
    pub(super) arguments: IndexMap<String, Value>,
    pub(super) def_location: loc::SourceLocation,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) selection_set: Option<SelectionSet>,
}
impl FieldSelection {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The name of the schema field being selected (regardless of any alias).
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The key under which this field's value appears in a response: the
    /// alias if one was given, otherwise the field name.
    ///
    /// Field selections are grouped by this key during field collection.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    /// The sub-selection of this field, or `None` for leaf selections.
    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }
}
#[inherent]
impl DirectiveAnnotated for FieldSelection {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }
}
