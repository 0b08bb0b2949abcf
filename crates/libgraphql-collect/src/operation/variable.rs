use crate::loc;
use crate::types::TypeAnnotation;
use crate::Value;

/// A variable declared by an [`Operation`](crate::operation::Operation)
/// (e.g. `$withFriends: Boolean = false`).
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub(super) def_location: loc::SourceLocation,
    pub(super) default_value: Option<Value>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl Variable {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// The variable's name, without the leading `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
