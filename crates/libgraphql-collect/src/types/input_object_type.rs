use crate::loc;
use crate::types::Parameter;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) fields: IndexMap<String, Parameter>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// A map from FieldName -> input field definition, ordered as defined in
    /// the schema.
    pub fn fields(&self) -> &IndexMap<String, Parameter> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
