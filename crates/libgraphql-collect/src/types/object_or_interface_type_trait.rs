use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use indexmap::IndexMap;

/// Behavior shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`], both of which declare fields and may implement
/// interfaces.
pub trait ObjectOrInterfaceTypeTrait {
    fn def_location(&self) -> &loc::SourceLocation;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn implements_interface(&self, schema: &Schema, interface: &InterfaceType) -> bool;
    fn interface_names(&self) -> Vec<&str>;
    fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType>;
    fn name(&self) -> &str;
}
