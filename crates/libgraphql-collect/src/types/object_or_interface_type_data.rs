use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceTypeData {
    // Schemas are not validated on build, so interface references may dangle
    // or form cycles. Neither may panic or loop here.
    fn implements_interface_impl<'schema>(
        &'schema self,
        schema: &'schema Schema,
        interface: &InterfaceType,
        visited: &mut HashSet<&'schema str>,
    ) -> bool {
        if !visited.insert(self.name.as_str()) {
            return false;
        }

        self.interfaces.iter().any(|iface_ref| {
            if iface_ref.name() == interface.name() {
                return true;
            }
            match iface_ref.deref(schema).ok().and_then(GraphQLType::as_interface) {
                Some(iface) => iface.0.implements_interface_impl(
                    schema,
                    interface,
                    visited,
                ),
                None => false,
            }
        })
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn implements_interface(
        &self,
        schema: &Schema,
        interface: &InterfaceType,
    ) -> bool {
        self.implements_interface_impl(schema, interface, &mut HashSet::new())
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    pub fn interfaces<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema InterfaceType> {
        self.interfaces
            .iter()
            .filter_map(|iface_ref| {
                iface_ref.deref(schema).ok().and_then(GraphQLType::as_interface)
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
