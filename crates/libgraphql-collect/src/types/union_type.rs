use crate::loc;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// A [union type](https://spec.graphql.org/October2021/#sec-Unions). Its
/// possible types are exactly its members.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.contains_key(type_name)
    }

    /// Names of the union's member types, in declaration order.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
