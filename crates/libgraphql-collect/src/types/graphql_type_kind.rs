use crate::types::GraphQLType;

/// The category a [`GraphQLType`] belongs to. Built-in scalars are
/// [`GraphQLTypeKind::Scalar`]s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl GraphQLTypeKind {
    /// Interfaces and unions. Fragments with an abstract type condition apply
    /// to each of the abstract type's possible object types.
    pub fn is_abstract(self) -> bool {
        matches!(self, Self::Interface | Self::Union)
    }

    /// Whether a field of this kind can carry a sub-selection set.
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }
}
impl From<&GraphQLType> for GraphQLTypeKind {
    fn from(graphql_type: &GraphQLType) -> Self {
        match graphql_type {
            GraphQLType::Enum(_) => Self::Enum,
            GraphQLType::InputObject(_) => Self::InputObject,
            GraphQLType::Interface(_) => Self::Interface,
            GraphQLType::Object(_) => Self::Object,
            GraphQLType::Union(_) => Self::Union,
            GraphQLType::Bool
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::Scalar(_)
            | GraphQLType::String => Self::Scalar,
        }
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Enum => "enum",
            Self::InputObject => "input object",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Union => "union",
        })
    }
}
