use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

static BUILTIN_LOCATION: loc::SourceLocation = loc::SourceLocation::GraphQLBuiltIn;

/// A reference to some [`GraphQLType`] by name, de-referenced against a
/// [`Schema`].
pub type NamedGraphQLTypeRef = NamedRef<Schema, loc::SourceLocation, GraphQLType>;

/// Every named type a [`Schema`] can define.
///
/// The built-in scalars (`Boolean`, `Float`, `ID`, `Int`, `String`) are
/// represented as dedicated, data-less variants.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Bool
            | Self::Float
            | Self::ID
            | Self::Int
            | Self::String => &BUILTIN_LOCATION,
            Self::Enum(type_) => type_.def_location(),
            Self::InputObject(type_) => type_.def_location(),
            Self::Interface(type_) => type_.def_location(),
            Self::Object(type_) => type_.def_location(),
            Self::Scalar(type_) => type_.def_location(),
            Self::Union(type_) => type_.def_location(),
        }
    }

    pub fn is_abstract(&self) -> bool {
        self.type_kind().is_abstract()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(type_) => type_.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(type_) => type_.name(),
            Self::Int => "Int",
            Self::Interface(type_) => type_.name(),
            Self::Object(type_) => type_.name(),
            Self::Scalar(type_) => type_.name(),
            Self::String => "String",
            Self::Union(type_) => type_.name(),
        }
    }

    pub fn type_kind(&self) -> GraphQLTypeKind {
        self.into()
    }
}
impl DerefByName for GraphQLType {
    type Source = Schema;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a GraphQLType, DerefByNameError> {
        schema.lookup_type(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string())
        )
    }
}
