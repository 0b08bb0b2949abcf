use crate::ast;
use crate::loc;
use crate::types::NamedGraphQLTypeRef;

/// Represents the annotated type of a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter), or
/// [`Variable`](crate::operation::Variable).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
        ref_location: loc::SourceLocation,
    },
    Named {
        nullable: bool,
        type_ref: NamedGraphQLTypeRef,
    },
}
impl TypeAnnotation {
    pub(crate) fn from_ast_type(
        src_loc: &loc::SourceLocation,
        ast_type: &ast::Type,
    ) -> Self {
        Self::from_ast_type_impl(src_loc, ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        location: &loc::SourceLocation,
        ast_type: &ast::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::Type::ListType(inner) =>
                Self::List {
                    inner: Box::new(Self::from_ast_type_impl(
                        location,
                        inner,
                        true,
                    )),
                    nullable,
                    ref_location: location.to_owned(),
                },

            ast::Type::NamedType(name) =>
                Self::named(name, nullable, location.to_owned()),

            ast::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(location, inner, false),
        }
    }

    /// The named type at the core of this annotation (e.g. `Human` for
    /// `[Human!]!`).
    pub fn innermost_type_ref(&self) -> &NamedGraphQLTypeRef {
        match self {
            Self::List { inner, .. } => inner.innermost_type_ref(),
            Self::Named { type_ref, .. } => type_ref,
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } | Self::Named { nullable, .. } => *nullable,
        }
    }

    pub(crate) fn named(
        type_name: &str,
        nullable: bool,
        ref_location: loc::SourceLocation,
    ) -> Self {
        Self::Named {
            nullable,
            type_ref: NamedGraphQLTypeRef::new(type_name, ref_location),
        }
    }

    pub fn to_graphql_string(&self) -> String {
        let (inner_str, nullable) = match self {
            Self::List { inner, nullable, .. } =>
                (format!("[{}]", inner.to_graphql_string()), *nullable),
            Self::Named { type_ref, nullable } =>
                (type_ref.name().to_string(), *nullable),
        };
        if nullable {
            inner_str
        } else {
            format!("{inner_str}!")
        }
    }
}
