use crate::schema::GraphQLOperationType;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use std::collections::HashMap;

/// Represents an immutable GraphQL schema: the type system that fragment type
/// conditions are resolved and matched against.
///
/// A [`Schema`] is never mutated after [`SchemaBuilder::build()`], so a single
/// instance can be shared by any number of concurrent field collections.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: HashMap<String, Directive>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Returns a [`HashMap<String, Directive>`] containing all directives
    /// defined within this [`Schema`].
    ///
    /// [^note] This map includes both directives defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in directives like
    /// `@skip` and `@defer`.
    pub fn all_directives(&self) -> &HashMap<String, Directive> {
        &self.directive_defs
    }

    /// Returns a [`HashMap<String, GraphQLType>`] containing all types defined
    /// within this [`Schema`], including the built-in scalars.
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    /// Whether `object_type` is one of the possible runtime types of
    /// `abstract_type`: a member of the union, or an implementor (directly or
    /// transitively) of the interface.
    ///
    /// Always `false` when `abstract_type` is not an abstract type.
    pub fn is_possible_type(
        &self,
        abstract_type: &GraphQLType,
        object_type: &ObjectType,
    ) -> bool {
        match abstract_type {
            GraphQLType::Interface(iface) =>
                object_type.implements_interface(self, iface),
            GraphQLType::Union(union_type) =>
                union_type.has_member(object_type.name()),
            _ => false,
        }
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().and_then(|named_ref| {
            named_ref.deref(self).ok()
        })
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// GraphQL defines an object type named "Query" as the _default_ Query
    /// type, but a `schema { query: ... }` block may override it. This
    /// accounts for any such override.
    pub fn query_type(&self) -> Option<&GraphQLType> {
        self.query_type.deref(self).ok()
    }

    /// The root object type for operations of the given kind, if this
    /// [`Schema`] defines one.
    pub fn root_operation_type(
        &self,
        operation_type: GraphQLOperationType,
    ) -> Option<&ObjectType> {
        match operation_type {
            GraphQLOperationType::Query => self.query_type(),
            GraphQLOperationType::Mutation => self.mutation_type(),
            GraphQLOperationType::Subscription => self.subscription_type(),
        }.and_then(GraphQLType::as_object)
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().and_then(|named_ref| {
            named_ref.deref(self).ok()
        })
    }
}
