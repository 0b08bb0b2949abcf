use crate::DirectiveAnnotated;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use crate::schema::GraphQLOperationType;
use crate::schema::Schema;
use crate::types::ObjectType;
use crate::VariableValues;
use indexmap::IndexMap;
use inherent::inherent;

/// A query, mutation, or subscription defined within an executable document.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(super) def_location: loc::SourceLocation,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) kind: GraphQLOperationType,
    pub(super) name: Option<String>,
    pub(super) selection_set: SelectionSet,
    pub(super) variables: IndexMap<String, Variable>,
}
impl Operation {
    /// Bind `provided` variable values to this operation's declared
    /// variables.
    ///
    /// Declared variables without a provided value fall back to their
    /// declared default (or remain unbound when there is none). Provided
    /// values for variables this operation does not declare are ignored.
    ///
    /// Values are not coerced against the variables' declared types.
    pub fn bind_variable_values(&self, provided: &VariableValues) -> VariableValues {
        self.variables.values().filter_map(|variable| {
            let value = match provided.get(variable.name()) {
                Some(value) => value.to_owned(),
                None => variable.default_value()?.to_owned(),
            };
            Some((variable.name(), value))
        }).collect()
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn kind(&self) -> GraphQLOperationType {
        self.kind
    }

    /// `None` for anonymous operations (including the `{ ... }` shorthand).
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The root object type this operation's selection set is collected
    /// against, if `schema` defines one for this kind of operation.
    pub fn root_type<'schema>(&self, schema: &'schema Schema) -> Option<&'schema ObjectType> {
        schema.root_operation_type(self.kind)
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn variables(&self) -> &IndexMap<String, Variable> {
        &self.variables
    }
}
#[inherent]
impl DirectiveAnnotated for Operation {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }
}
