use crate::ast;
use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use indexmap::IndexMap;

/// A reference to a variable (e.g. `$includeName`) appearing as an argument
/// value, resolved against a set of bound [`VariableValues`].
pub type NamedVariableRef = NamedRef<
    /* TSource = */ VariableValues,
    /* TRefLocation = */ loc::SourceLocation,
    /* TResource = */ Value,
>;

/// An argument value as written in an executable document (or a bound
/// variable value supplied alongside it).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    VarRef(NamedVariableRef),
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    /// Returns the inner `bool` if (and only if) this is exactly a
    /// [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub(crate) fn from_ast(
        ast_value: &ast::Value,
        position: &loc::SourceLocation,
    ) -> Self {
        match ast_value {
            ast::Value::Variable(var_name) =>
                Value::VarRef(Value::named_ref(var_name, position.to_owned())),

            ast::Value::Int(value) =>
                value.as_i64().map(Value::Int).unwrap_or(Value::Null),

            ast::Value::Float(value) =>
                Value::Float(*value),

            ast::Value::String(value) =>
                Value::String(value.clone()),

            ast::Value::Boolean(value) =>
                Value::Bool(*value),

            ast::Value::Null =>
                Value::Null,

            ast::Value::Enum(value) =>
                Value::Enum(value.clone()),

            ast::Value::List(values) =>
                Value::List(values.iter().map(|ast_value|
                    Value::from_ast(ast_value, position)
                ).collect()),

            ast::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_ast(ast_value, position))
                ).collect()),
        }
    }

    /// Substitute every variable reference in this value with its bound value.
    ///
    /// Returns `None` when this value is itself a reference to an unbound
    /// variable. Unbound variables nested inside a list become `null`, and
    /// unbound variables nested inside an object drop that object field.
    pub fn resolve(&self, variables: &VariableValues) -> Option<Value> {
        match self {
            Self::VarRef(var_ref) => var_ref.deref(variables).ok().cloned(),

            Self::List(items) => Some(Self::List(
                items.iter()
                    .map(|item| item.resolve(variables).unwrap_or(Self::Null))
                    .collect(),
            )),

            Self::Object(entries) => Some(Self::Object(
                entries.iter()
                    .filter_map(|(key, value)| {
                        value.resolve(variables).map(|value| (key.clone(), value))
                    })
                    .collect(),
            )),

            Self::Int(_)
            | Self::Float(_)
            | Self::String(_)
            | Self::Bool(_)
            | Self::Null
            | Self::Enum(_) => Some(self.clone()),
        }
    }
}
impl DerefByName for Value {
    type Source = VariableValues;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        variables: &'a VariableValues,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        variables.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}

/// The variable values bound for one execution of an operation.
///
/// Entries retain the order in which they were bound.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableValues(IndexMap<String, Value>);
impl VariableValues {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Bind `value` to the variable named `name`, returning the previously
    /// bound value (if there was one).
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
impl<K: Into<String>> FromIterator<(K, Value)> for VariableValues {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }
}
