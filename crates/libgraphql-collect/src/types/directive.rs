use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::types::Parameter;
use crate::Value;
use indexmap::IndexMap;
use std::sync::OnceLock;

/// A reference to some [`Directive`] by name, de-referenced against a
/// [`Schema`].
pub type NamedDirectiveRef = NamedRef<Schema, loc::SourceLocation, Directive>;

/// A directive definition.
///
/// Every [`Schema`] implicitly defines the built-in directives (`@defer`,
/// `@deprecated`, `@include`, `@skip`, `@specifiedBy`); all others are
/// [`Directive::Custom`].
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    Custom {
        def_location: loc::SourceLocation,
        name: String,
        params: IndexMap<String, Parameter>,
        repeatable: bool,
    },
    Defer,
    Deprecated,
    Include,
    Skip,
    SpecifiedBy,
}
impl Directive {
    pub fn def_location(&self) -> &loc::SourceLocation {
        static BUILTIN_LOCATION: loc::SourceLocation =
            loc::SourceLocation::GraphQLBuiltIn;

        match self {
            Self::Custom { def_location, .. } => def_location,
            Self::Defer
            | Self::Deprecated
            | Self::Include
            | Self::Skip
            | Self::SpecifiedBy => &BUILTIN_LOCATION,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom { .. })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Custom { name, .. } => name.as_str(),
            Self::Defer => "defer",
            Self::Deprecated => "deprecated",
            Self::Include => "include",
            Self::Skip => "skip",
            Self::SpecifiedBy => "specifiedBy",
        }
    }

    /// The declared arguments of this directive, including their default
    /// values, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        match self {
            Self::Custom { params, .. } => params,

            // defer(if: Boolean = true, label: String)
            Self::Defer => {
                static PARAMS: OnceLock<IndexMap<String, Parameter>> = OnceLock::new();
                PARAMS.get_or_init(|| builtin_params(vec![
                    Parameter::builtin("if", "Boolean", true, Some(Value::Bool(true))),
                    Parameter::builtin("label", "String", true, None),
                ]))
            },

            // deprecated(reason: String = "No longer supported")
            Self::Deprecated => {
                static PARAMS: OnceLock<IndexMap<String, Parameter>> = OnceLock::new();
                PARAMS.get_or_init(|| builtin_params(vec![
                    Parameter::builtin(
                        "reason",
                        "String",
                        true,
                        Some(Value::String("No longer supported".to_string())),
                    ),
                ]))
            },

            // include(if: Boolean!)
            Self::Include => {
                static PARAMS: OnceLock<IndexMap<String, Parameter>> = OnceLock::new();
                PARAMS.get_or_init(|| builtin_params(vec![
                    Parameter::builtin("if", "Boolean", false, None),
                ]))
            },

            // skip(if: Boolean!)
            Self::Skip => {
                static PARAMS: OnceLock<IndexMap<String, Parameter>> = OnceLock::new();
                PARAMS.get_or_init(|| builtin_params(vec![
                    Parameter::builtin("if", "Boolean", false, None),
                ]))
            },

            // specifiedBy(url: String!)
            Self::SpecifiedBy => {
                static PARAMS: OnceLock<IndexMap<String, Parameter>> = OnceLock::new();
                PARAMS.get_or_init(|| builtin_params(vec![
                    Parameter::builtin("url", "String", false, None),
                ]))
            },
        }
    }

    /// Custom directives declared `repeatable` may appear more than once on
    /// the same node. None of the built-in directives are repeatable.
    pub fn is_repeatable(&self) -> bool {
        matches!(self, Self::Custom { repeatable: true, .. })
    }
}
impl DerefByName for Directive {
    type Source = Schema;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a Directive, DerefByNameError> {
        schema.directive(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}

fn builtin_params(params: Vec<Parameter>) -> IndexMap<String, Parameter> {
    params.into_iter()
        .map(|param| (param.name.clone(), param))
        .collect()
}
