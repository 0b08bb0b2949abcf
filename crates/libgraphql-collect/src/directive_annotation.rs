use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::NamedDirectiveRef;
use crate::DerefByNameError;
use crate::Value;
use indexmap::IndexMap;

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// placed on a field, fragment spread, inline fragment, fragment definition,
/// or operation within an executable document.
///
/// A [`DirectiveAnnotation`] can be thought of as a "pointer" to some
/// [`Directive`] paired with a set of named argument [`Value`]s, which may
/// still contain unresolved variable references.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) args: IndexMap<String, Value>,
    pub(crate) directive_ref: NamedDirectiveRef,
}
impl DirectiveAnnotation {
    /// A map from ParameterName -> [`Value`] for all arguments passed to this
    /// [`DirectiveAnnotation`], in the order they were written.
    pub fn args(&self) -> &IndexMap<String, Value> {
        &self.args
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        self.directive_ref.ref_location()
    }

    /// The [`Directive`] definition this annotation refers to, if the
    /// [`Schema`] defines one with this name.
    pub fn directive_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Result<&'schema Directive, DerefByNameError> {
        self.directive_ref.deref(schema)
    }

    /// The name of the [`Directive`] this annotation refers to.
    ///
    /// This can be useful when the [`Schema`] object is unavailable or
    /// inconvenient to access but the directive's name is all that's needed.
    pub fn directive_name(&self) -> &str {
        self.directive_ref.name()
    }

    pub(crate) fn from_ast(
        annotated_item_srcloc: &loc::SourceLocation,
        ast_annots: &[ast::operation::Directive],
    ) -> Vec<Self> {
        ast_annots.iter().map(|ast_annot| {
            let annot_srcloc =
                annotated_item_srcloc.with_ast_position(&ast_annot.position);
            let args = ast_annot.arguments.iter()
                .map(|(arg_name, ast_arg)| (
                    arg_name.to_string(),
                    Value::from_ast(ast_arg, &annot_srcloc),
                ))
                .collect();
            DirectiveAnnotation {
                args,
                directive_ref: NamedDirectiveRef::new(
                    &ast_annot.name,
                    annot_srcloc,
                ),
            }
        }).collect()
    }
}

/// Implemented by every executable-document node that can carry
/// [`DirectiveAnnotation`]s.
pub trait DirectiveAnnotated {
    /// The [`DirectiveAnnotation`]s applied to this node, in the order they
    /// were written.
    fn directives(&self) -> &[DirectiveAnnotation];
}
