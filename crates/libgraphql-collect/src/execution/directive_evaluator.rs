use crate::coerce_directive_args;
use crate::DirectiveAnnotated;
use crate::types::Directive;
use crate::Value;
use crate::VariableValues;

/// Whether a `@defer`red node is deferred, and under which label.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeferInfo {
    pub(crate) label: Option<String>,
}
impl DeferInfo {
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Determine whether `node` should be deferred.
///
/// A node is deferred when it carries `@defer` and the directive's `if`
/// argument does not resolve to `false`. Since `if` defaults to `true`, a
/// bare `@defer` defers (as does `@defer(if: $v)` with `$v` unbound).
pub fn defer_info(
    variables: &VariableValues,
    node: &(impl DirectiveAnnotated + ?Sized),
) -> Option<DeferInfo> {
    let args = coerce_directive_args(&Directive::Defer, node.directives(), variables)?;
    if args.get("if").and_then(Value::as_bool) == Some(false) {
        return None;
    }

    Some(DeferInfo {
        label: args.get("label").and_then(Value::as_str).map(str::to_string),
    })
}

/// Determine whether `node` is included per its `@skip` and `@include`
/// directives.
///
/// `@skip(if: true)` excludes and takes precedence over `@include`.
/// Otherwise `@include(if: false)` excludes. An `if` that doesn't resolve to
/// a boolean never excludes.
pub fn should_include(
    variables: &VariableValues,
    node: &(impl DirectiveAnnotated + ?Sized),
) -> bool {
    if if_arg(&Directive::Skip, node, variables) == Some(true) {
        return false;
    }
    if_arg(&Directive::Include, node, variables) != Some(false)
}

fn if_arg(
    directive: &Directive,
    node: &(impl DirectiveAnnotated + ?Sized),
    variables: &VariableValues,
) -> Option<bool> {
    coerce_directive_args(directive, node.directives(), variables)?
        .get("if")
        .and_then(Value::as_bool)
}
