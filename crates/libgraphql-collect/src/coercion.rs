use crate::DirectiveAnnotation;
use crate::types::Directive;
use crate::Value;
use crate::VariableValues;
use indexmap::IndexMap;

/// Resolve the arguments of the first application of `directive` found in
/// `annotations`.
///
/// Returns `None` when `directive` is not applied at all. Otherwise returns
/// one entry per declared parameter of `directive` that ends up with a value:
///
///   * A literal argument is used as written (with any nested variable
///     references resolved against `variables`).
///   * A variable argument is replaced by its bound value. An unbound variable
///     is treated as if the argument had been omitted.
///   * An omitted argument takes the parameter's declared default value, if
///     it has one.
///
/// Arguments that `directive` does not declare are ignored. Values are not
/// checked against the declared parameter types.
pub fn coerce_directive_args(
    directive: &Directive,
    annotations: &[DirectiveAnnotation],
    variables: &VariableValues,
) -> Option<IndexMap<String, Value>> {
    let annotation = annotations.iter().find(
        |annot| annot.directive_name() == directive.name(),
    )?;

    let coerced = directive.parameters().iter().filter_map(|(param_name, param)| {
        let provided = annotation.args()
            .get(param_name)
            .and_then(|arg_value| arg_value.resolve(variables));

        provided
            .or_else(|| param.default_value().cloned())
            .map(|value| (param_name.to_string(), value))
    }).collect();

    Some(coerced)
}
