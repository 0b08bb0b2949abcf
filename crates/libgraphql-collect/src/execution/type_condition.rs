use crate::operation::TypeConditioned;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ObjectType;

/// Whether the selections of `fragment` apply to objects of `runtime_type`.
///
/// A fragment without a type condition always applies. Otherwise it applies
/// when its type condition names `runtime_type` itself, or names an interface
/// or union that `runtime_type` is a possible type of. A type condition that
/// names no type in `schema` never applies.
pub fn does_fragment_type_apply(
    schema: &Schema,
    fragment: &(impl TypeConditioned + ?Sized),
    runtime_type: &ObjectType,
) -> bool {
    let Some(type_condition) = fragment.type_condition() else {
        return true;
    };

    let condition_type = match type_condition.deref(schema) {
        Ok(condition_type) => condition_type,
        Err(err) => {
            log::debug!(
                "Treating type condition `on {}` at {} as non-matching: {err}",
                type_condition.name(),
                type_condition.ref_location(),
            );
            return false;
        },
    };

    match condition_type {
        GraphQLType::Object(obj_type) => obj_type.name() == runtime_type.name(),
        GraphQLType::Interface(_) | GraphQLType::Union(_) =>
            schema.is_possible_type(condition_type, runtime_type),
        _ => false,
    }
}
