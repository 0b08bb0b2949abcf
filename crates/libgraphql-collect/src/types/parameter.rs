use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use crate::Value;

/// A declared argument of a field or directive (or a field of an input
/// object type).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn builtin(
        name: &str,
        type_name: &str,
        nullable: bool,
        default_value: Option<Value>,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            default_value,
            name: name.to_string(),
            type_annotation: TypeAnnotation::named(
                type_name,
                nullable,
                loc::SourceLocation::GraphQLBuiltIn,
            ),
        }
    }

    pub(crate) fn from_ast(
        file_path: Option<&std::path::Path>,
        input_value: &ast::schema::InputValue,
    ) -> Self {
        let def_location = loc::SourceLocation::from_ast_position(
            file_path,
            &input_value.position,
        );
        Self {
            default_value: input_value.default_value.as_ref().map(
                |ast_value| Value::from_ast(ast_value, &def_location),
            ),
            name: input_value.name.clone(),
            type_annotation: TypeAnnotation::from_ast_type(
                &def_location,
                &input_value.value_type,
            ),
            def_location,
        }
    }
}
