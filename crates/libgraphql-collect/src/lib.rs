pub mod ast;
mod coercion;
mod directive_annotation;
pub mod execution;
pub mod loc;
mod named_ref;
pub mod operation;
pub mod schema;
pub mod types;
pub mod validation;
mod value;

pub use coercion::coerce_directive_args;
pub use directive_annotation::DirectiveAnnotated;
pub use directive_annotation::DirectiveAnnotation;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use value::NamedVariableRef;
pub use value::Value;
pub use value::VariableValues;
