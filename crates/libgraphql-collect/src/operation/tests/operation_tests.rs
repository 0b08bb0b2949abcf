use crate::operation::ExecutableDocumentBuilder;
use crate::schema::SchemaBuilder;
use crate::Value;
use crate::VariableValues;

#[test]
fn bind_variable_values_applies_defaults() {
    let doc = ExecutableDocumentBuilder::from_str(None, "
        query Q($a: Boolean = true, $b: Boolean, $c: Int = 3) { a }
    ").expect("document builds").build();
    let op = doc.operation(Some("Q")).expect("operation is defined");

    let provided: VariableValues = [
        ("c", Value::Int(5)),
        ("undeclared", Value::Bool(false)),
    ].into_iter().collect();
    let bound = op.bind_variable_values(&provided);

    assert_eq!(bound.get("a"), Some(&Value::Bool(true)));
    assert_eq!(bound.get("b"), None);
    assert_eq!(bound.get("c"), Some(&Value::Int(5)));
    assert_eq!(bound.get("undeclared"), None);
    assert_eq!(bound.len(), 2);
}

#[test]
fn root_type_follows_the_operation_kind() {
    let schema = SchemaBuilder::from_str(None, "
        type Query { a: Int }
        type Mutation { b: Int }
    ").and_then(SchemaBuilder::build).expect("schema builds");

    let doc = ExecutableDocumentBuilder::from_str(None, "
        query Q { a }
        mutation M { b }
        subscription S { c }
    ").expect("document builds").build();

    let root_name = |op_name| {
        doc.operation(Some(op_name))
            .and_then(|op| op.root_type(&schema))
            .map(|obj_type| obj_type.name())
    };
    assert_eq!(root_name("Q"), Some("Query"));
    assert_eq!(root_name("M"), Some("Mutation"));
    assert_eq!(root_name("S"), None);
}
