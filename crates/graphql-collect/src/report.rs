use anyhow::Context;
use indexmap::IndexMap;
use libgraphql_collect::execution::CollectionResult;
use libgraphql_collect::execution::GroupedFields;
use libgraphql_collect::operation::FieldSelection;
use libgraphql_collect::Value;
use libgraphql_collect::VariableValues;

/// JSON-serializable rendering of a [`CollectionResult`].
#[derive(Debug, serde::Serialize)]
pub(crate) struct CollectionReport<'a> {
    pub runtime_type: &'a str,
    pub fields: IndexMap<&'a str, Vec<FieldReport<'a>>>,
    pub patches: Vec<PatchReport<'a>>,
}
impl<'a> CollectionReport<'a> {
    pub fn new(runtime_type: &'a str, result: &CollectionResult<'a>) -> Self {
        Self {
            runtime_type,
            fields: grouped_fields_report(result.fields()),
            patches: result.patches().iter().map(|patch| PatchReport {
                label: patch.label().map(str::to_string),
                fields: grouped_fields_report(patch.fields()),
            }).collect(),
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct FieldReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<&'a str>,
    pub location: String,
    pub name: &'a str,
}
impl<'a> From<&'a FieldSelection> for FieldReport<'a> {
    fn from(field: &'a FieldSelection) -> Self {
        Self {
            alias: field.alias(),
            location: field.def_location().to_string(),
            name: field.name(),
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct PatchReport<'a> {
    pub label: Option<String>,
    pub fields: IndexMap<&'a str, Vec<FieldReport<'a>>>,
}

fn grouped_fields_report<'a>(
    fields: &GroupedFields<'a>,
) -> IndexMap<&'a str, Vec<FieldReport<'a>>> {
    fields.iter().map(|(response_key, field_nodes)| (
        response_key,
        field_nodes.iter().map(|field| FieldReport::from(*field)).collect(),
    )).collect()
}

/// Parse a JSON object of variable values (e.g. `{"id": 4, "withName": true}`).
pub(crate) fn variables_from_json(json: &str) -> anyhow::Result<VariableValues> {
    let parsed: serde_json::Value = serde_json::from_str(json)
        .context("Failed to parse variables as JSON")?;

    let entries = match parsed {
        serde_json::Value::Object(entries) => entries,
        other => anyhow::bail!("Variables must be a JSON object, found: {other}"),
    };

    Ok(entries.into_iter()
        .map(|(name, json_value)| (name, value_from_json(json_value)))
        .collect())
}

fn value_from_json(json_value: serde_json::Value) -> Value {
    match json_value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(value) => Value::Bool(value),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(int) => Value::Int(int),
            None => number.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        serde_json::Value::String(value) => Value::String(value),
        serde_json::Value::Array(items) =>
            Value::List(items.into_iter().map(value_from_json).collect()),
        serde_json::Value::Object(entries) => Value::Object(
            entries.into_iter()
                .map(|(key, json_value)| (key, value_from_json(json_value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::variables_from_json;
    use indexmap::IndexMap;
    use libgraphql_collect::Value;

    #[test]
    fn json_variables_become_values() -> anyhow::Result<()> {
        let variables = variables_from_json(
            r#"{"id": 4, "ratio": 0.5, "withName": true, "tags": ["a", null], "filter": {"name": "Rex"}}"#,
        )?;

        assert_eq!(variables.get("id"), Some(&Value::Int(4)));
        assert_eq!(variables.get("ratio"), Some(&Value::Float(0.5)));
        assert_eq!(variables.get("withName"), Some(&Value::Bool(true)));
        assert_eq!(variables.get("tags"), Some(&Value::List(vec![
            Value::String("a".to_string()),
            Value::Null,
        ])));
        assert_eq!(variables.get("filter"), Some(&Value::Object(IndexMap::from([
            ("name".to_string(), Value::String("Rex".to_string())),
        ]))));
        let names: Vec<_> = variables.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["id", "ratio", "withName", "tags", "filter"]);

        Ok(())
    }

    #[test]
    fn non_object_variables_are_rejected() {
        assert!(variables_from_json("[1, 2]").is_err());
        assert!(variables_from_json("{not json").is_err());
    }
}
