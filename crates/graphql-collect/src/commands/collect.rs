use crate::output_utils;
use crate::report::variables_from_json;
use crate::report::CollectionReport;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_collect::execution::collect_fields;
use libgraphql_collect::execution::collect_subfields;
use libgraphql_collect::operation::ExecutableDocument;
use libgraphql_collect::operation::ExecutableDocumentBuilder;
use libgraphql_collect::schema::Schema;
use libgraphql_collect::schema::SchemaBuilder;
use libgraphql_collect::types::GraphQLType;
use libgraphql_collect::types::ObjectType;
use libgraphql_collect::VariableValues;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, clap::Args)]
pub(crate) struct CollectCmd {
    #[arg(
        help="Path to the GraphQL executable document containing the operation \
             to collect.",
        long,
        short='d',
    )]
    document: PathBuf,

    #[arg(
        help="Name of the operation to collect. Required when the document \
             defines more than one operation.",
        long,
        short='o',
    )]
    operation: Option<String>,

    #[arg(
        help="Response key of a collected field whose sub-selections should \
             be collected next. Repeat to descend further. A `:Type` suffix \
             sets the runtime type (required when the field's declared type \
             is abstract).",
        long="path",
        value_name="KEY[:TYPE]",
    )]
    paths: Vec<FieldPathSegment>,

    #[arg(
        help="Object type to collect the operation's selection set against. \
             Defaults to the schema's root type for the operation.",
        long,
    )]
    runtime_type: Option<String>,

    #[arg(
        help="Paths to one or more GraphQL schema (SDL) files.",
        long="schema",
        required=true,
        short='s',
    )]
    schema_files: Vec<PathBuf>,

    #[arg(
        help="Variable values for the operation, as a JSON object.",
        long,
    )]
    variables: Option<String>,
}

#[inherent::inherent]
impl RunnableCommand for CollectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.collect() {
            Ok(report_json) => CommandResult::stdout(format_args!("{report_json}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}
impl CollectCmd {
    fn collect(&self) -> anyhow::Result<String> {
        let mut schema_builder = SchemaBuilder::new();
        for schema_file in &self.schema_files {
            log::debug!("Loading schema file {schema_file:#?}...");
            let content = read_file(schema_file)?;
            schema_builder = schema_builder.load_str(Some(schema_file.as_path()), content)
                .with_context(|| format!("Failed to load schema file {}", schema_file.display()))?;
        }
        let schema = schema_builder.build().context("Failed to build schema")?;

        let doc_content = read_file(&self.document)?;
        let doc = ExecutableDocumentBuilder::from_str(Some(self.document.as_path()), doc_content)
            .map_err(|errors| anyhow::anyhow!(
                "Failed to build executable document:\n{}",
                format_errors(&errors),
            ))?
            .build();

        let provided_variables = match &self.variables {
            Some(json) => variables_from_json(json)?,
            None => VariableValues::new(),
        };

        collect_to_json(
            &schema,
            &doc,
            self.operation.as_deref(),
            &provided_variables,
            self.runtime_type.as_deref(),
            &self.paths,
        )
    }
}

/// One step of a `--path`: the response key to descend into, and optionally
/// the object type to collect its sub-selections against.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FieldPathSegment {
    pub response_key: String,
    pub type_name: Option<String>,
}
impl FromStr for FieldPathSegment {
    type Err = String;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        let (response_key, type_name) = match segment.split_once(':') {
            Some((response_key, type_name)) => (response_key, Some(type_name)),
            None => (segment, None),
        };

        if response_key.is_empty() || type_name.is_some_and(str::is_empty) {
            return Err(format!("Invalid path segment `{segment}`, expected `KEY[:TYPE]`"));
        }

        Ok(Self {
            response_key: response_key.to_string(),
            type_name: type_name.map(str::to_string),
        })
    }
}

/// Collect an operation's root selection set, then follow `paths` through
/// the collected fields, and render the last collection as JSON.
pub(crate) fn collect_to_json(
    schema: &Schema,
    doc: &ExecutableDocument,
    operation_name: Option<&str>,
    provided_variables: &VariableValues,
    runtime_type_name: Option<&str>,
    paths: &[FieldPathSegment],
) -> anyhow::Result<String> {
    let operation = doc.operation(operation_name).with_context(|| match operation_name {
        Some(name) => format!("No operation named `{name}` is defined"),
        None => format!(
            "Expected exactly one operation to be defined, found {}. Use \
            --operation to select one.",
            doc.operations().len(),
        ),
    })?;

    let variables = operation.bind_variable_values(provided_variables);

    let mut runtime_type = match runtime_type_name {
        Some(type_name) => lookup_object_type(schema, type_name)?,
        None => operation.root_type(schema).with_context(|| format!(
            "The schema defines no root type for {} operations",
            operation.kind(),
        ))?,
    };

    let mut result = collect_fields(
        schema,
        doc.fragment_registry(),
        &variables,
        runtime_type,
        operation.selection_set(),
    );

    for segment in paths {
        let field_nodes = result.fields().get(segment.response_key.as_str()).with_context(|| format!(
            "No field with response key `{}` was collected for `{}`",
            segment.response_key,
            runtime_type.name(),
        ))?;

        let next_type = match &segment.type_name {
            Some(type_name) => lookup_object_type(schema, type_name)?,
            None => declared_object_type(schema, runtime_type, field_nodes[0].name())?,
        };
        log::debug!(
            "Collecting sub-selections of `{}` for `{}`...",
            segment.response_key,
            next_type.name(),
        );

        let subfields = collect_subfields(
            schema,
            doc.fragment_registry(),
            &variables,
            next_type,
            field_nodes,
        );
        result = subfields;
        runtime_type = next_type;
    }

    let report = CollectionReport::new(runtime_type.name(), &result);
    Ok(serde_json::to_string_pretty(&report)?)
}

fn declared_object_type<'schema>(
    schema: &'schema Schema,
    parent_type: &ObjectType,
    field_name: &str,
) -> anyhow::Result<&'schema ObjectType> {
    let field = parent_type.fields().get(field_name).with_context(|| format!(
        "`{}` has no field named `{field_name}`",
        parent_type.name(),
    ))?;

    let type_name = field.type_annotation().innermost_type_ref().name();
    match schema.lookup_type(type_name) {
        Some(GraphQLType::Object(obj_type)) => Ok(obj_type),
        Some(other) if other.is_abstract() => anyhow::bail!(
            "`{}.{field_name}` has {} type `{type_name}`. Use --path KEY:TYPE to \
            pick an object type.",
            parent_type.name(),
            other.type_kind(),
        ),
        Some(other) => anyhow::bail!(
            "`{}.{field_name}` has {} type `{type_name}`, which has no fields \
            to collect",
            parent_type.name(),
            other.type_kind(),
        ),
        None => anyhow::bail!("Type `{type_name}` is not defined in the schema"),
    }
}

fn format_errors(errors: &[impl std::fmt::Display]) -> String {
    errors.iter()
        .map(|err| format!("  * {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn lookup_object_type<'schema>(
    schema: &'schema Schema,
    type_name: &str,
) -> anyhow::Result<&'schema ObjectType> {
    match schema.lookup_type(type_name) {
        Some(GraphQLType::Object(obj_type)) => Ok(obj_type),
        Some(other) => anyhow::bail!(
            "`{type_name}` is not an object type (found {} type)",
            other.type_kind(),
        ),
        None => anyhow::bail!("Type `{type_name}` is not defined in the schema"),
    }
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))
}
