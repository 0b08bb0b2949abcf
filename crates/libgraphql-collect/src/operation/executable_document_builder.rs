use crate::ast;
use crate::DerefByName;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::ExecutableDocument;
use crate::operation::Fragment;
use crate::operation::FragmentRegistry;
use crate::operation::Operation;
use crate::operation::SelectionSet;
use crate::operation::Variable;
use crate::schema::GraphQLOperationType;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, Vec<ExecutableDocumentBuildError>>;

/// Builds an [`ExecutableDocument`] from one or more GraphQL documents.
///
/// Building only checks what is needed to produce an unambiguous document
/// (unique fragment names, unique operation names, unique arguments). All
/// other validation is left to [`crate::validation`] and to whatever consumes
/// the document.
#[derive(Debug, Default)]
pub struct ExecutableDocumentBuilder {
    fragments: IndexMap<String, Fragment>,
    operations: Vec<Operation>,
}
impl ExecutableDocumentBuilder {
    pub fn build(self) -> ExecutableDocument {
        ExecutableDocument {
            fragment_registry: FragmentRegistry {
                fragments: self.fragments,
            },
            operations: self.operations,
        }
    }

    pub fn from_ast(
        file_path: Option<&Path>,
        ast_doc: &ast::operation::Document,
    ) -> Result<Self> {
        Self::new().load_ast(file_path, ast_doc)
    }

    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    /// Add every operation and fragment defined in `ast_doc` to this builder.
    ///
    /// All errors found in the document are reported together.
    ///
    /// Without the source text, fragment spreads and inline fragments are
    /// located at the token following their `...`. Prefer
    /// [`load_str`](Self::load_str) when the text is at hand.
    pub fn load_ast(
        self,
        file_path: Option<&Path>,
        ast_doc: &ast::operation::Document,
    ) -> Result<Self> {
        self.load_ast_impl(file_path, None, ast_doc)
    }

    fn load_ast_impl(
        mut self,
        file_path: Option<&Path>,
        source: Option<&loc::SourceLines<'_>>,
        ast_doc: &ast::operation::Document,
    ) -> Result<Self> {
        let mut errors = vec![];
        for def in &ast_doc.definitions {
            use ast::operation::Definition as Def;
            match def {
                Def::Fragment(frag_def) =>
                    self.visit_fragment_def(file_path, source, frag_def, &mut errors),

                // NOTE: Multiple anonymous operations in one document are not
                //       rejected here. Selecting one of them by name is
                //       impossible, so `ExecutableDocument::operation(None)`
                //       simply finds no operation.
                Def::Operation(op_def) =>
                    self.visit_operation_def(file_path, source, op_def, &mut errors),
            }
        }

        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }

    pub fn load_str(
        self,
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let content = content.as_ref();
        let ast_doc = ast::operation::parse(content).map_err(|err| vec![
            ExecutableDocumentBuildError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            },
        ])?;
        self.load_ast_impl(file_path, Some(&loc::SourceLines::new(content)), &ast_doc)
    }

    pub fn new() -> Self {
        Self {
            fragments: IndexMap::new(),
            operations: vec![],
        }
    }

    fn visit_fragment_def(
        &mut self,
        file_path: Option<&Path>,
        source: Option<&loc::SourceLines<'_>>,
        frag_def: &ast::operation::FragmentDefinition,
        errors: &mut Vec<ExecutableDocumentBuildError>,
    ) {
        let frag_srcloc = loc::SourceLocation::from_ast_position(
            file_path,
            &frag_def.position,
        );

        if let Some(existing) = self.fragments.get(frag_def.name.as_str()) {
            errors.push(ExecutableDocumentBuildError::DuplicateFragmentDefinition {
                fragment_name: frag_def.name.to_string(),
                location1: existing.def_location().to_owned(),
                location2: frag_srcloc,
            });
            return;
        }

        let ast::operation::TypeCondition::On(type_name) = &frag_def.type_condition;
        let fragment = Fragment {
            directives: DirectiveAnnotation::from_ast(
                &frag_srcloc,
                &frag_def.directives,
            ),
            name: frag_def.name.to_string(),
            selection_set: SelectionSet::from_ast(
                file_path,
                source,
                &frag_def.selection_set,
                errors,
            ),
            type_condition: GraphQLType::named_ref(
                type_name.as_str(),
                frag_srcloc.to_owned(),
            ),
            def_location: frag_srcloc,
        };
        self.fragments.insert(frag_def.name.to_string(), fragment);
    }

    fn visit_operation_def(
        &mut self,
        file_path: Option<&Path>,
        source: Option<&loc::SourceLines<'_>>,
        op_def: &ast::operation::OperationDefinition,
        errors: &mut Vec<ExecutableDocumentBuildError>,
    ) {
        use ast::operation::OperationDefinition as OpDef;
        let (kind, position, name, var_defs, ast_directives, ast_sel_set) = match op_def {
            OpDef::SelectionSet(sel_set) => (
                GraphQLOperationType::Query,
                &sel_set.span.0,
                None,
                &[][..],
                &[][..],
                sel_set,
            ),
            OpDef::Query(query) => (
                GraphQLOperationType::Query,
                &query.position,
                query.name.as_ref(),
                query.variable_definitions.as_slice(),
                query.directives.as_slice(),
                &query.selection_set,
            ),
            OpDef::Mutation(mutation) => (
                GraphQLOperationType::Mutation,
                &mutation.position,
                mutation.name.as_ref(),
                mutation.variable_definitions.as_slice(),
                mutation.directives.as_slice(),
                &mutation.selection_set,
            ),
            OpDef::Subscription(subscription) => (
                GraphQLOperationType::Subscription,
                &subscription.position,
                subscription.name.as_ref(),
                subscription.variable_definitions.as_slice(),
                subscription.directives.as_slice(),
                &subscription.selection_set,
            ),
        };

        let op_srcloc = loc::SourceLocation::from_ast_position(file_path, position);

        if let Some(op_name) = name {
            let existing = self.operations.iter().find(
                |op| op.name() == Some(op_name.as_str()),
            );
            if let Some(existing) = existing {
                errors.push(ExecutableDocumentBuildError::DuplicateOperationDefinition {
                    operation_name: op_name.to_string(),
                    location1: existing.def_location().to_owned(),
                    location2: op_srcloc,
                });
                return;
            }
        }

        let mut variables: IndexMap<String, Variable> = IndexMap::new();
        for var_def in var_defs {
            let var_srcloc = op_srcloc.with_ast_position(&var_def.position);
            if let Some(existing) = variables.get(var_def.name.as_str()) {
                errors.push(ExecutableDocumentBuildError::DuplicateVariableDefinition {
                    variable_name: var_def.name.to_string(),
                    location1: existing.def_location().to_owned(),
                    location2: var_srcloc,
                });
                continue;
            }
            variables.insert(var_def.name.to_string(), Variable {
                default_value: var_def.default_value.as_ref().map(
                    |ast_value| Value::from_ast(ast_value, &var_srcloc),
                ),
                name: var_def.name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(
                    &var_srcloc,
                    &var_def.var_type,
                ),
                def_location: var_srcloc,
            });
        }

        let operation = Operation {
            directives: DirectiveAnnotation::from_ast(&op_srcloc, ast_directives),
            kind,
            name: name.cloned(),
            selection_set: SelectionSet::from_ast(file_path, source, ast_sel_set, errors),
            variables,
            def_location: op_srcloc,
        };
        self.operations.push(operation);
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecutableDocumentBuildError {
    #[error(
        "Argument `{argument_name}` was passed more than once to the \
        `{field_name}` field"
    )]
    DuplicateArgument {
        argument_name: String,
        field_name: String,
        location: loc::SourceLocation,
    },

    #[error("Multiple fragments named `{fragment_name}` were defined")]
    DuplicateFragmentDefinition {
        fragment_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("Multiple operations named `{operation_name}` were defined")]
    DuplicateOperationDefinition {
        operation_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("Variable `${variable_name}` was declared more than once")]
    DuplicateVariableDefinition {
        variable_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("Error parsing executable document: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },
}
