use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_DIRECTIVES: [Directive; 5] = [
    Directive::Defer,
    Directive::Deprecated,
    Directive::Include,
    Directive::Skip,
    Directive::SpecifiedBy,
];

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLOperationType {
    Query,
    Mutation,
    Subscription,
}
impl std::fmt::Display for GraphQLOperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        })
    }
}

/// The name of a root operation type paired with where it was declared as a
/// root operation type.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}

/// Utility for building a [`Schema`] from one or more SDL documents.
///
/// Only the parts of the type system needed to resolve and match fragment
/// type conditions (and to describe field types) are modelled. Schema
/// validation (e.g. checking that an object type actually satisfies the
/// interfaces it claims to implement) is out of scope.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: HashMap<String, Directive>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types: HashMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(self) -> Result<Schema> {
        let query_type = match self.query_type {
            Some(def) => Self::resolve_root_type(
                &self.types,
                GraphQLOperationType::Query,
                def,
            )?,
            None => match self.types.get("Query") {
                Some(GraphQLType::Object(obj_type)) => NamedGraphQLTypeRef::new(
                    obj_type.name(),
                    obj_type.def_location().to_owned(),
                ),
                _ => return Err(SchemaBuildError::NoQueryOperationTypeDefined),
            },
        };

        let mutation_type = Self::resolve_optional_root_type(
            &self.types,
            GraphQLOperationType::Mutation,
            self.mutation_type,
        )?;

        let subscription_type = Self::resolve_optional_root_type(
            &self.types,
            GraphQLOperationType::Subscription,
            self.subscription_type,
        )?;

        Ok(Schema {
            directive_defs: self.directive_defs,
            query_type,
            mutation_type,
            subscription_type,
            types: self.types,
        })
    }

    /// Shorthand for [`SchemaBuilder::new()`] followed by
    /// [`SchemaBuilder::load_str()`].
    pub fn from_str(
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    /// Parse `content` as an SDL document and add all of its definitions to
    /// this builder.
    ///
    /// `file_path` is only used to annotate the
    /// [`SourceLocation`](loc::SourceLocation)s of the loaded definitions.
    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: impl AsRef<str>,
    ) -> Result<Self> {
        let ast_doc = ast::schema::parse(content.as_ref())
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path, def)?;
        }

        Ok(self)
    }

    pub fn new() -> Self {
        let types = HashMap::from([
            ("Boolean".to_string(), GraphQLType::Bool),
            ("Float".to_string(), GraphQLType::Float),
            ("ID".to_string(), GraphQLType::ID),
            ("Int".to_string(), GraphQLType::Int),
            ("String".to_string(), GraphQLType::String),
        ]);

        let directive_defs = BUILTIN_DIRECTIVES.into_iter()
            .map(|directive| (directive.name().to_string(), directive))
            .collect();

        Self {
            directive_defs,
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            types,
        }
    }

    fn add_type(&mut self, graphql_type: GraphQLType) -> Result<()> {
        if let Some(existing) = self.types.get(graphql_type.name()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: graphql_type.name().to_string(),
                location1: existing.def_location().to_owned(),
                location2: graphql_type.def_location().to_owned(),
            });
        }
        self.types.insert(graphql_type.name().to_string(), graphql_type);
        Ok(())
    }

    fn resolve_optional_root_type(
        types: &HashMap<String, GraphQLType>,
        operation: GraphQLOperationType,
        explicit_def: Option<NamedTypeDefLocation>,
    ) -> Result<Option<NamedGraphQLTypeRef>> {
        if let Some(def) = explicit_def {
            return Self::resolve_root_type(types, operation, def).map(Some);
        }

        let default_name = match operation {
            GraphQLOperationType::Query => "Query",
            GraphQLOperationType::Mutation => "Mutation",
            GraphQLOperationType::Subscription => "Subscription",
        };
        Ok(match types.get(default_name) {
            Some(GraphQLType::Object(obj_type)) => Some(NamedGraphQLTypeRef::new(
                obj_type.name(),
                obj_type.def_location().to_owned(),
            )),
            _ => None,
        })
    }

    fn resolve_root_type(
        types: &HashMap<String, GraphQLType>,
        operation: GraphQLOperationType,
        def: NamedTypeDefLocation,
    ) -> Result<NamedGraphQLTypeRef> {
        match types.get(def.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(NamedGraphQLTypeRef::new(
                def.type_name,
                def.def_location,
            )),
            _ => Err(SchemaBuildError::InvalidRootOperationType {
                operation,
                type_name: def.type_name,
                location: def.def_location,
            }),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) =>
                Err(Self::unsupported_type_extension(file_path, type_ext)),
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_ast_position(
            file_path,
            &def.position,
        );

        if let Some(existing) = self.directive_defs.get(def.name.as_str()) {
            return Err(if existing.is_builtin() {
                SchemaBuildError::RedefinitionOfBuiltinDirective {
                    directive_name: def.name,
                    location: def_location,
                }
            } else {
                SchemaBuildError::DuplicateDirectiveDefinition {
                    directive_name: def.name,
                    location1: existing.def_location().to_owned(),
                    location2: def_location,
                }
            });
        }

        let params = def.arguments.iter()
            .map(|input_value| (
                input_value.name.clone(),
                Parameter::from_ast(file_path, input_value),
            ))
            .collect();

        self.directive_defs.insert(def.name.clone(), Directive::Custom {
            def_location,
            name: def.name,
            params,
            repeatable: def.repeatable,
        });

        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_ast_position(
            file_path,
            &schema_def.position,
        );

        let root_defs = [
            (GraphQLOperationType::Query, schema_def.query),
            (GraphQLOperationType::Mutation, schema_def.mutation),
            (GraphQLOperationType::Subscription, schema_def.subscription),
        ];
        for (operation, type_name) in root_defs {
            let Some(type_name) = type_name else {
                continue
            };
            let new_def = NamedTypeDefLocation {
                def_location: def_location.to_owned(),
                type_name,
            };
            let slot = match operation {
                GraphQLOperationType::Query => &mut self.query_type,
                GraphQLOperationType::Mutation => &mut self.mutation_type,
                GraphQLOperationType::Subscription => &mut self.subscription_type,
            };
            if let Some(existing) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing.to_owned(),
                    location2: new_def,
                });
            }
            *slot = Some(new_def);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let graphql_type = match type_def {
            TypeDefinition::Enum(enum_def) => GraphQLType::Enum(EnumType {
                def_location: loc::SourceLocation::from_ast_position(
                    file_path,
                    &enum_def.position,
                ),
                name: enum_def.name,
                values: enum_def.values.into_iter()
                    .map(|value| value.name)
                    .collect(),
            }),

            TypeDefinition::InputObject(input_def) => GraphQLType::InputObject(InputObjectType {
                def_location: loc::SourceLocation::from_ast_position(
                    file_path,
                    &input_def.position,
                ),
                fields: input_def.fields.iter()
                    .map(|input_value| (
                        input_value.name.clone(),
                        Parameter::from_ast(file_path, input_value),
                    ))
                    .collect(),
                name: input_def.name,
            }),

            TypeDefinition::Interface(iface_def) => GraphQLType::Interface(InterfaceType(
                object_or_interface_data(
                    file_path,
                    &iface_def.position,
                    iface_def.name,
                    &iface_def.fields,
                    iface_def.implements_interfaces,
                ),
            )),

            TypeDefinition::Object(obj_def) => GraphQLType::Object(ObjectType(
                object_or_interface_data(
                    file_path,
                    &obj_def.position,
                    obj_def.name,
                    &obj_def.fields,
                    obj_def.implements_interfaces,
                ),
            )),

            TypeDefinition::Scalar(scalar_def) => GraphQLType::Scalar(ScalarType {
                def_location: loc::SourceLocation::from_ast_position(
                    file_path,
                    &scalar_def.position,
                ),
                name: scalar_def.name,
            }),

            TypeDefinition::Union(union_def) => {
                let def_location = loc::SourceLocation::from_ast_position(
                    file_path,
                    &union_def.position,
                );
                GraphQLType::Union(UnionType {
                    members: union_def.types.into_iter()
                        .map(|member_name| {
                            let member_ref = NamedGraphQLTypeRef::new(
                                member_name.as_str(),
                                def_location.to_owned(),
                            );
                            (member_name, member_ref)
                        })
                        .collect(),
                    def_location,
                    name: union_def.name,
                })
            },
        };

        self.add_type(graphql_type)
    }

    fn unsupported_type_extension(
        file_path: Option<&Path>,
        type_ext: ast::schema::TypeExtension,
    ) -> SchemaBuildError {
        use ast::schema::TypeExtension;
        let (type_name, position) = match type_ext {
            TypeExtension::Enum(ext) => (ext.name, ext.position),
            TypeExtension::InputObject(ext) => (ext.name, ext.position),
            TypeExtension::Interface(ext) => (ext.name, ext.position),
            TypeExtension::Object(ext) => (ext.name, ext.position),
            TypeExtension::Scalar(ext) => (ext.name, ext.position),
            TypeExtension::Union(ext) => (ext.name, ext.position),
        };
        SchemaBuildError::UnsupportedTypeExtension {
            type_name,
            location: loc::SourceLocation::from_ast_position(file_path, &position),
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn object_or_interface_data(
    file_path: Option<&Path>,
    position: &ast::AstPos,
    name: String,
    ast_fields: &[ast::schema::Field],
    implements_interfaces: Vec<String>,
) -> ObjectOrInterfaceTypeData {
    let def_location = loc::SourceLocation::from_ast_position(file_path, position);

    let fields: IndexMap<String, Field> = ast_fields.iter()
        .map(|ast_field| {
            let field_location = def_location.with_ast_position(&ast_field.position);
            let field = Field {
                name: ast_field.name.clone(),
                parameters: ast_field.arguments.iter()
                    .map(|input_value| (
                        input_value.name.clone(),
                        Parameter::from_ast(file_path, input_value),
                    ))
                    .collect(),
                type_annotation: TypeAnnotation::from_ast_type(
                    &field_location,
                    &ast_field.field_type,
                ),
                def_location: field_location,
            };
            (ast_field.name.clone(), field)
        })
        .collect();

    let interfaces = implements_interfaces.iter()
        .map(|iface_name| NamedGraphQLTypeRef::new(iface_name, def_location.to_owned()))
        .collect();

    ObjectOrInterfaceTypeData {
        def_location,
        fields,
        interfaces,
        name,
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple definitions of the `{directive_name}` directive")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("Multiple `{operation}` root operation types defined")]
    DuplicateOperationDefinition {
        operation: GraphQLOperationType,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple definitions of the `{type_name}` type")]
    DuplicateTypeDefinition {
        type_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error(
        "The `{operation}` root operation type `{type_name}` is not an object \
        type defined in the schema"
    )]
    InvalidRootOperationType {
        operation: GraphQLOperationType,
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error("No `query` root operation type is defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema document: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("The built-in `@{directive_name}` directive cannot be redefined")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Type extensions are not supported (found an extension of `{type_name}`)")]
    UnsupportedTypeExtension {
        type_name: String,
        location: loc::SourceLocation,
    },
}
