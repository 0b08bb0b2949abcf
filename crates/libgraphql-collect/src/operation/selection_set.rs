use crate::ast;
use crate::DerefByName;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::ExecutableDocumentBuildError;
use crate::operation::FieldSelection;
use crate::operation::Fragment;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use crate::operation::Selection;
use crate::types::GraphQLType;
use crate::Value;
use indexmap::IndexMap;
use std::path::Path;

/// An ordered list of [`Selection`]s: the braced block of fields and
/// fragments selected at one level of an operation or fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub(super) selections: Vec<Selection>,
}
impl SelectionSet {
    /// Every [`FragmentSpread`] reachable from this selection set without
    /// following the spreads themselves: spreads directly within it, within
    /// its inline fragments, and within its fields' sub-selections.
    pub fn fragment_spreads(&self) -> Vec<&FragmentSpread> {
        let mut spreads = vec![];
        self.collect_fragment_spreads(&mut spreads);
        spreads
    }

    /// `source` (when available) places spreads and inline fragments at
    /// their `...` rather than at the token after it.
    pub(super) fn from_ast(
        file_path: Option<&Path>,
        source: Option<&loc::SourceLines<'_>>,
        ast_sel_set: &ast::operation::SelectionSet,
        errors: &mut Vec<ExecutableDocumentBuildError>,
    ) -> SelectionSet {
        let selections = ast_sel_set.items.iter().map(|ast_selection| {
            match ast_selection {
                ast::operation::Selection::Field(ast_field) =>
                    Selection::Field(field_from_ast(file_path, source, ast_field, errors)),

                ast::operation::Selection::FragmentSpread(ast_spread) => {
                    let spread_srcloc =
                        ellipsis_srcloc(file_path, source, &ast_spread.position);
                    Selection::FragmentSpread(FragmentSpread {
                        directives: DirectiveAnnotation::from_ast(
                            &spread_srcloc,
                            &ast_spread.directives,
                        ),
                        fragment_ref: Fragment::named_ref(
                            ast_spread.fragment_name.as_str(),
                            spread_srcloc,
                        ),
                    })
                },

                ast::operation::Selection::InlineFragment(ast_inline_frag) => {
                    let inline_frag_srcloc =
                        ellipsis_srcloc(file_path, source, &ast_inline_frag.position);
                    Selection::InlineFragment(InlineFragment {
                        directives: DirectiveAnnotation::from_ast(
                            &inline_frag_srcloc,
                            &ast_inline_frag.directives,
                        ),
                        selection_set: SelectionSet::from_ast(
                            file_path,
                            source,
                            &ast_inline_frag.selection_set,
                            errors,
                        ),
                        type_condition: ast_inline_frag.type_condition.as_ref().map(
                            |ast::operation::TypeCondition::On(type_name)| {
                                GraphQLType::named_ref(
                                    type_name.as_str(),
                                    inline_frag_srcloc.to_owned(),
                                )
                            },
                        ),
                        def_location: inline_frag_srcloc,
                    })
                },
            }
        }).collect();

        SelectionSet {
            selections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    fn collect_fragment_spreads<'a>(&'a self, spreads: &mut Vec<&'a FragmentSpread>) {
        for selection in &self.selections {
            match selection {
                Selection::Field(field) => {
                    if let Some(sub_selection_set) = field.selection_set() {
                        sub_selection_set.collect_fragment_spreads(spreads);
                    }
                },
                Selection::FragmentSpread(spread) => spreads.push(spread),
                Selection::InlineFragment(inline_frag) =>
                    inline_frag.selection_set().collect_fragment_spreads(spreads),
            }
        }
    }
}

fn ellipsis_srcloc(
    file_path: Option<&Path>,
    source: Option<&loc::SourceLines<'_>>,
    pos: &ast::AstPos,
) -> loc::SourceLocation {
    let start = source.and_then(|source| source.ellipsis_before(pos));
    loc::SourceLocation::from_ast_position(file_path, start.as_ref().unwrap_or(pos))
}

fn field_from_ast(
    file_path: Option<&Path>,
    source: Option<&loc::SourceLines<'_>>,
    ast_field: &ast::operation::Field,
    errors: &mut Vec<ExecutableDocumentBuildError>,
) -> FieldSelection {
    let field_srcloc = loc::SourceLocation::from_ast_position(
        file_path,
        &ast_field.position,
    );

    let mut arguments = IndexMap::new();
    for (arg_name, ast_arg_value) in &ast_field.arguments {
        let value = Value::from_ast(ast_arg_value, &field_srcloc);
        if arguments.insert(arg_name.to_string(), value).is_some() {
            errors.push(ExecutableDocumentBuildError::DuplicateArgument {
                argument_name: arg_name.to_string(),
                field_name: ast_field.name.to_string(),
                location: field_srcloc.to_owned(),
            });
        }
    }

    // The parser represents leaf fields with an empty selection set.
    let selection_set =
        if ast_field.selection_set.items.is_empty() {
            None
        } else {
            Some(SelectionSet::from_ast(
                file_path,
                source,
                &ast_field.selection_set,
                errors,
            ))
        };

    FieldSelection {
        alias: ast_field.alias.clone(),
        arguments,
        directives: DirectiveAnnotation::from_ast(
            &field_srcloc,
            &ast_field.directives,
        ),
        def_location: field_srcloc,
        name: ast_field.name.clone(),
        selection_set,
    }
}
