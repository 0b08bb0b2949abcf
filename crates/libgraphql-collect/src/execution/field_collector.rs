use crate::execution::defer_info;
use crate::execution::does_fragment_type_apply;
use crate::execution::should_include;
use crate::execution::CollectionResult;
use crate::execution::DeferInfo;
use crate::execution::GroupedFields;
use crate::execution::Patch;
use crate::operation::FieldSelection;
use crate::operation::FragmentRegistry;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::schema::Schema;
use crate::types::ObjectType;
use crate::VariableValues;
use std::collections::HashSet;

/// Names of the fragments already expanded during one collection.
pub type VisitedFragmentNames<'doc> = HashSet<&'doc str>;

/// Collects the fields of selection sets for one concrete runtime object
/// type.
///
/// A [`FieldCollector`] only borrows its inputs and holds no state between
/// calls, so one collector (or many) can be used from any number of threads
/// at once.
///
/// The document is assumed to have been validated. If it hasn't, spreads of
/// undefined fragments are skipped and type conditions naming unknown types
/// never match. Neither is reported as an error (see
/// [`crate::validation`]).
///
/// Fragment cycles are not tolerated, however. A deferred spread is expanded
/// even when its fragment was already visited, so a cycle through a deferred
/// spread (e.g. `fragment A on Dog { ...A @defer }`) recurses until the stack
/// overflows. Run [`crate::validation::no_fragment_cycles`] on untrusted
/// documents first.
#[derive(Clone, Copy, Debug)]
pub struct FieldCollector<'a> {
    fragments: &'a FragmentRegistry,
    runtime_type: &'a ObjectType,
    schema: &'a Schema,
    variables: &'a VariableValues,
}
impl<'a> FieldCollector<'a> {
    /// Collect the fields of `selection_set` into fresh accumulators.
    pub fn collect(&self, selection_set: &'a SelectionSet) -> CollectionResult<'a> {
        let mut fields = GroupedFields::new();
        let mut patches = vec![];
        let mut visited = VisitedFragmentNames::new();
        self.collect_into(selection_set, &mut fields, &mut patches, &mut visited);
        CollectionResult {
            fields,
            patches,
        }
    }

    /// Collect the fields of `selection_set` into caller-supplied
    /// accumulators.
    ///
    /// Non-deferred fields are appended to `fields`. Each deferred fragment
    /// collects into a fresh [`GroupedFields`] and appends its [`Patch`] to
    /// `patches` once fully collected. Fragments named in `visited` are not
    /// expanded again unless the spread is deferred.
    ///
    /// Accumulators must not be shared between independent collections.
    pub fn collect_into(
        &self,
        selection_set: &'a SelectionSet,
        fields: &mut GroupedFields<'a>,
        patches: &mut Vec<Patch<'a>>,
        visited: &mut VisitedFragmentNames<'a>,
    ) {
        for selection in selection_set.selections() {
            match selection {
                Selection::Field(field) => {
                    if !should_include(self.variables, field) {
                        log::trace!(
                            "Skipping excluded field `{}` at {}",
                            field.response_key(),
                            field.def_location(),
                        );
                        continue;
                    }
                    fields.push(field);
                },

                Selection::InlineFragment(inline_frag) => {
                    if !should_include(self.variables, inline_frag) {
                        log::trace!(
                            "Skipping excluded inline fragment at {}",
                            inline_frag.def_location(),
                        );
                        continue;
                    }
                    if !does_fragment_type_apply(self.schema, inline_frag, self.runtime_type) {
                        continue;
                    }

                    self.collect_fragment(
                        inline_frag.selection_set(),
                        defer_info(self.variables, inline_frag),
                        fields,
                        patches,
                        visited,
                    );
                },

                Selection::FragmentSpread(spread) => {
                    if !should_include(self.variables, spread) {
                        log::trace!(
                            "Skipping excluded spread of `{}` at {}",
                            spread.fragment_name(),
                            spread.def_location(),
                        );
                        continue;
                    }

                    let defer = defer_info(self.variables, spread);
                    if defer.is_none() && visited.contains(spread.fragment_name()) {
                        log::trace!(
                            "Skipping already-visited fragment `{}` at {}",
                            spread.fragment_name(),
                            spread.def_location(),
                        );
                        continue;
                    }

                    let fragment = match spread.fragment(self.fragments) {
                        Ok(fragment) => fragment,
                        Err(err) => {
                            log::debug!(
                                "Skipping spread of undefined fragment `{}` at {}: {err}",
                                spread.fragment_name(),
                                spread.def_location(),
                            );
                            continue;
                        },
                    };
                    if !does_fragment_type_apply(self.schema, fragment, self.runtime_type) {
                        continue;
                    }

                    visited.insert(fragment.name());
                    self.collect_fragment(
                        fragment.selection_set(),
                        defer,
                        fields,
                        patches,
                        visited,
                    );
                },
            }
        }
    }

    pub fn new(
        schema: &'a Schema,
        fragments: &'a FragmentRegistry,
        variables: &'a VariableValues,
        runtime_type: &'a ObjectType,
    ) -> Self {
        Self {
            fragments,
            runtime_type,
            schema,
            variables,
        }
    }

    pub fn runtime_type(&self) -> &'a ObjectType {
        self.runtime_type
    }

    fn collect_fragment(
        &self,
        selection_set: &'a SelectionSet,
        defer: Option<DeferInfo>,
        fields: &mut GroupedFields<'a>,
        patches: &mut Vec<Patch<'a>>,
        visited: &mut VisitedFragmentNames<'a>,
    ) {
        match defer {
            None => self.collect_into(selection_set, fields, patches, visited),

            Some(DeferInfo { label }) => {
                let mut deferred_fields = GroupedFields::new();
                self.collect_into(selection_set, &mut deferred_fields, patches, visited);
                log::trace!(
                    "Collected deferred patch (label: {label:?}) with {} response key(s)",
                    deferred_fields.len(),
                );
                patches.push(Patch {
                    fields: deferred_fields,
                    label,
                });
            },
        }
    }
}

/// Shorthand for [`FieldCollector::new()`] followed by
/// [`FieldCollector::collect()`].
pub fn collect_fields<'a>(
    schema: &'a Schema,
    fragments: &'a FragmentRegistry,
    variables: &'a VariableValues,
    runtime_type: &'a ObjectType,
    selection_set: &'a SelectionSet,
) -> CollectionResult<'a> {
    FieldCollector::new(schema, fragments, variables, runtime_type)
        .collect(selection_set)
}

/// Collect the merged sub-selections of `field_nodes` (typically every field
/// grouped under one response key) for objects of `runtime_type`.
///
/// All sub-selections are collected, in order, into one set of fresh
/// accumulators. Leaf fields contribute nothing.
pub fn collect_subfields<'a>(
    schema: &'a Schema,
    fragments: &'a FragmentRegistry,
    variables: &'a VariableValues,
    runtime_type: &'a ObjectType,
    field_nodes: &[&'a FieldSelection],
) -> CollectionResult<'a> {
    let collector = FieldCollector::new(schema, fragments, variables, runtime_type);
    let mut fields = GroupedFields::new();
    let mut patches = vec![];
    let mut visited = VisitedFragmentNames::new();
    for field_node in field_nodes.iter().copied() {
        if let Some(sub_selection_set) = field_node.selection_set() {
            collector.collect_into(sub_selection_set, &mut fields, &mut patches, &mut visited);
        }
    }
    CollectionResult {
        fields,
        patches,
    }
}
