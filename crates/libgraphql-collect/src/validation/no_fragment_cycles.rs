use crate::operation::ExecutableDocument;
use crate::operation::Fragment;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentSpread;
use crate::validation::FragmentValidationError;
use std::collections::HashMap;
use std::collections::HashSet;

/// No fragment may spread itself, directly or through other fragments.
///
/// Each cycle is reported once, from the first fragment (in definition
/// order) through which it is entered, regardless of how many fragments
/// participate in it.
pub fn no_fragment_cycles(doc: &ExecutableDocument) -> Vec<FragmentValidationError> {
    let mut detector = CycleDetector {
        errors: vec![],
        fragments: doc.fragment_registry(),
        spread_path: vec![],
        spread_path_index_by_name: HashMap::new(),
        visited: HashSet::new(),
    };

    for fragment in doc.fragment_registry().iter() {
        detector.visit_fragment(fragment);
    }

    detector.errors
}

struct CycleDetector<'doc> {
    errors: Vec<FragmentValidationError>,
    fragments: &'doc FragmentRegistry,

    /// The spreads followed (depth-first) to reach the fragment currently
    /// being visited.
    spread_path: Vec<&'doc FragmentSpread>,

    /// For each fragment on the current path, the index in `spread_path` of
    /// the first spread leading out of it.
    spread_path_index_by_name: HashMap<&'doc str, usize>,

    visited: HashSet<&'doc str>,
}
impl<'doc> CycleDetector<'doc> {
    fn visit_fragment(&mut self, fragment: &'doc Fragment) {
        // Any cycle through an already-visited fragment has been reported.
        if !self.visited.insert(fragment.name()) {
            return;
        }

        self.spread_path_index_by_name.insert(fragment.name(), self.spread_path.len());

        for spread in fragment.selection_set().fragment_spreads() {
            let cycle_index = self.spread_path_index_by_name
                .get(spread.fragment_name())
                .copied();

            self.spread_path.push(spread);
            match cycle_index {
                Some(cycle_index) => self.report_cycle(cycle_index),
                None => {
                    // Undefined fragments are reported by `known_fragment_names`.
                    if let Ok(spread_fragment) = spread.fragment(self.fragments) {
                        self.visit_fragment(spread_fragment);
                    }
                },
            }
            self.spread_path.pop();
        }

        self.spread_path_index_by_name.remove(fragment.name());
    }

    fn report_cycle(&mut self, cycle_index: usize) {
        let cycle_path = &self.spread_path[cycle_index..];
        let Some((closing_spread, via_spreads)) = cycle_path.split_last() else {
            return;
        };

        self.errors.push(FragmentValidationError::FragmentCycle {
            fragment_name: closing_spread.fragment_name().to_string(),
            locations: cycle_path.iter()
                .map(|spread| spread.def_location().to_owned())
                .collect(),
            via: via_spreads.iter()
                .map(|spread| spread.fragment_name().to_string())
                .collect(),
        });
    }
}
