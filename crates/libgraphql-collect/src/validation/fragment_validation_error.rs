use crate::loc;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentValidationError {
    /// A fragment spreads itself, either directly or through the other
    /// fragments it spreads (`via`, in spread order).
    ///
    /// `locations` holds the location of every spread along the cycle.
    #[error(
        "Cannot spread fragment \"{fragment_name}\" within itself{}.",
        format_via(.via),
    )]
    FragmentCycle {
        fragment_name: String,
        locations: Vec<loc::SourceLocation>,
        via: Vec<String>,
    },

    #[error("Unknown fragment \"{fragment_name}\".")]
    UndefinedFragment {
        fragment_name: String,
        reference_location: loc::SourceLocation,
    },

    #[error("Fragment \"{fragment_name}\" is never used.")]
    UnusedFragment {
        def_location: loc::SourceLocation,
        fragment_name: String,
    },
}
impl FragmentValidationError {
    pub fn locations(&self) -> &[loc::SourceLocation] {
        match self {
            Self::FragmentCycle { locations, .. } => locations.as_slice(),
            Self::UndefinedFragment { reference_location, .. } =>
                std::slice::from_ref(reference_location),
            Self::UnusedFragment { def_location, .. } =>
                std::slice::from_ref(def_location),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

fn format_via(via: &[String]) -> String {
    if via.is_empty() {
        return String::new();
    }
    let quoted: Vec<_> = via.iter()
        .map(|fragment_name| format!("\"{fragment_name}\""))
        .collect();
    format!(" via {}", quoted.join(", "))
}
