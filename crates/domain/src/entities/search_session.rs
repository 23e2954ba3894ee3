//! Search session entity - one open location picker
//!
//! A session exists while the user is choosing a pickup or drop-off
//! location. It records the query text, the ranked candidates of the most
//! recently completed search, and an optional explicit choice.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

/// Maximum number of candidates kept from a search
pub const MAX_CANDIDATES: usize = 5;

/// Which trip slot the open picker is selecting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTarget {
    /// Selecting the pickup location
    Pickup,
    /// Selecting the drop-off location
    DropOff,
}

impl SelectionTarget {
    /// Label used in status messages ("pickup" / "drop")
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::DropOff => "drop",
        }
    }
}

/// One geocoding search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Human-readable place name
    pub label: String,
    /// Resolved coordinates
    pub location: GeoLocation,
}

impl Candidate {
    /// Abbreviate the label for compact button captions
    ///
    /// Takes the first comma-separated part and truncates it to 20
    /// characters with an ellipsis.
    #[must_use]
    pub fn short_label(&self) -> String {
        let first = self.label.split(',').next().unwrap_or_default().trim();
        if first.chars().count() > 20 {
            let head: String = first.chars().take(17).collect();
            format!("{head}...")
        } else {
            first.to_string()
        }
    }
}

/// Result state of the current query
///
/// `Empty` (a completed search with zero hits) is distinct from
/// `NotSearched` (no search has run for the current query).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchResults {
    /// No search has completed for the current query
    #[default]
    NotSearched,
    /// A search completed and returned nothing
    Empty,
    /// Ranked candidates in provider order
    Ranked { candidates: Vec<Candidate> },
}

/// An open location picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSession {
    target: SelectionTarget,
    query: String,
    results: SearchResults,
    chosen: Option<usize>,
}

impl SearchSession {
    /// Open a fresh session for the given target
    #[must_use]
    pub const fn new(target: SelectionTarget) -> Self {
        Self {
            target,
            query: String::new(),
            results: SearchResults::NotSearched,
            chosen: None,
        }
    }

    /// The trip slot being selected
    #[must_use]
    pub const fn target(&self) -> SelectionTarget {
        self.target
    }

    /// The current query text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The result state of the current query
    #[must_use]
    pub const fn results(&self) -> &SearchResults {
        &self.results
    }

    /// Update the query text
    ///
    /// Any previous results and explicit choice belong to the old query
    /// and are cleared back to `NotSearched`.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.results = SearchResults::NotSearched;
        self.chosen = None;
    }

    /// True when the trimmed query is long enough to search
    #[must_use]
    pub fn query_searchable(&self, min_len: usize) -> bool {
        self.query.trim().chars().count() >= min_len
    }

    /// Check whether a completed search still belongs to this session
    ///
    /// A stale in-flight search must not overwrite results from a newer
    /// query.
    #[must_use]
    pub fn matches(&self, target: SelectionTarget, query: &str) -> bool {
        self.target == target && self.query == query
    }

    /// Commit the results of a completed search, capped at
    /// [`MAX_CANDIDATES`] in provider order
    pub fn record_results(&mut self, mut candidates: Vec<Candidate>) {
        candidates.truncate(MAX_CANDIDATES);
        self.chosen = None;
        self.results = if candidates.is_empty() {
            SearchResults::Empty
        } else {
            SearchResults::Ranked { candidates }
        };
    }

    /// Mark a candidate as explicitly chosen by the user
    ///
    /// # Errors
    ///
    /// Returns a validation error if the index is out of range or no
    /// candidates are available.
    pub fn choose(&mut self, index: usize) -> Result<&Candidate, DomainError> {
        match &self.results {
            SearchResults::Ranked { candidates } if index < candidates.len() => {
                self.chosen = Some(index);
                Ok(&candidates[index])
            },
            SearchResults::Ranked { candidates } => Err(DomainError::validation(format!(
                "candidate index {index} out of range (have {})",
                candidates.len()
            ))),
            _ => Err(DomainError::validation("no candidates to choose from")),
        }
    }

    /// The candidate a confirm would commit
    ///
    /// The explicitly chosen candidate, or the top-ranked one when nothing
    /// was chosen.
    #[must_use]
    pub fn confirmable(&self) -> Option<&Candidate> {
        match &self.results {
            SearchResults::Ranked { candidates } => {
                candidates.get(self.chosen.unwrap_or(0))
            },
            _ => None,
        }
    }
}
