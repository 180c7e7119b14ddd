use crate::ports::CatalogError;
use lakeview_domain::SearchResults;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(SearchResults),
    Failed(CatalogError),
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub input: String,
    /// Replaces the table listing while present
    pub outcome: Option<SearchOutcome>,
}

impl SearchState {
    pub fn is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// Results for `query` are only wanted while the box still holds exactly that text.
    pub fn is_current(&self, query: &str) -> bool {
        !self.is_blank() && self.input == query
    }

    pub fn results(&self) -> Option<&SearchResults> {
        match &self.outcome {
            Some(SearchOutcome::Found(results)) => Some(results),
            _ => None,
        }
    }
}
