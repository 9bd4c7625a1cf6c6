use serde::{Deserialize, Serialize};

use super::transaction_status::TransactionStatus;

/// Column a transaction listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionSortField {
    Amount,
    #[default]
    CreatedAt,
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Search, filter and ordering for a product page's transaction list.
///
/// `search` matches reference number, description and customer name,
/// ignoring case. The default lists everything newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub search: Option<String>,
    pub status: Option<TransactionStatus>,
    #[serde(default)]
    pub sort_by: TransactionSortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl TransactionQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn sorted_by(mut self, sort_by: TransactionSortField, direction: SortDirection) -> Self {
        self.sort_by = sort_by;
        self.direction = direction;
        self
    }

    /// Trimmed search term, `None` when blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// Counters shown on top of a product page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub total: usize,
    pub pending: usize,
    pub under_review: usize,
    pub completed: usize,
}
