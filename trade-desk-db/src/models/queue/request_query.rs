use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trade_desk_api::ProductCode;

use super::queue_item::QueueItemModel;
use super::queue_status::QueueStatus;
use crate::utils::contains_ignore_case;

/// Product tab on the My Requests page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "tab", content = "product")]
pub enum RequestTab {
    #[default]
    All,
    Product(ProductCode),
    /// Inward and outward payment products together.
    Payments,
}

impl RequestTab {
    pub fn includes(&self, product: ProductCode) -> bool {
        match self {
            RequestTab::All => true,
            RequestTab::Product(code) => *code == product,
            RequestTab::Payments => product.is_payment(),
        }
    }
}

/// Filters for a maker's own submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestQuery {
    pub search: Option<String>,
    pub status: Option<QueueStatus>,
    #[serde(default)]
    pub tab: RequestTab,
}

impl RequestQuery {
    pub fn matches(&self, item: &QueueItemModel) -> bool {
        if !self.tab.includes(item.entity_type) {
            return false;
        }
        if self.status.is_some_and(|status| status != item.status) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                contains_ignore_case(&item.reference_number, term)
                    || contains_ignore_case(&item.customer_name, term)
                    || contains_ignore_case(&item.description, term)
            }
            _ => true,
        }
    }
}

/// Per-status and per-product totals for one maker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub sent_back: usize,
    pub by_product: BTreeMap<ProductCode, usize>,
}

impl RequestStats {
    pub fn tally<'a>(items: impl IntoIterator<Item = &'a QueueItemModel>) -> Self {
        let mut stats = Self::default();
        for item in items {
            stats.total += 1;
            match item.status {
                QueueStatus::Pending => stats.pending += 1,
                QueueStatus::Approved => stats.approved += 1,
                QueueStatus::Rejected => stats.rejected += 1,
                QueueStatus::SentBack => stats.sent_back += 1,
            }
            *stats.by_product.entry(item.entity_type).or_default() += 1;
        }
        stats
    }
}
