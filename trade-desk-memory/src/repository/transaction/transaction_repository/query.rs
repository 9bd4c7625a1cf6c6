use std::cmp::Ordering;
use trade_desk_db::models::transaction::{SortDirection, TransactionModel, TransactionQuery, TransactionSortField};
use trade_desk_db::repository::pagination::{Page, PageRequest};
use trade_desk_db::utils::contains_ignore_case;

use super::repo_impl::TransactionRepositoryImpl;

impl TransactionRepositoryImpl {
    /// Searches, filters, sorts and pages the ledger.
    pub fn query(&self, query: &TransactionQuery, page: PageRequest) -> Page<TransactionModel> {
        let mut rows: Vec<TransactionModel> = self
            .transactions
            .read()
            .iter()
            .filter(|tx| query.status.map_or(true, |status| status == tx.status))
            .filter(|tx| match query.search_term() {
                Some(term) => self.matches_search(tx, term),
                None => true,
            })
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort_by);
            match query.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        Page::paginate(rows, page)
    }

    fn matches_search(&self, tx: &TransactionModel, term: &str) -> bool {
        contains_ignore_case(&tx.reference_number, term)
            || contains_ignore_case(&tx.description, term)
            || contains_ignore_case(&self.customers.customer_name(&tx.customer_id), term)
    }
}

fn compare(a: &TransactionModel, b: &TransactionModel, field: TransactionSortField) -> Ordering {
    match field {
        TransactionSortField::Amount => a.amount_value().cmp(&b.amount_value()),
        TransactionSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        TransactionSortField::Reference => a.reference_number.cmp(&b.reference_number),
    }
}
