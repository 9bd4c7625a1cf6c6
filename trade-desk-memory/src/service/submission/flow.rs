use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use trade_desk_api::{ApiError, ApiResult, CurrentUserProvider, CustomerLookup, ProductCode, SubmissionForm};
use trade_desk_db::models::queue::NewQueueItem;
use trade_desk_db::models::transaction::NewTransaction;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use super::effective_amount::{effective_amount, effective_currency};
use super::reference::{generate_reference, ReferenceNumber};
use crate::config::TradeDeskConfig;
use crate::repository::transaction::TransactionLedger;
use crate::service::checker_queue::CheckerQueue;

/// What the maker is shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub reference_number: String,
    pub entity_id: String,
    pub queue_item_id: Uuid,
}

/// Turns a filled product form into a pending transaction plus the queue item
/// a checker will act on, linked by the transaction's entity id.
pub struct SubmissionFlow {
    queue: Arc<CheckerQueue>,
    customers: Arc<dyn CustomerLookup>,
    users: Arc<dyn CurrentUserProvider>,
    config: TradeDeskConfig,
}

impl SubmissionFlow {
    pub fn new(
        queue: Arc<CheckerQueue>,
        customers: Arc<dyn CustomerLookup>,
        users: Arc<dyn CurrentUserProvider>,
        config: TradeDeskConfig,
    ) -> Self {
        Self {
            queue,
            customers,
            users,
            config,
        }
    }

    pub fn submit(&self, ledger: &TransactionLedger, form: SubmissionForm) -> ApiResult<SubmissionReceipt> {
        self.submit_with(ledger, form, Utc::now(), &mut rand::thread_rng())
    }

    /// Same as [`SubmissionFlow::submit`] with the clock and random source supplied.
    pub fn submit_with<R: Rng + ?Sized>(
        &self,
        ledger: &TransactionLedger,
        form: SubmissionForm,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> ApiResult<SubmissionReceipt> {
        form.validate()?;

        let product = form.product.unwrap_or(ProductCode::FormM);
        let reference_number = self.unique_reference(ledger, now, rng)?;
        let amount = effective_amount(&form, product);
        let currency = effective_currency(&form, &self.config.default_currency);

        let transaction = NewTransaction {
            reference_number: reference_number.to_string(),
            product,
            customer_id: form.customer_id.clone(),
            amount: amount.clone(),
            currency: currency.clone(),
            description: form.description.trim().to_string(),
            priority: form.priority,
            metadata: form.fields.clone(),
        }
        .into_model(Uuid::new_v4(), now);
        let entity_id = transaction.entity_id();
        ledger.insert(transaction.clone());

        let maker = self.users.current_user_or_fallback();
        let queue_item = self.queue.submit(NewQueueItem {
            entity_id: entity_id.clone(),
            entity_type: product,
            reference_number: transaction.reference_number.clone(),
            amount,
            currency,
            customer_name: self.customers.customer_name(&form.customer_id),
            description: transaction.description.clone(),
            priority: transaction.priority,
            maker_id: maker.id.clone(),
            maker_name: maker.display_name(),
            maker_department: maker.department.clone(),
            maker_comments: form
                .maker_comments
                .as_deref()
                .map(str::trim)
                .filter(|comments| !comments.is_empty())
                .map(str::to_string),
            metadata: transaction.metadata.clone(),
        });

        info!(
            reference_number = %transaction.reference_number,
            entity_id = %entity_id,
            product = %product,
            amount = %transaction.amount,
            maker_id = %maker.id,
            "transaction submitted for approval"
        );

        Ok(SubmissionReceipt {
            reference_number: transaction.reference_number,
            entity_id,
            queue_item_id: queue_item.id,
        })
    }

    fn unique_reference<R: Rng + ?Sized>(
        &self,
        ledger: &TransactionLedger,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> ApiResult<ReferenceNumber> {
        let attempts = self.config.max_reference_attempts.max(1);
        for attempt in 1..=attempts {
            let reference = generate_reference(&self.config.reference_prefix, now, rng)?;
            if !ledger.contains_reference(&reference) {
                return Ok(reference);
            }
            warn!(reference_number = %reference, attempt, "reference number collision");
        }
        Err(ApiError::ReferenceCollision(format!(
            "no unused reference number after {attempts} attempts"
        )))
    }
}
