use chrono::Utc;
use trade_desk_db::models::transaction::{NewTransaction, TransactionModel};
use trade_desk_db::repository::create::Create;
use uuid::Uuid;

use super::repo_impl::TransactionRepositoryImpl;

impl Create<NewTransaction, TransactionModel> for TransactionRepositoryImpl {
    fn create(&self, item: NewTransaction) -> TransactionModel {
        let transaction = item.into_model(Uuid::new_v4(), Utc::now());
        self.insert(transaction.clone());
        transaction
    }
}
