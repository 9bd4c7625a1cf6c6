use trade_desk_db::models::transaction::TransactionModel;
use trade_desk_db::repository::load_all::LoadAll;

use super::repo_impl::TransactionRepositoryImpl;

impl LoadAll<TransactionModel> for TransactionRepositoryImpl {
    fn load_all(&self) -> Vec<TransactionModel> {
        self.transactions.read().clone()
    }
}
