use trade_desk_db::models::transaction::TransactionModel;
use trade_desk_db::repository::find_by_id::FindById;
use uuid::Uuid;

use super::repo_impl::TransactionRepositoryImpl;

impl FindById<TransactionModel> for TransactionRepositoryImpl {
    fn find_by_id(&self, id: Uuid) -> Option<TransactionModel> {
        self.transactions.read().iter().find(|tx| tx.id == id).cloned()
    }
}
