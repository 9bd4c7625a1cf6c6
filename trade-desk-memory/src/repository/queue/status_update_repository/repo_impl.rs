use parking_lot::RwLock;
use trade_desk_db::models::queue::StatusUpdateModel;

/// In-memory status broadcast log.
///
/// Holds at most one `StatusUpdateModel` per entity, ordered by recording time
/// (oldest first).
#[derive(Default)]
pub struct StatusUpdateRepositoryImpl {
    pub(crate) updates: RwLock<Vec<StatusUpdateModel>>,
}

impl StatusUpdateRepositoryImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every entity's latest status, oldest record first.
    pub fn all_updates(&self) -> Vec<StatusUpdateModel> {
        self.updates.read().clone()
    }

    pub fn len(&self) -> usize {
        self.updates.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.read().is_empty()
    }
}
