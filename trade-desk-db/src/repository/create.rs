use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating a record from its input fields
///
/// The store assigns generated fields (id, timestamps, initial status) and
/// returns the stored record.
///
/// # Type Parameters
/// * `N` - The input shape supplied by the caller
/// * `T` - The stored record type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Create<NewQueueItem, QueueItemModel> for QueueItemRepositoryImpl {
///     fn create(&self, item: NewQueueItem) -> QueueItemModel {
///         // Implementation
///     }
/// }
/// ```
pub trait Create<N, T: Identifiable>: Send + Sync {
    /// Store a new record
    ///
    /// # Arguments
    /// * `item` - The caller-supplied fields
    ///
    /// # Returns
    /// * The stored record with generated fields populated
    fn create(&self, item: N) -> T;
}
