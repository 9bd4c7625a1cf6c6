use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for finding a record by its ID
///
/// # Type Parameters
/// * `T` - The record type that must implement Identifiable trait
pub trait FindById<T: Identifiable>: Send + Sync {
    /// Find a record by its unique identifier
    ///
    /// # Returns
    /// * `Some(T)` - The found record
    /// * `None` - If the record does not exist
    fn find_by_id(&self, id: Uuid) -> Option<T>;
}
