use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for partially updating a record
///
/// Updating an id the store does not hold is a no-op, not an error.
///
/// # Type Parameters
/// * `P` - The patch type; absent fields leave the record untouched
/// * `T` - The stored record type that must implement Identifiable trait
pub trait Update<P, T: Identifiable>: Send + Sync {
    /// Merge `patch` onto the record with the given id
    ///
    /// # Returns
    /// * `Some(T)` - The record after the merge
    /// * `None` - If no record has this id
    fn update(&self, id: Uuid, patch: P) -> Option<T>;
}
