use uuid::Uuid;

/// Generic repository trait for removing a record
///
/// Removing an id the store does not hold is a no-op, not an error.
pub trait Delete: Send + Sync {
    /// Remove the record with the given id
    ///
    /// # Returns
    /// * `true` - If a record was removed
    /// * `false` - If no record had this id
    fn delete(&self, id: Uuid) -> bool;
}
