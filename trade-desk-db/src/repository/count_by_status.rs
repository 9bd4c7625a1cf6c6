/// Generic repository trait for counting records in a given status
///
/// # Type Parameters
/// * `S` - The status type of the record
pub trait CountByStatus<S>: Send + Sync {
    /// Number of records whose status equals `status`
    fn count_by_status(&self, status: S) -> usize;
}
