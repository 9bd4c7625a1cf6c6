/// Generic repository trait for reading every record in presentation order
pub trait LoadAll<T>: Send + Sync {
    /// Returns a snapshot of all records, newest first
    fn load_all(&self) -> Vec<T>;
}
