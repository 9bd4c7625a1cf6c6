use uuid::Uuid;

/// Trait for records that can be uniquely identified by a UUID
pub trait Identifiable {
    /// Returns the unique identifier of the record
    fn get_id(&self) -> Uuid;
}

/// Trait for records that point back at the transaction they were raised for
pub trait EntityLinked: Identifiable {
    /// Returns the identifier of the originating transaction
    fn get_entity_id(&self) -> &str;
}
