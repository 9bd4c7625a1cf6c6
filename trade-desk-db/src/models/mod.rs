pub mod identifiable;
pub mod queue;
pub mod transaction;

// Re-exports
pub use identifiable::*;
pub use queue::*;
pub use transaction::*;
