pub mod count_by_status;
pub mod create;
pub mod delete;
pub mod find_by_id;
pub mod load_all;
pub mod pagination;
pub mod status_broadcast;
pub mod update;

// Re-exports
pub use count_by_status::*;
pub use create::*;
pub use delete::*;
pub use find_by_id::*;
pub use load_all::*;
pub use pagination::*;
pub use status_broadcast::*;
pub use update::*;
