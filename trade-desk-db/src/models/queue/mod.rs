pub mod queue_item;
pub mod queue_status;
pub mod request_query;
pub mod status_mapper;
pub mod status_update;

pub use queue_item::*;
pub use queue_status::*;
pub use request_query::*;
pub use status_mapper::*;
pub use status_update::*;
