mod api;
mod health;
mod index;
mod records;

pub use api::api_handler;
pub use health::health_handler;
pub use index::{index_handler, INDEX_BODY};
pub use records::{create_record_handler, stats_handler};
