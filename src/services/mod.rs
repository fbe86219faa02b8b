//! Service layer: cache, aggregation and viewer logic over the domain ports.

pub mod aggregator;
pub mod list_cache;
pub mod viewer;

pub use aggregator::Aggregator;
pub use list_cache::ListCache;
pub use viewer::{ProfileView, UsersView, ViewerService, FAILED_TO_LOAD, USER_NOT_FOUND};
