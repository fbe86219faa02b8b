//! Adapters for external systems: storage, clocks, HTTP in and out.

pub mod api_client;
pub mod clock;
pub mod directory;
pub mod http;
pub mod rewards;
pub mod store;
