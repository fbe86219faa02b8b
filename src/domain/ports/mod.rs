//! Port trait definitions (Hexagonal Architecture)
//!
//! Contracts the services depend on, implemented by adapters:
//! - KeyValueStore: persisted slot behind the list cache
//! - Clock: current time for freshness checks
//! - UserDirectory / ProfileSource: server-side user data
//! - RewardsApi: external winners and profile lookups
//! - UserApi: viewer-side HTTP fetchers

pub mod clock;
pub mod errors;
pub mod kv_store;
pub mod rewards_api;
pub mod user_api;
pub mod user_directory;

pub use clock::Clock;
pub use errors::{FetchError, StoreError, UpstreamError};
pub use kv_store::KeyValueStore;
pub use rewards_api::RewardsApi;
pub use user_api::UserApi;
pub use user_directory::{ProfileSource, UserDirectory};
