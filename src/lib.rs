//! Spotlight - featured user directory and profile viewer
//!
//! Spotlight serves a small directory of featured users over HTTP and ships a
//! viewer CLI that reads it through a time-bounded local cache. The user list
//! can come from a static dataset or be aggregated from an external rewards
//! API with bounded fan-out.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, port traits and domain errors
//! - **Adapters** (`adapters`): HTTP server, HTTP clients, stores and clocks
//! - **Service Layer** (`services`): List cache, aggregator and viewer logic
//! - **Infrastructure Layer** (`infrastructure`): Configuration, logging and wiring
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use spotlight::infrastructure::setup::build_viewer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = spotlight::ConfigLoader::load()?;
//!     let viewer = build_viewer(&config)?;
//!     let view = viewer.load_users().await;
//!     println!("{} users", view.users.len());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Cast, CastTab, CollectedSet, Config, UserData, UserListing, UserSummary,
};
pub use domain::ports::{
    Clock, FetchError, KeyValueStore, ProfileSource, RewardsApi, UserApi, UserDirectory,
};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{Aggregator, ListCache, ViewerService};
