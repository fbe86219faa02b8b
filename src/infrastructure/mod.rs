//! Infrastructure layer module
//!
//! Process-wide concerns that sit outside the domain:
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)
//! - Wiring of adapters and services from configuration

pub mod config;
pub mod logging;
pub mod setup;
