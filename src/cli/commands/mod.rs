//! Command handlers. Each module owns its clap arguments and an `execute`
//! entry point.

pub mod aggregate;
pub mod cache;
pub mod profile;
pub mod serve;
pub mod users;
