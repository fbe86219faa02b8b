//! Server-side user data sources.

pub mod mock;

pub use mock::MockDirectory;
