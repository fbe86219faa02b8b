//! HTTP API adapter.

pub mod error;
pub mod server;

pub use error::{ApiError, ErrorResponse};
pub use server::{shutdown_signal, ApiServer, OMITTED_HEADER};
