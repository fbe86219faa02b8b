//! External rewards/profile API adapter.

pub mod client;
pub mod models;

pub use client::RewardsClient;
