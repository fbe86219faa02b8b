//! Service wiring
//!
//! Builds the concrete adapters selected by [`Config`] and hands them to the
//! services behind their ports:
//! - the viewer (API client + list cache over the configured store)
//! - the directory served by `spotlight serve` (mock data or the aggregator)

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::api_client::ApiClient;
use crate::adapters::clock::SystemClock;
use crate::adapters::directory::MockDirectory;
use crate::adapters::rewards::RewardsClient;
use crate::adapters::store::build_store;
use crate::domain::models::{Config, DirectorySource};
use crate::domain::ports::{ProfileSource, UserDirectory};
use crate::services::{Aggregator, ListCache, ViewerService};

/// Ports backing the HTTP server.
pub struct DirectoryHandles {
    pub directory: Arc<dyn UserDirectory>,
    pub profiles: Arc<dyn ProfileSource>,
}

/// List cache over the configured store and the system clock.
pub fn build_list_cache(config: &Config) -> Result<ListCache> {
    let store = build_store(&config.cache)?;
    Ok(ListCache::from_config(
        &config.cache,
        store,
        Arc::new(SystemClock),
    ))
}

/// Viewer service talking to the Spotlight API at `client.base_url`.
pub fn build_viewer(config: &Config) -> Result<ViewerService> {
    let api = ApiClient::new(&config.client).context("Failed to build API client")?;
    let cache = build_list_cache(config)?;
    Ok(ViewerService::new(Arc::new(api), cache))
}

/// Aggregator over the live rewards API.
pub fn build_aggregator(config: &Config) -> Result<Aggregator> {
    let client = RewardsClient::new(&config.upstream).context("Failed to build rewards client")?;
    Ok(Aggregator::new(Arc::new(client), config.aggregator.clone()))
}

/// Directory and profile source for the configured [`DirectorySource`].
///
/// Profiles always come from the mock dataset; the rewards variant only
/// replaces the list.
pub fn build_directory(config: &Config) -> Result<DirectoryHandles> {
    let mock = Arc::new(MockDirectory::default());
    let directory: Arc<dyn UserDirectory> = match config.server.source {
        DirectorySource::Mock => mock.clone(),
        DirectorySource::Rewards => Arc::new(build_aggregator(config)?),
    };

    Ok(DirectoryHandles {
        directory,
        profiles: mock,
    })
}
