//! `spotlight serve`: run the HTTP API.

use anyhow::{anyhow, Result};
use clap::Args;
use tracing::info;

use crate::adapters::http::ApiServer;
use crate::domain::models::{Config, DirectorySource};
use crate::infrastructure::setup::build_directory;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Where the user list comes from: mock or rewards
    #[arg(short, long)]
    pub source: Option<DirectorySource>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(source) = self.source {
            config.server.source = source;
        }
    }
}

pub async fn execute(args: ServeArgs, mut config: Config) -> Result<()> {
    args.apply(&mut config);
    let handles = build_directory(&config)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        source = ?config.server.source,
        "starting server"
    );

    ApiServer::new(config.server, handles.directory, handles.profiles)
        .serve()
        .await
        .map_err(|e| anyhow!("server error: {e}"))
}
