//! `spotlight cache`: local list cache management.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::setup::build_list_cache;

#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommands,
}

#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Invalidate the cached user list
    Clear,
}

#[derive(Debug, Serialize)]
pub struct CacheClearOutput {
    pub key: String,
    pub cleared: bool,
}

impl CommandOutput for CacheClearOutput {
    fn to_human(&self) -> String {
        format!("Cleared cache entry '{}'", self.key)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: CacheArgs, json_mode: bool, config: &Config) -> Result<()> {
    match args.command {
        CacheCommands::Clear => {
            let cache = build_list_cache(config)?;
            cache.invalidate().await;
            output(
                &CacheClearOutput {
                    key: cache.key().to_string(),
                    cleared: true,
                },
                json_mode,
            );
        }
    }
    Ok(())
}
