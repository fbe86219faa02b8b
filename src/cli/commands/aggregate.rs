//! `spotlight aggregate`: build the user list from the rewards API directly.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{create_spinner, output, CommandOutput, ProgressBarExt, TableFormatter};
use crate::domain::models::{Config, UserListing};
use crate::infrastructure::config::{ConfigLoader, MAX_CONCURRENCY};
use crate::infrastructure::setup::build_aggregator;

#[derive(Args, Debug)]
pub struct AggregateArgs {
    /// Override aggregator.max_concurrency (1-64)
    #[arg(long, value_parser = parse_concurrency)]
    pub concurrency: Option<usize>,
}

fn parse_concurrency(raw: &str) -> Result<usize, String> {
    let value: usize = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a whole number"))?;
    if (1..=MAX_CONCURRENCY).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be between 1 and {MAX_CONCURRENCY}"))
    }
}

/// Config with the command-line overrides applied, re-validated.
fn effective_config(args: &AggregateArgs, config: &Config) -> Result<Config> {
    let mut config = config.clone();
    if let Some(concurrency) = args.concurrency {
        config.aggregator.max_concurrency = concurrency;
    }
    ConfigLoader::validate(&config).context("Invalid aggregate options")?;
    Ok(config)
}

#[derive(Debug, Serialize)]
pub struct AggregateOutput {
    #[serde(flatten)]
    pub listing: UserListing,
    pub omitted_count: usize,
}

impl From<UserListing> for AggregateOutput {
    fn from(listing: UserListing) -> Self {
        let omitted_count = listing.omitted_count();
        Self {
            listing,
            omitted_count,
        }
    }
}

impl CommandOutput for AggregateOutput {
    fn to_human(&self) -> String {
        let formatter = TableFormatter::new();
        let mut lines = Vec::new();
        if !self.listing.users.is_empty() {
            lines.push(formatter.format_users(&self.listing.users));
        }
        lines.push(format!(
            "Resolved {} of {} winners",
            self.listing.users.len(),
            self.listing.requested
        ));
        if self.omitted_count > 0 {
            lines.push(format!("Omitted {} lookups:", self.omitted_count));
            lines.push(formatter.format_omitted(&self.listing.omitted));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: AggregateArgs, json_mode: bool, config: &Config) -> Result<()> {
    let config = effective_config(&args, config)?;
    let aggregator = build_aggregator(&config)?;

    let spinner = create_spinner("Aggregating reward winners...", json_mode);
    let listing = match aggregator.aggregate().await {
        Ok(listing) => listing,
        Err(e) => {
            spinner.finish_warning("Aggregation failed");
            return Err(e).context("Failed to aggregate users");
        }
    };
    if listing.is_complete() {
        spinner.finish_success(format!("Resolved {} users", listing.users.len()));
    } else {
        spinner.finish_warning(format!(
            "Resolved {} users, omitted {}",
            listing.users.len(),
            listing.omitted_count()
        ));
    }

    output(&AggregateOutput::from(listing), json_mode);
    Ok(())
}
