//! `spotlight users`: featured users through the local list cache.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{create_spinner, output, CommandOutput, ProgressBarExt, TableFormatter};
use crate::domain::models::{Config, UserSummary};
use crate::infrastructure::setup::build_viewer;
use crate::services::UsersView;

#[derive(Args, Debug)]
pub struct UsersArgs {
    /// Drop the cached list and fetch again
    #[arg(short, long)]
    pub refresh: bool,

    /// Only show users whose username or display name contains TEXT
    #[arg(short, long, value_name = "TEXT")]
    pub filter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UsersOutput {
    pub users: Vec<UserSummary>,
    pub total: usize,
    pub from_cache: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UsersOutput {
    pub fn from_view(view: UsersView, filter: Option<String>) -> Self {
        let total = view.users.len();
        let users = match &filter {
            Some(needle) => view.users.into_iter().filter(|u| u.matches(needle)).collect(),
            None => view.users,
        };
        Self {
            users,
            total,
            from_cache: view.from_cache,
            filter,
            error: view.error,
        }
    }
}

impl CommandOutput for UsersOutput {
    fn to_human(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Could not load featured users: {error}");
        }
        if self.users.is_empty() {
            return match &self.filter {
                Some(f) => format!("No users match '{f}'."),
                None => "No featured users.".to_string(),
            };
        }

        let source = if self.from_cache { "cached" } else { "fresh" };
        let mut lines = vec![TableFormatter::new().format_users(&self.users)];
        lines.push(format!(
            "Showing {} of {} users ({source})",
            self.users.len(),
            self.total
        ));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: UsersArgs, json_mode: bool, config: &Config) -> Result<()> {
    let viewer = build_viewer(config)?;

    let spinner = create_spinner("Loading featured users...", json_mode);
    let view = if args.refresh {
        viewer.refresh_users().await
    } else {
        viewer.load_users().await
    };
    if view.error.is_some() {
        spinner.finish_warning("Failed to load users");
    } else {
        spinner.finish_success(format!("Loaded {} users", view.users.len()));
    }

    output(&UsersOutput::from_view(view, args.filter), json_mode);
    Ok(())
}
