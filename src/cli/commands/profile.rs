//! `spotlight profile`: one user's profile and casts.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{create_spinner, output, CommandOutput, ProgressBarExt, TableFormatter};
use crate::domain::models::{Cast, CastTab, CollectedSet, Config, UserSummary};
use crate::infrastructure::setup::build_viewer;
use crate::services::ProfileView;

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Username to look up
    pub username: String,

    /// Which casts to show: top or first
    #[arg(short, long, default_value = "top")]
    pub tab: CastTab,

    /// Cast ids to toggle in the collected set (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub collect: Vec<u64>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProfileOutput {
    Loaded {
        user: UserSummary,
        tab: CastTab,
        casts: Vec<Cast>,
        collected: Vec<u64>,
    },
    Error {
        username: String,
        error: String,
    },
}

impl ProfileOutput {
    pub fn from_view(
        username: &str,
        view: ProfileView,
        tab: CastTab,
        collected: &CollectedSet,
    ) -> Self {
        match view {
            ProfileView::Loaded(data) => {
                let casts = data.casts(tab).to_vec();
                Self::Loaded {
                    user: data.summary,
                    tab,
                    casts,
                    collected: collected.iter().collect(),
                }
            }
            ProfileView::Error(error) => Self::Error {
                username: username.to_string(),
                error,
            },
        }
    }
}

impl CommandOutput for ProfileOutput {
    fn to_human(&self) -> String {
        match self {
            Self::Error { username, error } => format!("@{username}: {error}"),
            Self::Loaded {
                user,
                tab,
                casts,
                collected,
            } => {
                let badge = if user.verified { " ✓" } else { "" };
                let mut lines = vec![format!(
                    "{}{badge} (@{})",
                    console::style(&user.display_name).bold(),
                    user.username
                )];
                if !user.bio.is_empty() {
                    lines.push(user.bio.clone());
                }
                let mut stats = format!(
                    "{} followers · {} following",
                    user.followers, user.following
                );
                if !user.join_date.is_empty() {
                    stats.push_str(&format!(" · Joined {}", user.join_date));
                }
                lines.push(stats);
                lines.push(String::new());

                let set = collected.iter().copied().fold(CollectedSet::new(), |mut set, id| {
                    set.toggle(id);
                    set
                });
                if casts.is_empty() {
                    lines.push(format!("No {tab} casts."));
                } else {
                    lines.push(format!("{} casts", capitalize(tab.as_str())));
                    lines.push(TableFormatter::new().format_casts(casts, &set));
                }
                if !collected.is_empty() {
                    lines.push(format!("{} collected", collected.len()));
                }
                lines.join("\n")
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|c| c.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

pub async fn execute(args: ProfileArgs, json_mode: bool, config: &Config) -> Result<()> {
    let mut viewer = build_viewer(config)?;
    for id in &args.collect {
        viewer.toggle_collect(*id);
    }

    let spinner = create_spinner(format!("Loading @{}...", args.username), json_mode);
    let view = viewer.load_profile(&args.username).await;
    match &view {
        ProfileView::Loaded(_) => spinner.finish_success(format!("Loaded @{}", args.username)),
        ProfileView::Error(message) => spinner.finish_warning(message.clone()),
    }

    let result = ProfileOutput::from_view(&args.username, view, args.tab, viewer.collected());
    output(&result, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::directory::MockDirectory;
    use crate::domain::ports::ProfileSource;

    #[tokio::test]
    async fn test_loaded_profile_selects_tab() {
        let data = MockDirectory::default().get_profile("dwr").await.unwrap();
        let expected = data.first_casts.len();
        let mut collected = CollectedSet::new();
        collected.toggle(data.first_casts[0].id);

        let out = ProfileOutput::from_view(
            "dwr",
            ProfileView::Loaded(data),
            CastTab::First,
            &collected,
        );
        match &out {
            ProfileOutput::Loaded {
                casts, collected, ..
            } => {
                assert_eq!(casts.len(), expected);
                assert_eq!(collected.len(), 1);
            }
            ProfileOutput::Error { .. } => panic!("expected loaded profile"),
        }
        assert_eq!(out.to_json()["status"], "loaded");
        assert_eq!(out.to_json()["tab"], "first");
    }

    #[test]
    fn test_error_output() {
        let out = ProfileOutput::from_view(
            "ghost",
            ProfileView::Error("User not found".to_string()),
            CastTab::Top,
            &CollectedSet::new(),
        );
        assert_eq!(out.to_human(), "@ghost: User not found");
        assert_eq!(out.to_json()["error"], "User not found");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("top"), "Top");
        assert_eq!(capitalize(""), "");
    }
}
