//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{
    aggregate::AggregateArgs, cache::CacheArgs, profile::ProfileArgs, serve::ServeArgs,
    users::UsersArgs,
};

#[derive(Parser, Debug)]
#[command(name = "spotlight")]
#[command(about = "Spotlight - featured user directory and profile viewer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Path to a configuration file (defaults to spotlight.yaml + spotlight.local.yaml)
    #[arg(short, long, global = true, env = "SPOTLIGHT_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve(ServeArgs),
    /// List featured users through the local cache
    Users(UsersArgs),
    /// Show a user's profile and casts
    Profile(ProfileArgs),
    /// Build the user list from the rewards API and report omissions
    Aggregate(AggregateArgs),
    /// Manage the local list cache
    Cache(CacheArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CastTab, DirectorySource};

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "spotlight", "serve", "--port", "8080", "--source", "rewards",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.source, Some(DirectorySource::Rewards));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_profile_with_collect_list() {
        let cli = Cli::try_parse_from([
            "spotlight", "--json", "profile", "dwr", "--tab", "first", "--collect", "1,3",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Profile(args) => {
                assert_eq!(args.username, "dwr");
                assert_eq!(args.tab, CastTab::First);
                assert_eq!(args.collect, vec![1, 3]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["spotlight", "users", "--refresh", "--config", "alt.yaml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.yaml")));
        assert!(matches!(cli.command, Commands::Users(ref a) if a.refresh));
    }

    #[test]
    fn test_rejects_unknown_tab() {
        assert!(Cli::try_parse_from(["spotlight", "profile", "dwr", "--tab", "latest"]).is_err());
    }
}
