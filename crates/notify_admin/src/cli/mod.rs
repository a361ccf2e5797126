//! CLI command definitions.

pub mod cache;
pub mod folders;
pub mod templates;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

/// Admin CLI for the notify remote API, backed by a shared cache.
#[derive(Debug, Parser)]
#[command(name = "notify-admin")]
#[command(about = "Admin CLI for the notify API with a read-through cache", long_about = None)]
pub struct Cli {
    /// Remote API base URL. Overrides `NOTIFY_API_URL`.
    #[arg(long)]
    pub api_url: Option<String>,

    /// Remote API bearer token. Overrides `NOTIFY_API_TOKEN`.
    #[arg(long)]
    pub api_token: Option<String>,

    /// User that mutations are attributed to. Required for writes.
    #[arg(long, env = "NOTIFY_ACTOR_ID")]
    pub actor: Option<Uuid>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Template folder management.
    Folders(folders::FoldersCommand),
    /// Template reads.
    Templates(templates::TemplatesCommand),
    /// Inspect and purge cache entries.
    Cache(cache::CacheCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_folder_list() {
        let service = Uuid::new_v4();
        let cli = Cli::try_parse_from([
            "notify-admin",
            "--format",
            "json",
            "folders",
            "list",
            "--service",
            &service.to_string(),
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Folders(cmd) => match cmd.action {
                folders::FoldersAction::List { service_id, user } => {
                    assert_eq!(service_id, service);
                    assert_eq!(user, None);
                }
                other => panic!("unexpected action: {:?}", other),
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_malformed_uuid() {
        let result = Cli::try_parse_from([
            "notify-admin",
            "templates",
            "list",
            "--service",
            "not-a-uuid",
        ]);
        assert!(result.is_err());
    }
}
