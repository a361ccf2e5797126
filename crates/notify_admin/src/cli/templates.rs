//! Template CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Template commands.
#[derive(Debug, Parser)]
pub struct TemplatesCommand {
    #[command(subcommand)]
    pub action: TemplatesAction,
}

/// Available template actions.
#[derive(Debug, Subcommand)]
pub enum TemplatesAction {
    /// List templates, optionally limited to one folder.
    List {
        /// Service ID.
        #[arg(long = "service")]
        service_id: Uuid,
        /// Only templates directly in this folder.
        #[arg(long)]
        folder: Option<Uuid>,
        /// Only templates this user can see.
        #[arg(long)]
        user: Option<Uuid>,
    },
    /// Get a template, latest version unless `--version` is given.
    Get {
        /// Service ID.
        #[arg(long = "service")]
        service_id: Uuid,
        /// Template ID.
        id: Uuid,
        /// Template version.
        #[arg(long)]
        version: Option<u32>,
    },
    /// List every version of a template.
    Versions {
        /// Service ID.
        #[arg(long = "service")]
        service_id: Uuid,
        /// Template ID.
        id: Uuid,
    },
    /// Show how often each template was sent.
    Usage {
        /// Service ID.
        #[arg(long = "service")]
        service_id: Uuid,
        /// Reporting window in days.
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
}
