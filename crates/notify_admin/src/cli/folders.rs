//! Template folder CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Template folder commands.
#[derive(Debug, Parser)]
pub struct FoldersCommand {
    #[command(subcommand)]
    pub action: FoldersAction,
}

/// Available folder actions.
#[derive(Debug, Subcommand)]
pub enum FoldersAction {
    /// Show the folder tree of a service.
    List {
        /// Service ID.
        #[arg(long = "service")]
        service_id: Uuid,
        /// Show the tree as this user sees it. Omit for the administrator view.
        #[arg(long)]
        user: Option<Uuid>,
    },
    /// Create a folder.
    Create {
        /// Service ID.
        #[arg(long = "service")]
        service_id: Uuid,
        /// Folder name.
        #[arg(long)]
        name: String,
        /// Parent folder ID. Omit to create at the top level.
        #[arg(long)]
        parent: Option<Uuid>,
    },
    /// Rename a folder.
    Rename {
        /// Service ID.
        #[arg(long = "service")]
        service_id: Uuid,
        /// Folder ID.
        id: Uuid,
        /// New folder name.
        #[arg(long)]
        name: String,
    },
    /// Delete an empty folder.
    Delete {
        /// Service ID.
        #[arg(long = "service")]
        service_id: Uuid,
        /// Folder ID.
        id: Uuid,
    },
    /// Move templates and folders into a folder.
    Move {
        /// Service ID.
        #[arg(long = "service")]
        service_id: Uuid,
        /// Target folder ID. Omit to move to the top level.
        #[arg(long)]
        to: Option<Uuid>,
        /// Template to move (repeatable).
        #[arg(long = "template")]
        templates: Vec<Uuid>,
        /// Folder to move (repeatable).
        #[arg(long = "folder")]
        folders: Vec<Uuid>,
    },
}
