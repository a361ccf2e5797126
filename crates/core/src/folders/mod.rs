//! Per-viewer template folder hierarchy.
//!
//! Pure functions only: the folder and template lists come from the
//! remote API (usually through the cache) and are never mutated here.

mod arena;
mod builder;
mod types;
mod view;

pub use builder::{build_folder_nodes, visible_folder_ids, FolderTreeBuilder};
pub use types::{DisplayName, FolderNode, Viewer};
pub use view::FolderView;
