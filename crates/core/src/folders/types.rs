use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::TemplateFolder;

/// Who the folder view is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    /// Administrative context: every folder is visible.
    Administrator,
    /// A service user who only sees folders listing them in
    /// `users_with_permission`.
    User(Uuid),
}

impl Viewer {
    /// Returns true if this viewer may see `folder` directly.
    pub fn can_see(&self, folder: &TemplateFolder) -> bool {
        match self {
            Viewer::Administrator => true,
            Viewer::User(user_id) => folder.is_visible_to(*user_id),
        }
    }
}

impl From<Uuid> for Viewer {
    fn from(user_id: Uuid) -> Self {
        Viewer::User(user_id)
    }
}

impl From<Option<Uuid>> for Viewer {
    fn from(user_id: Option<Uuid>) -> Self {
        user_id.map_or(Viewer::Administrator, Viewer::User)
    }
}

/// The label shown for a folder.
///
/// `Collapsed` holds the names of invisible ancestors folded into this
/// folder's label, root to leaf, ending with the folder's own name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayName {
    Plain(String),
    Collapsed(Vec<String>),
}

impl DisplayName {
    /// Builds the label from the invisible ancestor chain and the folder name.
    pub(crate) fn from_chain(mut chain: Vec<String>, name: &str) -> Self {
        if chain.is_empty() {
            DisplayName::Plain(name.to_string())
        } else {
            chain.push(name.to_string());
            DisplayName::Collapsed(chain)
        }
    }

    /// Returns the label segments, root to leaf.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            DisplayName::Plain(name) => vec![name.as_str()],
            DisplayName::Collapsed(chain) => chain.iter().map(String::as_str).collect(),
        }
    }

    /// Returns the folder's own name (the last segment).
    pub fn own_name(&self) -> &str {
        match self {
            DisplayName::Plain(name) => name,
            DisplayName::Collapsed(chain) => chain.last().map(String::as_str).unwrap_or(""),
        }
    }

    /// Returns true if invisible ancestors were folded into this label.
    pub fn is_collapsed(&self) -> bool {
        matches!(self, DisplayName::Collapsed(_))
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments().join(" / "))
    }
}

/// A folder as shown to one viewer.
///
/// `parent_id` is the nearest ancestor the viewer can see (or `None` at the
/// root); `id` is always the underlying folder's id so the node stays
/// routable even when its label is collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub display_name: DisplayName,
    pub users_with_permission: BTreeSet<Uuid>,
    /// Depth in the viewer's tree, 0 for top-level entries.
    pub depth: usize,
    /// Templates in this folder and every visible descendant.
    pub template_count: usize,
    /// Visible descendant folders.
    pub folder_count: usize,
}
