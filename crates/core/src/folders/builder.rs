use uuid::Uuid;

use crate::models::{Template, TemplateFolder};

use super::arena::FolderArena;
use super::{DisplayName, FolderNode, FolderView, Viewer};

/// Builds the per-viewer folder view.
///
/// A folder the viewer cannot see is dropped from the view. Its visible
/// descendants are attached to the nearest visible ancestor, and the
/// dropped folders' names are folded into their labels. Templates inside
/// dropped folders are hidden.
pub struct FolderTreeBuilder<'a> {
    folders: &'a [TemplateFolder],
    templates: &'a [Template],
}

/// Where a folder lands in the viewer's tree.
#[derive(Clone, Default)]
struct Placement {
    /// Nearest visible ancestor, as an arena position.
    anchor: Option<usize>,
    /// Names of invisible folders between the anchor and this folder.
    hidden: Vec<String>,
}

impl<'a> FolderTreeBuilder<'a> {
    pub fn new(folders: &'a [TemplateFolder], templates: &'a [Template]) -> Self {
        Self { folders, templates }
    }

    pub fn build(&self, viewer: impl Into<Viewer>) -> FolderView {
        let viewer = viewer.into();
        let arena = FolderArena::new(self.folders);
        let order = arena.preorder();

        let visible: Vec<bool> = (0..arena.len())
            .map(|position| viewer.can_see(arena.folder(position)))
            .collect();

        // Pre-order guarantees a parent is placed before its children.
        let mut placements = vec![Placement::default(); arena.len()];
        for &position in &order {
            let Some(parent) = arena.parent(position) else {
                continue;
            };
            placements[position] = if visible[parent] {
                Placement {
                    anchor: Some(parent),
                    hidden: Vec::new(),
                }
            } else {
                let mut inherited = placements[parent].clone();
                inherited.hidden.push(arena.folder(parent).name.clone());
                inherited
            };
        }

        let mut folder_counts = vec![0usize; arena.len()];
        let mut template_counts = vec![0usize; arena.len()];
        let mut depths = vec![0usize; arena.len()];

        for &position in &order {
            if !visible[position] {
                continue;
            }
            if let Some(anchor) = placements[position].anchor {
                depths[position] = depths[anchor] + 1;
            }
            let mut ancestor = placements[position].anchor;
            while let Some(current) = ancestor {
                folder_counts[current] += 1;
                ancestor = placements[current].anchor;
            }
        }

        let mut placed_templates = Vec::with_capacity(self.templates.len());
        for template in self.templates {
            let folder = template.folder_id.and_then(|id| arena.position(id));
            match folder {
                // Unfiled, or filed under a folder that no longer exists.
                None => placed_templates.push((None, template.clone())),
                Some(position) if visible[position] => {
                    let mut current = Some(position);
                    while let Some(counted) = current {
                        template_counts[counted] += 1;
                        current = placements[counted].anchor;
                    }
                    placed_templates.push((Some(arena.folder(position).id), template.clone()));
                }
                Some(_) => {}
            }
        }

        let nodes = order
            .into_iter()
            .filter(|position| visible[*position])
            .map(|position| {
                let folder = arena.folder(position);
                let placement = &placements[position];
                FolderNode {
                    id: folder.id,
                    parent_id: placement.anchor.map(|anchor| arena.folder(anchor).id),
                    display_name: DisplayName::from_chain(placement.hidden.clone(), &folder.name),
                    users_with_permission: folder.users_with_permission.clone(),
                    depth: depths[position],
                    template_count: template_counts[position],
                    folder_count: folder_counts[position],
                }
            })
            .collect();

        FolderView::new(nodes, placed_templates, arena.broken_cycles().to_vec())
    }
}

/// Builds the visible folder nodes for `viewer` in one call.
pub fn build_folder_nodes(
    folders: &[TemplateFolder],
    templates: &[Template],
    viewer: impl Into<Viewer>,
) -> Vec<FolderNode> {
    FolderTreeBuilder::new(folders, templates)
        .build(viewer)
        .into_nodes()
}

/// Returns the ids of `folders` visible to `user_id`, in input order.
pub fn visible_folder_ids(folders: &[TemplateFolder], user_id: Uuid) -> Vec<Uuid> {
    let viewer = Viewer::User(user_id);
    folders
        .iter()
        .filter(|folder| viewer.can_see(folder))
        .map(|folder| folder.id)
        .collect()
}
