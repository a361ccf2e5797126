use std::collections::HashMap;

use uuid::Uuid;

use crate::models::Template;

use super::FolderNode;

/// The folder hierarchy as one viewer sees it.
///
/// Nodes are in depth-first pre-order. Templates are kept alongside with
/// the folder they are listed under; templates in folders the viewer cannot
/// see are not included.
#[derive(Debug, Clone, Default)]
pub struct FolderView {
    nodes: Vec<FolderNode>,
    positions: HashMap<Uuid, usize>,
    templates: Vec<(Option<Uuid>, Template)>,
    broken_cycles: Vec<Uuid>,
}

impl FolderView {
    pub(crate) fn new(
        nodes: Vec<FolderNode>,
        templates: Vec<(Option<Uuid>, Template)>,
        broken_cycles: Vec<Uuid>,
    ) -> Self {
        let positions = nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node.id, position))
            .collect();

        Self {
            nodes,
            positions,
            templates,
            broken_cycles,
        }
    }

    /// All visible folders in depth-first pre-order.
    pub fn nodes(&self) -> &[FolderNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<FolderNode> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&FolderNode> {
        self.positions.get(&id).map(|position| &self.nodes[*position])
    }

    pub fn is_visible(&self, id: Uuid) -> bool {
        self.positions.contains_key(&id)
    }

    /// Folders directly under `parent` in this view, `None` for the top level.
    pub fn children(&self, parent: Option<Uuid>) -> Vec<&FolderNode> {
        self.nodes
            .iter()
            .filter(|node| node.parent_id == parent)
            .collect()
    }

    /// The path from the top level down to `id`, inclusive.
    ///
    /// Empty if the folder is not visible.
    pub fn breadcrumbs(&self, id: Uuid) -> Vec<&FolderNode> {
        let mut trail = Vec::new();
        let mut current = self.get(id);
        while let Some(node) = current {
            trail.push(node);
            current = node.parent_id.and_then(|parent| self.get(parent));
        }
        trail.reverse();
        trail
    }

    /// Templates listed directly in `folder`, `None` for the top level.
    pub fn templates_in(&self, folder: Option<Uuid>) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|(placed_in, _)| *placed_in == folder)
            .map(|(_, template)| template)
            .collect()
    }

    /// Every template the viewer can see, in input order.
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter().map(|(_, template)| template)
    }

    /// Folders whose parent link was cut to break a cycle.
    pub fn broken_cycles(&self) -> &[Uuid] {
        &self.broken_cycles
    }
}
