//! Index-based folder hierarchy.
//!
//! Folders come from the remote API as a flat list and may be malformed:
//! duplicate ids, parents that do not exist, or parent chains that loop.
//! The arena indexes folders by position and resolves parent links to
//! positions, so traversal never follows a pointer it has not checked.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::models::TemplateFolder;

pub(crate) struct FolderArena<'a> {
    folders: Vec<&'a TemplateFolder>,
    index: HashMap<Uuid, usize>,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    broken_cycles: Vec<Uuid>,
}

impl<'a> FolderArena<'a> {
    pub(crate) fn new(input: &'a [TemplateFolder]) -> Self {
        // The first folder with a given id wins.
        let mut index = HashMap::with_capacity(input.len());
        let mut folders = Vec::with_capacity(input.len());
        for folder in input {
            index.entry(folder.id).or_insert_with(|| {
                folders.push(folder);
                folders.len() - 1
            });
        }

        // Unknown parents make the folder a root.
        let mut parents: Vec<Option<usize>> = folders
            .iter()
            .map(|folder| folder.parent_id.and_then(|id| index.get(&id).copied()))
            .collect();

        let broken_cycles = break_cycles(&folders, &mut parents);

        let mut children = vec![Vec::new(); folders.len()];
        let mut roots = Vec::new();
        for (position, parent) in parents.iter().enumerate() {
            match parent {
                Some(parent) => children[*parent].push(position),
                None => roots.push(position),
            }
        }

        Self {
            folders,
            index,
            parents,
            children,
            roots,
            broken_cycles,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.folders.len()
    }

    pub(crate) fn folder(&self, position: usize) -> &'a TemplateFolder {
        self.folders[position]
    }

    pub(crate) fn position(&self, id: Uuid) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub(crate) fn parent(&self, position: usize) -> Option<usize> {
        self.parents[position]
    }

    pub(crate) fn broken_cycles(&self) -> &[Uuid] {
        &self.broken_cycles
    }

    /// Depth-first pre-order over the hierarchy, siblings in input order.
    pub(crate) fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.folders.len());
        let mut stack: Vec<usize> = self.roots.iter().rev().copied().collect();
        while let Some(position) = stack.pop() {
            order.push(position);
            stack.extend(self.children[position].iter().rev().copied());
        }
        order
    }
}

/// Cuts every parent link that closes a loop.
///
/// Folders are walked in input order; along each parent chain the first
/// folder seen twice is turned into a root. Returns the ids that were cut.
fn break_cycles(folders: &[&TemplateFolder], parents: &mut [Option<usize>]) -> Vec<Uuid> {
    let mut broken = Vec::new();
    // Folders whose chain is known to end at a root.
    let mut settled = vec![false; folders.len()];

    for start in 0..folders.len() {
        let mut seen = HashSet::new();
        let mut path = Vec::new();
        let mut current = Some(start);

        while let Some(position) = current {
            if settled[position] {
                break;
            }
            if !seen.insert(position) {
                parents[position] = None;
                broken.push(folders[position].id);
                break;
            }
            path.push(position);
            current = parents[position];
        }

        for position in path {
            settled[position] = true;
        }
    }

    broken
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(name: &str) -> TemplateFolder {
        TemplateFolder::new(name)
    }

    fn names(arena: &FolderArena<'_>, order: &[usize]) -> Vec<String> {
        order
            .iter()
            .map(|p| arena.folder(*p).name.clone())
            .collect()
    }

    #[test]
    fn test_preorder_keeps_input_order_for_siblings() {
        let a = folder("A");
        let b = folder("B");
        let a1 = folder("A1").with_parent(a.id);
        let a2 = folder("A2").with_parent(a.id);
        let a1x = folder("A1x").with_parent(a1.id);
        let input = vec![a2.clone(), b.clone(), a1x, a.clone(), a1.clone()];

        let arena = FolderArena::new(&input);

        assert_eq!(
            names(&arena, &arena.preorder()),
            vec!["B", "A", "A2", "A1", "A1x"]
        );
    }

    #[test]
    fn test_dangling_parent_is_root() {
        let orphan = folder("Orphan").with_parent(Uuid::new_v4());
        let input = vec![orphan];

        let arena = FolderArena::new(&input);

        assert_eq!(arena.parent(0), None);
        assert!(arena.broken_cycles().is_empty());
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let first = folder("First");
        let second = folder("Second").with_id(first.id);
        let input = vec![first, second];

        let arena = FolderArena::new(&input);

        assert_eq!(arena.len(), 1);
        assert_eq!(arena.folder(0).name, "First");
    }

    #[test]
    fn test_self_parent_is_cut() {
        let mut looped = folder("Loop");
        looped.parent_id = Some(looped.id);
        let input = vec![looped.clone()];

        let arena = FolderArena::new(&input);

        assert_eq!(arena.parent(0), None);
        assert_eq!(arena.broken_cycles(), &[looped.id]);
        assert_eq!(arena.preorder(), vec![0]);
    }

    #[test]
    fn test_two_node_cycle_breaks_at_first_repeat() {
        let mut a = folder("A");
        let mut b = folder("B");
        a.parent_id = Some(b.id);
        b.parent_id = Some(a.id);
        let input = vec![a.clone(), b.clone()];

        let arena = FolderArena::new(&input);

        // Walking from A: A -> B -> A, so A is the first repeated id.
        assert_eq!(arena.broken_cycles(), &[a.id]);
        assert_eq!(arena.parent(0), None);
        assert_eq!(arena.parent(1), Some(0));
        assert_eq!(names(&arena, &arena.preorder()), vec!["A", "B"]);
    }

    #[test]
    fn test_cycle_below_an_acyclic_tail() {
        // D -> C -> B -> C loops between B and C.
        let mut b = folder("B");
        let mut c = folder("C");
        b.parent_id = Some(c.id);
        c.parent_id = Some(b.id);
        let d = folder("D").with_parent(c.id);
        let input = vec![d, c.clone(), b.clone()];

        let arena = FolderArena::new(&input);

        assert_eq!(arena.broken_cycles(), &[c.id]);
        assert_eq!(arena.preorder().len(), 3);
    }
}
