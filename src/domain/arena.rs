use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::entities::{Gender, Person};
use crate::domain::error::{DomainError, DomainResult};

/// Tree node in the arena-based family structure.
#[derive(Debug)]
pub struct PersonNode {
    /// Person record stored in this slot
    pub person: Person,
    /// Index of the parent node in the arena, None for roots and detached persons
    pub parent: Option<Index>,
    /// Indices of child nodes in insertion order
    pub children: Vec<Index>,
}

/// Arena-based family tree.
///
/// Uses a generational arena so that handles to released persons are
/// detected as stale instead of aliasing a newer record. The arena owns
/// every node; each parent owns the handles of its direct children.
#[derive(Debug)]
pub struct FamilyTree {
    arena: Arena<PersonNode>,
}

impl Default for FamilyTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Creates a detached person (no parent, no children).
    ///
    /// No validation is performed on any field.
    #[instrument(level = "trace", skip_all)]
    pub fn create_person(
        &mut self,
        name: impl Into<String>,
        birth_date: impl Into<String>,
        gender: impl Into<Gender>,
    ) -> Index {
        self.insert_person(Person::new(name, birth_date, gender))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_person(&mut self, person: Person) -> Index {
        self.arena.insert(PersonNode {
            person,
            parent: None,
            children: Vec::new(),
        })
    }

    /// Appends `child` to the children of `parent` and sets its parent reference.
    ///
    /// Nothing is modified when an error is returned.
    ///
    /// # Errors
    /// * `InvalidReference` if either handle is unknown or stale
    /// * `AlreadyHasParent` if `child` is already linked
    /// * `CycleDetected` if `child` is `parent` or one of its ancestors
    #[instrument(level = "debug", skip(self))]
    pub fn add_child(&mut self, parent: Index, child: Index) -> DomainResult<()> {
        if !self.arena.contains(parent) {
            return Err(DomainError::InvalidReference(parent));
        }
        let existing = self
            .arena
            .get(child)
            .ok_or(DomainError::InvalidReference(child))?
            .parent;
        if let Some(existing) = existing {
            return Err(DomainError::AlreadyHasParent {
                child,
                parent: existing,
            });
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(DomainError::CycleDetected(child));
        }

        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(child);
        }
        if let Some(child_node) = self.arena.get_mut(child) {
            child_node.parent = Some(parent);
        }
        debug!("linked {:?} <- {:?}", parent, child);
        Ok(())
    }

    /// Walks up from `node` and reports whether `candidate` is on the path.
    fn is_ancestor_or_self(&self, candidate: Index, node: Index) -> bool {
        let mut current = Some(node);
        while let Some(idx) = current {
            if idx == candidate {
                return true;
            }
            current = self.arena.get(idx).and_then(|n| n.parent);
        }
        false
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&PersonNode> {
        self.arena.get(idx)
    }

    pub fn person(&self, idx: Index) -> Option<&Person> {
        self.arena.get(idx).map(|n| &n.person)
    }

    pub fn parent_of(&self, idx: Index) -> Option<Index> {
        self.arena.get(idx).and_then(|n| n.parent)
    }

    /// Children of `idx` in insertion order; empty for unknown handles.
    pub fn children_of(&self, idx: Index) -> &[Index] {
        self.arena
            .get(idx)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, idx: Index) -> bool {
        self.arena.contains(idx)
    }

    /// Persons without a parent, in arena order.
    #[instrument(level = "trace", skip(self))]
    pub fn roots(&self) -> Vec<Index> {
        self.arena
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order iterator over the subtree rooted at `root`.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_from(&self, root: Index) -> TreeIterator<'_> {
        TreeIterator::new(self, root)
    }

    /// Post-order iterator over the subtree rooted at `root`.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder_from(&self, root: Index) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self, root)
    }

    /// Releases every person in the subtree rooted at `root`, children first.
    ///
    /// An absent root is a no-op. A subtree root that still has a parent is
    /// detached from it before release. Returns the number of released persons.
    ///
    /// # Errors
    /// * `InvalidReference` if `root` is unknown or stale
    #[instrument(level = "debug", skip(self))]
    pub fn destroy_tree(&mut self, root: Option<Index>) -> DomainResult<usize> {
        let Some(root) = root else {
            return Ok(0);
        };
        let parent = self
            .arena
            .get(root)
            .ok_or(DomainError::InvalidReference(root))?
            .parent;
        if let Some(parent_idx) = parent {
            if let Some(parent_node) = self.arena.get_mut(parent_idx) {
                parent_node.children.retain(|&c| c != root);
            }
        }

        let order: Vec<Index> = self.iter_postorder_from(root).map(|(idx, _)| idx).collect();
        let mut released = 0;
        for idx in order {
            if self.arena.remove(idx).is_some() {
                released += 1;
            }
        }
        debug!("released {} persons under {:?}", released, root);
        Ok(released)
    }
}

pub struct TreeIterator<'a> {
    tree: &'a FamilyTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a FamilyTree, root: Index) -> Self {
        let mut stack = Vec::new();
        if tree.contains(root) {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a PersonNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a FamilyTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a FamilyTree, root: Index) -> Self {
        let mut stack = Vec::new();
        if tree.contains(root) {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a PersonNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_person_when_created_then_is_detached_root() {
        let mut tree = FamilyTree::new();
        let idx = tree.create_person("Avô", "1945-01-01", 'M');

        let node = tree.get_node(idx).unwrap();
        assert_eq!(node.parent, None);
        assert!(node.children.is_empty());
        assert_eq!(tree.roots(), vec![idx]);
    }

    #[test]
    fn given_self_link_when_adding_child_then_cycle_detected() {
        let mut tree = FamilyTree::new();
        let idx = tree.create_person("Avô", "1945-01-01", 'M');

        assert_eq!(tree.add_child(idx, idx), Err(DomainError::CycleDetected(idx)));
        assert!(tree.children_of(idx).is_empty());
        assert_eq!(tree.parent_of(idx), None);
    }

    #[test]
    fn given_root_when_linking_under_own_grandchild_then_cycle_detected() {
        let mut tree = FamilyTree::new();
        let a = tree.create_person("A", "1900-01-01", 'M');
        let b = tree.create_person("B", "1930-01-01", 'F');
        let c = tree.create_person("C", "1960-01-01", 'M');
        tree.add_child(a, b).unwrap();
        tree.add_child(b, c).unwrap();

        assert_eq!(tree.add_child(c, a), Err(DomainError::CycleDetected(a)));
        assert!(tree.children_of(c).is_empty());
        assert_eq!(tree.parent_of(a), None);
    }
}
