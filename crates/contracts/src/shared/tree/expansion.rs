use super::{reachable, CategoryTree, NodeId, NodeMap};
use std::collections::HashMap;

/// Раскрытые/свёрнутые узлы. Не зависит от выбора.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashMap<NodeId, bool>,
}

impl ExpansionState {
    /// Roots start expanded, everything else collapsed.
    pub fn new(roots: &[NodeId]) -> Self {
        Self {
            expanded: roots.iter().map(|id| (*id, true)).collect(),
        }
    }

    pub fn for_tree(tree: &CategoryTree) -> Self {
        Self::new(tree.roots())
    }

    /// State for a freshly loaded tree. An open control keeps showing the
    /// whole hierarchy, a closed one falls back to roots only.
    pub fn for_tree_open(tree: &CategoryTree, open: bool) -> Self {
        let mut state = Self::for_tree(tree);
        if open {
            state.expand_all(tree.roots(), tree.nodes());
        }
        state
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }

    pub fn toggle_expand(&mut self, id: NodeId) {
        let entry = self.expanded.entry(id).or_insert(false);
        *entry = !*entry;
    }

    /// Marks every node reachable from `roots` expanded. Called when the
    /// tree-select opens so the whole hierarchy is visible at once.
    pub fn expand_all(&mut self, roots: &[NodeId], nodes: &NodeMap) {
        for id in reachable(roots, nodes) {
            self.expanded.insert(id, true);
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.values_mut().for_each(|v| *v = false);
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.values().filter(|v| **v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    #[test]
    fn test_roots_default_expanded() {
        let tree = catalog();
        let state = ExpansionState::for_tree(&tree);
        assert!(state.is_expanded(id(10)));
        assert!(state.is_expanded(id(20)));
        assert!(!state.is_expanded(id(11)));
    }

    #[test]
    fn test_toggle_expand() {
        let mut state = ExpansionState::default();
        state.toggle_expand(id(11));
        assert!(state.is_expanded(id(11)));
        state.toggle_expand(id(11));
        assert!(!state.is_expanded(id(11)));
    }

    #[test]
    fn test_expand_all_marks_every_reachable_node() {
        let tree = catalog();
        let mut state = ExpansionState::default();
        state.expand_all(tree.roots(), tree.nodes());
        assert_eq!(state.expanded_count(), tree.nodes().len());

        state.collapse_all();
        assert_eq!(state.expanded_count(), 0);
    }

    #[test]
    fn test_reloaded_tree_stays_expanded_while_open() {
        let tree = catalog();
        let open = ExpansionState::for_tree_open(&tree, true);
        assert_eq!(open.expanded_count(), tree.nodes().len());
        assert!(open.is_expanded(id(11)));

        let closed = ExpansionState::for_tree_open(&tree, false);
        assert_eq!(closed, ExpansionState::for_tree(&tree));
        assert!(!closed.is_expanded(id(11)));
    }

    #[test]
    fn test_expand_all_skips_unreachable() {
        let tree = catalog();
        let mut state = ExpansionState::default();
        state.expand_all(&[id(20)], tree.nodes());
        assert!(state.is_expanded(id(21)));
        assert!(!state.is_expanded(id(10)));
    }
}
