use super::{CategoryTree, NodeId};
use std::collections::BTreeSet;

/// Currently checked nodes. Ordered so that query strings and summaries
/// built from it are stable.
pub type SelectionSet = BTreeSet<NodeId>;

pub fn is_selected(id: NodeId, selection: &SelectionSet) -> bool {
    selection.contains(&id)
}

impl CategoryTree {
    /// The only selection transition the UI uses.
    ///
    /// Selecting a node also selects its whole path to the root; deselecting
    /// a node drops its subtree. A selected parent never forces its children
    /// in, so partial selection under a parent stays possible.
    ///
    /// Two toggles of the same node are not an identity: ancestors added by
    /// the first toggle (or descendants removed by it) stay that way.
    pub fn toggle(&self, id: NodeId, current: &SelectionSet) -> SelectionSet {
        let mut next = current.clone();
        if next.contains(&id) {
            next.remove(&id);
            for child in self.descendants_of(id) {
                next.remove(&child);
            }
        } else {
            next.insert(id);
            next.extend(self.ancestors_of(id));
        }
        next
    }

    /// Checks every id not yet selected, one toggle at a time.
    pub fn select_many(&self, ids: &[NodeId], current: &SelectionSet) -> SelectionSet {
        ids.iter().fold(current.clone(), |acc, id| {
            if is_selected(*id, &acc) {
                acc
            } else {
                self.toggle(*id, &acc)
            }
        })
    }

    /// Selected ids that are not present in the tree (stale after a reload).
    pub fn unknown_selected(&self, selection: &SelectionSet) -> Vec<NodeId> {
        selection
            .iter()
            .filter(|id| self.node(**id).is_none() && self.parent_of(**id).is_none())
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    fn set(ids: &[i64]) -> SelectionSet {
        ids.iter().map(|v| id(*v)).collect()
    }

    #[test]
    fn test_select_leaf_selects_path() {
        let tree = chain();
        assert_eq!(tree.toggle(id(3), &SelectionSet::new()), set(&[1, 2, 3]));
    }

    #[test]
    fn test_deselect_middle_drops_subtree_keeps_ancestor() {
        let tree = chain();
        assert_eq!(tree.toggle(id(2), &set(&[1, 2, 3])), set(&[1]));
    }

    #[test]
    fn test_selecting_parent_does_not_pull_children() {
        let tree = catalog();
        let next = tree.toggle(id(11), &SelectionSet::new());
        assert_eq!(next, set(&[10, 11]));
        assert!(!is_selected(id(13), &next));
    }

    #[test]
    fn test_double_toggle_is_not_identity() {
        let tree = chain();
        let start = SelectionSet::new();
        let once = tree.toggle(id(3), &start);
        let twice = tree.toggle(id(3), &once);
        assert_eq!(twice, set(&[1, 2]));
        assert_ne!(twice, start);

        let full = set(&[1, 2, 3]);
        let back = tree.toggle(id(2), &tree.toggle(id(2), &full));
        assert_eq!(back, set(&[1, 2]));
    }

    #[test]
    fn test_select_many_keeps_existing() {
        let tree = catalog();
        let next = tree.select_many(&[id(13), id(21)], &set(&[12]));
        assert_eq!(next, set(&[10, 11, 12, 13, 20, 21]));
    }

    #[test]
    fn test_unknown_selected() {
        let tree = catalog();
        assert_eq!(tree.unknown_selected(&set(&[10, 500])), vec![id(500)]);
    }
}
