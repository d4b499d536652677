use super::{CategoryTree, ExpansionState, NodeId, SelectionSet};
use std::collections::HashSet;

/// Строка плоского представления дерева для отрисовки.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub id: NodeId,
    pub depth: usize,
    pub label: String,
    pub has_children: bool,
    pub expanded: bool,
}

impl CategoryTree {
    /// Depth-first flattening of the tree in children order.
    ///
    /// Without a filter only expanded nodes are descended into. With a
    /// filter every branch leading to a match is shown open and all other
    /// nodes are hidden.
    pub fn visible_rows(
        &self,
        expansion: &ExpansionState,
        filter: Option<&HashSet<NodeId>>,
    ) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        let mut seen = HashSet::new();
        let mut stack: Vec<(NodeId, usize)> = self.roots().iter().rev().map(|id| (*id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(allowed) = filter {
                if !allowed.contains(&id) {
                    continue;
                }
            }

            let children = self.children_of(id);
            let expanded = filter.is_some() || expansion.is_expanded(id);
            rows.push(VisibleRow {
                id,
                depth,
                label: self.label(id),
                has_children: !children.is_empty(),
                expanded,
            });

            if expanded {
                stack.extend(children.iter().rev().map(|child| (*child, depth + 1)));
            }
        }

        rows
    }

    /// Ids whose name contains `query` (case-insensitive) plus their
    /// ancestors. `None` means no filter is active.
    pub fn matching_ids(&self, query: &str) -> Option<HashSet<NodeId>> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let needle = query.to_lowercase();
        let mut matched = HashSet::new();
        for node in self.nodes().values() {
            if node.name.to_lowercase().contains(&needle) {
                matched.insert(node.id);
                matched.extend(self.ancestors_of(node.id));
            }
        }
        Some(matched)
    }

    /// Текст на кнопке контрола.
    pub fn selection_summary(&self, selection: &SelectionSet) -> String {
        match selection.len() {
            0 => "Все категории".to_string(),
            1 => selection
                .iter()
                .next()
                .map(|id| self.label(*id))
                .unwrap_or_default(),
            n => format!("Выбрано: {}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    fn ids(rows: &[VisibleRow]) -> Vec<i64> {
        rows.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn test_visible_rows_follow_expansion() {
        let tree = catalog();
        let mut state = ExpansionState::for_tree(&tree);
        assert_eq!(ids(&tree.visible_rows(&state, None)), vec![10, 11, 12, 20, 21]);

        state.toggle_expand(id(11));
        let rows = tree.visible_rows(&state, None);
        assert_eq!(ids(&rows), vec![10, 11, 13, 14, 12, 20, 21]);
        assert_eq!(rows[2].depth, 2);
        assert!(rows[1].has_children);
        assert!(!rows[2].has_children);
    }

    #[test]
    fn test_filter_keeps_path_to_match() {
        let tree = catalog();
        let filter = tree.matching_ids("смарт").unwrap();
        let rows = tree.visible_rows(&ExpansionState::default(), Some(&filter));
        assert_eq!(ids(&rows), vec![10, 11, 13]);
        assert!(rows.iter().all(|r| r.expanded));
    }

    #[test]
    fn test_blank_query_is_no_filter() {
        assert!(catalog().matching_ids("   ").is_none());
        assert_eq!(catalog().matching_ids("нет такого"), Some(HashSet::new()));
    }

    #[test]
    fn test_selection_summary() {
        let tree = catalog();
        let mut selection = SelectionSet::new();
        assert_eq!(tree.selection_summary(&selection), "Все категории");
        selection.insert(id(21));
        assert_eq!(tree.selection_summary(&selection), "Обувь");
        selection.insert(id(20));
        assert_eq!(tree.selection_summary(&selection), "Выбрано: 2");
    }
}
