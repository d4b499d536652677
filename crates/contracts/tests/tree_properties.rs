use contracts::shared::tree::{is_selected, CategoryTree, NodeId, SelectionSet, TreeNode};
use proptest::prelude::*;
use proptest::sample::Index;

/// Random forest: node `i` either is a root or hangs under some `j < i`.
fn forest() -> impl Strategy<Value = CategoryTree> {
    prop::collection::vec(prop::option::of(any::<Index>()), 1..40).prop_map(|parents| {
        let mut nodes: Vec<TreeNode> = (0..parents.len())
            .map(|i| TreeNode::new(i as i64, format!("n{}", i), vec![]))
            .collect();
        let mut roots = Vec::new();
        for (i, parent) in parents.iter().enumerate() {
            match parent {
                Some(idx) if i > 0 => {
                    let p = idx.index(i);
                    nodes[p].children.push(NodeId(i as i64));
                }
                _ => roots.push(NodeId(i as i64)),
            }
        }
        CategoryTree::from_nodes(nodes, roots)
    })
}

fn tree_and_selection() -> impl Strategy<Value = (CategoryTree, SelectionSet, Index)> {
    (forest(), prop::collection::vec(any::<bool>(), 40), any::<Index>()).prop_map(
        |(tree, picks, target)| {
            let selection = tree
                .nodes()
                .keys()
                .zip(picks)
                .filter(|(_, pick)| *pick)
                .map(|(id, _)| *id)
                .collect();
            (tree, selection, target)
        },
    )
}

fn pick(tree: &CategoryTree, target: &Index) -> NodeId {
    let ids: Vec<NodeId> = tree.nodes().keys().copied().collect();
    ids[target.index(ids.len())]
}

proptest! {
    #[test]
    fn selecting_pulls_in_every_ancestor((tree, selection, target) in tree_and_selection()) {
        let id = pick(&tree, &target);
        prop_assume!(!is_selected(id, &selection));

        let next = tree.toggle(id, &selection);
        prop_assert!(is_selected(id, &next));
        for ancestor in tree.ancestors_of(id) {
            prop_assert!(is_selected(ancestor, &next));
        }
    }

    #[test]
    fn deselecting_drops_every_descendant((tree, selection, target) in tree_and_selection()) {
        let id = pick(&tree, &target);
        prop_assume!(is_selected(id, &selection));

        let next = tree.toggle(id, &selection);
        prop_assert!(!is_selected(id, &next));
        for descendant in tree.descendants_of(id) {
            prop_assert!(!is_selected(descendant, &next));
        }
    }

    #[test]
    fn toggling_from_empty_keeps_selection_closed((tree, targets) in (forest(), prop::collection::vec(any::<Index>(), 1..20))) {
        let mut selection = SelectionSet::new();
        for target in &targets {
            selection = tree.toggle(pick(&tree, target), &selection);
            for id in &selection {
                if let Some(parent) = tree.parent_of(*id) {
                    prop_assert!(is_selected(parent, &selection));
                }
            }
        }
    }

    #[test]
    fn toggle_only_touches_path_or_subtree((tree, selection, target) in tree_and_selection()) {
        let id = pick(&tree, &target);
        let next = tree.toggle(id, &selection);

        let mut touched: Vec<NodeId> = vec![id];
        touched.extend(tree.ancestors_of(id));
        touched.extend(tree.descendants_of(id));
        for other in tree.nodes().keys() {
            if !touched.contains(other) {
                prop_assert_eq!(is_selected(*other, &selection), is_selected(*other, &next));
            }
        }
    }
}

#[test]
fn double_toggle_can_differ_from_start() {
    let tree = CategoryTree::from_nodes(
        vec![
            TreeNode::new(1, "A", vec![NodeId(2)]),
            TreeNode::new(2, "B", vec![]),
        ],
        vec![NodeId(1)],
    );
    let start = SelectionSet::new();
    let round_trip = tree.toggle(NodeId(2), &tree.toggle(NodeId(2), &start));
    assert_ne!(round_trip, start);
    assert!(is_selected(NodeId(1), &round_trip));
}
