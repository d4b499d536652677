//! Иерархия категорий: индекс родителей, обходы, выбор и раскрытие узлов.
//!
//! Узлы приходят с бэкенда готовыми и здесь не создаются и не удаляются.
//! Все обходы защищены множеством посещённых узлов, поэтому некорректные
//! данные (цикл, узел под двумя родителями) не приводят к зависанию.

mod expansion;
mod selection;
mod view;

pub use expansion::ExpansionState;
pub use selection::{is_selected, SelectionSet};
pub use view::VisibleRow;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Идентификатор узла дерева (категории).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub i64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(NodeId)
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        NodeId(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub children: Vec<NodeId>,
}

impl TreeNode {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, children: Vec<NodeId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children,
        }
    }
}

/// Узлы по идентификатору. Упорядоченная карта даёт детерминированный
/// порядок построения индекса родителей.
pub type NodeMap = BTreeMap<NodeId, TreeNode>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node {child} is listed under both {first} and {second}")]
    MultipleParents {
        child: NodeId,
        first: NodeId,
        second: NodeId,
    },
    #[error("cycle detected through node {0}")]
    Cycle(NodeId),
    #[error("root {0} is not present in the node map")]
    UnknownRoot(NodeId),
}

/// Обратный индекс: ребёнок -> родитель.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentIndex {
    parents: HashMap<NodeId, NodeId>,
}

impl ParentIndex {
    /// Scans every node's children list once. When a child shows up under
    /// several parents the parent processed last (highest id) wins.
    pub fn build(nodes: &NodeMap) -> Self {
        let mut parents = HashMap::new();
        for (parent_id, node) in nodes {
            for child in &node.children {
                if let Some(previous) = parents.insert(*child, *parent_id) {
                    if previous != *parent_id {
                        log::warn!(
                            "tree: node {} listed under {} and {}, keeping {}",
                            child,
                            previous,
                            parent_id,
                            parent_id
                        );
                    }
                }
            }
        }
        Self { parents }
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Breadth-first set of every node reachable from `roots`, roots included.
pub fn reachable(roots: &[NodeId], nodes: &NodeMap) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut queue: VecDeque<NodeId> = roots.iter().copied().collect();

    while let Some(id) = queue.pop_front() {
        if !seen.insert(id) {
            continue;
        }
        out.push(id);
        if let Some(node) = nodes.get(&id) {
            queue.extend(node.children.iter().copied());
        }
    }

    out
}

/// Дерево категорий вместе с корнями и готовым индексом родителей.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTree {
    nodes: NodeMap,
    roots: Vec<NodeId>,
    parents: ParentIndex,
}

impl CategoryTree {
    pub fn new(nodes: NodeMap, roots: Vec<NodeId>) -> Self {
        let parents = ParentIndex::build(&nodes);
        Self {
            nodes,
            roots,
            parents,
        }
    }

    pub fn from_nodes(nodes: impl IntoIterator<Item = TreeNode>, roots: Vec<NodeId>) -> Self {
        let nodes = nodes.into_iter().map(|n| (n.id, n)).collect();
        Self::new(nodes, roots)
    }

    pub fn nodes(&self) -> &NodeMap {
        &self.nodes
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parents.parent_of(id)
    }

    /// Children of `id`; a node missing from the map is a leaf.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Display name, or the raw id for nodes referenced but not loaded.
    pub fn label(&self, id: NodeId) -> String {
        match self.nodes.get(&id) {
            Some(node) => node.name.clone(),
            None => id.to_string(),
        }
    }

    /// Ancestors from the direct parent up to the root, nearest first.
    pub fn ancestors_of(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut current = id;

        while let Some(parent) = self.parents.parent_of(current) {
            if !seen.insert(parent) {
                log::warn!("tree: cycle while walking ancestors of {}", id);
                break;
            }
            out.push(parent);
            current = parent;
        }

        out
    }

    /// Breadth-first descendants of `id`, each reported once.
    pub fn descendants_of(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut queue: VecDeque<NodeId> = self.children_of(id).iter().copied().collect();

        while let Some(next) = queue.pop_front() {
            if !seen.insert(next) {
                continue;
            }
            out.push(next);
            queue.extend(self.children_of(next).iter().copied());
        }

        out
    }

    /// Проверка формы данных: корни существуют, у каждого узла не больше
    /// одного родителя, циклов нет.
    pub fn validate(&self) -> Result<(), TreeError> {
        if let Some(root) = self.roots.iter().find(|r| !self.nodes.contains_key(*r)) {
            return Err(TreeError::UnknownRoot(*root));
        }

        let mut first_parent: HashMap<NodeId, NodeId> = HashMap::new();
        for (parent_id, node) in &self.nodes {
            for child in &node.children {
                match first_parent.get(child) {
                    Some(first) if first != parent_id => {
                        return Err(TreeError::MultipleParents {
                            child: *child,
                            first: *first,
                            second: *parent_id,
                        });
                    }
                    _ => {
                        first_parent.insert(*child, *parent_id);
                    }
                }
            }
        }

        for id in self.nodes.keys() {
            let mut seen = HashSet::from([*id]);
            let mut current = *id;
            while let Some(parent) = self.parents.parent_of(current) {
                if !seen.insert(parent) {
                    return Err(TreeError::Cycle(parent));
                }
                current = parent;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn id(v: i64) -> NodeId {
        NodeId(v)
    }

    /// A(1) -> B(2) -> C(3)
    pub fn chain() -> CategoryTree {
        CategoryTree::from_nodes(
            vec![
                TreeNode::new(1, "A", vec![id(2)]),
                TreeNode::new(2, "B", vec![id(3)]),
                TreeNode::new(3, "C", vec![]),
            ],
            vec![id(1)],
        )
    }

    /// Электроника(10): Телефоны(11) [Смартфоны(13), Кнопочные(14)], Ноутбуки(12)
    /// Одежда(20): Обувь(21)
    pub fn catalog() -> CategoryTree {
        CategoryTree::from_nodes(
            vec![
                TreeNode::new(10, "Электроника", vec![id(11), id(12)]),
                TreeNode::new(11, "Телефоны", vec![id(13), id(14)]),
                TreeNode::new(12, "Ноутбуки", vec![]),
                TreeNode::new(13, "Смартфоны", vec![]),
                TreeNode::new(14, "Кнопочные", vec![]),
                TreeNode::new(20, "Одежда", vec![id(21)]),
                TreeNode::new(21, "Обувь", vec![]),
            ],
            vec![id(10), id(20)],
        )
    }
}
