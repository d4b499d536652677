use crate::shared::tree::{CategoryTree, NodeId, NodeMap, ParentIndex, TreeNode};
use serde::{Deserialize, Serialize};

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: NodeId,
    pub name: String,
    /// `null`, missing and `[]` all mean "leaf".
    #[serde(default)]
    pub children: Option<Vec<NodeId>>,
}

/// GET /api/categories/tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryTreeResponse {
    #[serde(default)]
    pub roots: Vec<NodeId>,
    pub categories: Vec<CategoryDto>,
}

// ============================================================================
// Mapping
// ============================================================================

impl From<CategoryDto> for TreeNode {
    fn from(dto: CategoryDto) -> Self {
        TreeNode {
            id: dto.id,
            name: dto.name,
            children: dto.children.unwrap_or_default(),
        }
    }
}

impl From<CategoryTreeResponse> for CategoryTree {
    /// When the backend omits `roots`, every category nobody lists as a
    /// child becomes a root (in id order).
    fn from(resp: CategoryTreeResponse) -> Self {
        let nodes: NodeMap = resp
            .categories
            .into_iter()
            .map(|dto| (dto.id, TreeNode::from(dto)))
            .collect();

        let roots = if resp.roots.is_empty() {
            let parents = ParentIndex::build(&nodes);
            nodes
                .keys()
                .filter(|id| parents.parent_of(**id).is_none())
                .copied()
                .collect()
        } else {
            resp.roots
        };

        CategoryTree::new(nodes, roots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_from_response() {
        let json = r#"{
            "roots": [1],
            "categories": [
                {"id": 1, "name": "Продукты", "children": [2, 3]},
                {"id": 2, "name": "Молочные", "children": null},
                {"id": 3, "name": "Напитки"}
            ]
        }"#;
        let resp: CategoryTreeResponse = serde_json::from_str(json).unwrap();
        let tree = CategoryTree::from(resp);
        assert_eq!(tree.roots(), &[NodeId(1)]);
        assert_eq!(tree.children_of(NodeId(1)), &[NodeId(2), NodeId(3)]);
        assert!(tree.children_of(NodeId(3)).is_empty());
        assert_eq!(tree.parent_of(NodeId(3)), Some(NodeId(1)));
    }

    #[test]
    fn test_roots_derived_when_missing() {
        let json = r#"{"categories": [
            {"id": 5, "name": "B", "children": [6]},
            {"id": 6, "name": "B1"},
            {"id": 2, "name": "A"}
        ]}"#;
        let resp: CategoryTreeResponse = serde_json::from_str(json).unwrap();
        let tree = CategoryTree::from(resp);
        assert_eq!(tree.roots(), &[NodeId(2), NodeId(5)]);
    }
}
