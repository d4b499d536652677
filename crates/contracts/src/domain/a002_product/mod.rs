use crate::shared::tree::{NodeId, SelectionSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    #[serde(default)]
    pub category_ids: Vec<NodeId>,
    pub is_active: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// ============================================================================
// Query
// ============================================================================

/// GET /api/products query. Serialized with serde_qs on the frontend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListQuery {
    pub page: usize,
    pub page_size: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_ids: Vec<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ProductListQuery {
    pub fn new(page: usize, page_size: usize, categories: &SelectionSet, search: &str) -> Self {
        let search = search.trim();
        Self {
            page,
            page_size,
            category_ids: categories.iter().copied().collect(),
            search: if search.is_empty() {
                None
            } else {
                Some(search.to_string())
            },
        }
    }
}
