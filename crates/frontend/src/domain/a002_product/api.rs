use contracts::domain::a002_product::{Product, ProductListQuery};
use contracts::shared::list::PaginatedResponse;

use crate::shared::api_utils::ApiClient;

/// Path with the query string for one server-side page of products.
pub fn products_path(query: &ProductListQuery) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;
    Ok(format!("/products?{}", qs))
}

/// Fetch one page of products
pub async fn fetch_products(
    api: &ApiClient,
    query: &ProductListQuery,
) -> Result<PaginatedResponse<Product>, String> {
    api.get_json(&products_path(query)?).await
}
