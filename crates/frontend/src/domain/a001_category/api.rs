use contracts::domain::a001_category::CategoryTreeResponse;
use contracts::shared::tree::CategoryTree;

use crate::shared::api_utils::ApiClient;

/// Fetch the whole category hierarchy.
///
/// A malformed hierarchy (second parent, cycle, unknown root) is still
/// usable for selection, so it is only logged.
pub async fn fetch_category_tree(api: &ApiClient) -> Result<CategoryTree, String> {
    let response: CategoryTreeResponse = api.get_json("/categories/tree").await?;
    let tree = CategoryTree::from(response);
    if let Err(e) = tree.validate() {
        log::warn!("categories: {}", e);
    }
    log::debug!("categories: {} nodes, {} roots", tree.nodes().len(), tree.roots().len());
    Ok(tree)
}
