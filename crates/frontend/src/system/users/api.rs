use contracts::system::users::User;

use crate::shared::api_utils::ApiClient;

/// Fetch all users (admin only). Paging and search happen on the client.
pub async fn fetch_users(api: &ApiClient) -> Result<Vec<User>, String> {
    api.get_json("/system/users").await
}
