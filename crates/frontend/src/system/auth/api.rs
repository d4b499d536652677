use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::api_utils::ApiClient;

/// Login with username and password. The tenant comes from the session.
pub async fn login(
    api: &ApiClient,
    username: String,
    password: String,
) -> Result<LoginResponse, String> {
    let request = LoginRequest {
        username,
        password,
        tenant: api.session().tenant().map(str::to_string),
    };
    api.post_json("/system/auth/login", &request).await
}

/// Refresh access token using refresh token
pub async fn refresh_token(
    api: &ApiClient,
    refresh_token: String,
) -> Result<RefreshResponse, String> {
    api.post_json("/system/auth/refresh", &RefreshRequest { refresh_token })
        .await
}

/// Logout (revoke refresh token)
pub async fn logout(api: &ApiClient, refresh_token: String) -> Result<(), String> {
    api.post("/system/auth/logout", &RefreshRequest { refresh_token })
        .await
}

/// Get current user info for the stored access token
pub async fn get_current_user(api: &ApiClient) -> Result<UserInfo, String> {
    api.get_json("/system/auth/me").await
}
