use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::api_utils::{use_api, ApiClient};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// A stored token is being checked against the backend.
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user_info.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }
}

/// Validate stored token, refresh it once if rejected, clear everything
/// if that fails too.
async fn restore_session(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    let session = api.session();
    if session.access_token().is_none() {
        return;
    }

    let user_info = match api::get_current_user(api).await {
        Ok(user_info) => Some(user_info),
        Err(e) => {
            log::info!("auth: stored token rejected ({}), trying refresh", e);
            match session.refresh_token() {
                Some(refresh_token) => match api::refresh_token(api, refresh_token).await {
                    Ok(response) => {
                        session.save_access_token(&response.access_token);
                        api::get_current_user(api)
                            .await
                            .map_err(|e| log::warn!("auth: user lookup after refresh failed: {}", e))
                            .ok()
                    }
                    Err(e) => {
                        log::warn!("auth: refresh failed: {}", e);
                        None
                    }
                },
                None => None,
            }
        }
    };

    match user_info {
        Some(user_info) => {
            log::debug!("auth: session restored for {}", user_info.username);
            set_auth_state.set(AuthState {
                access_token: session.access_token(),
                user_info: Some(user_info),
                restoring: false,
            });
        }
        None => {
            session.clear_tokens();
            set_auth_state.set(AuthState::default());
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let api = use_api();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: api.session().access_token().is_some(),
        ..AuthState::default()
    });

    // Try to restore session from storage on mount
    spawn_local(async move {
        restore_session(&api, set_auth_state).await;
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login and store tokens for the current tenant
pub async fn do_login(
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(api, username.clone(), password).await?;

    let session = api.session();
    session.save_tokens(&response.access_token, &response.refresh_token);
    session.remember_username(&username);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
        restoring: false,
    });

    Ok(())
}

/// Helper: Perform logout. Local tokens are dropped even if the backend call fails.
pub async fn do_logout(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = api.session().refresh_token() {
        if let Err(e) = api::logout(api, refresh_token).await {
            log::warn!("auth: logout request failed: {}", e);
        }
    }

    api.session().clear_tokens();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_flags() {
        let mut state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());

        state.access_token = Some("t".into());
        state.user_info = Some(UserInfo {
            id: "1".into(),
            username: "admin".into(),
            full_name: None,
            email: None,
            is_admin: true,
        });
        assert!(state.is_authenticated());
        assert!(state.is_admin());
    }
}
