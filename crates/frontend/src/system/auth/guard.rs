use leptos::prelude::*;
use thaw::*;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Component that requires authentication.
/// Shows a spinner while a stored session is checked, the login page otherwise.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=move || {
                if auth_state.get().restoring {
                    view! {
                        <div class="page page--centered">
                            <Spinner />
                        </div>
                    }.into_any()
                } else {
                    view! { <LoginPage /> }.into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Component that requires admin privileges
/// Shows fallback if not admin
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_admin()
            fallback=|| view! { <div class="warning-box">"Доступ запрещён: требуются права администратора."</div> }
        >
            {children()}
        </Show>
    }
}
