use crate::domain::a002_product::ui::list::ProductsList;
use crate::shared::api_utils::use_api;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::auth::guard::RequireAuth;
use crate::system::users::ui::list::UsersListPage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use web_sys::window;

/// Раздел приложения, адресуется через `?active=<key>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Products,
    Users,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Products, Section::Users];

    pub fn key(self) -> &'static str {
        match self {
            Section::Products => "products",
            Section::Users => "users",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Products => "Товары",
            Section::Users => "Пользователи",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Section named in a location search string like "?active=users".
    pub fn from_search(search: &str) -> Option<Self> {
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        params.get("active").and_then(|key| Self::from_key(key))
    }

    pub fn to_search(self) -> String {
        let query = serde_qs::to_string(&HashMap::from([("active", self.key())]))
            .unwrap_or_default();
        format!("?{}", query)
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Keeps the address bar in sync with the active section.
fn sync_url(active: RwSignal<Section>) {
    Effect::new(move |_| {
        let new_url = active.get().to_search();
        if current_search() != new_url {
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        }
    });
}

#[component]
fn TopHeader(active: RwSignal<Section>) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        let client = api.get_value();
        spawn_local(async move {
            do_logout(&client, set_auth_state).await;
        });
    };

    let tenant = api.with_value(|a| a.session().tenant().map(str::to_string));

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Каталог"</span>
                {tenant.map(|t| view! { <span class="top-header__tenant">{t}</span> })}
            </div>

            <nav class="top-header__nav">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let icon_name = section.key();
                        view! {
                            <button
                                class="top-header__nav-item"
                                class:top-header__nav-item--active=move || active.get() == section
                                on:click=move |_| active.set(section)
                            >
                                {icon(icon_name)}
                                <span>{section.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>
                        {move || auth_state.get().user_info
                            .map(|u| u.display_name().to_string())
                            .unwrap_or_else(|| "Гость".to_string())}
                    </span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Выход">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let active = RwSignal::new(Section::from_search(&current_search()).unwrap_or(Section::Products));
    sync_url(active);

    view! {
        <div class="app-shell">
            <TopHeader active=active />
            <main class="app-shell__content">
                {move || match active.get() {
                    Section::Products => view! { <ProductsList /> }.into_any(),
                    Section::Users => view! { <UsersListPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_search() {
        assert_eq!(Section::from_search("?active=users"), Some(Section::Users));
        assert_eq!(Section::from_search("active=products"), Some(Section::Products));
        assert_eq!(Section::from_search("?active=reports"), None);
        assert_eq!(Section::from_search(""), None);
    }

    #[test]
    fn test_section_to_search() {
        for section in Section::ALL {
            assert_eq!(Section::from_search(&section.to_search()), Some(section));
        }
    }
}
