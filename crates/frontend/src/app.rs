use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::{api_base, ApiClient};
use crate::shared::config::read_config;
use crate::system::auth::context::AuthProvider;
use crate::system::auth::storage::create_session;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = read_config();
    let session = create_session(&config.session);
    let base = api_base(&config.api);
    log::info!("app: api base {}", base);

    provide_context(ApiClient::new(base, session));
    provide_context(config);

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
        </ConfigProvider>
    }
}
