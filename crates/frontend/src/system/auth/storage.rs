use contracts::shared::config::{SessionBackend, SessionConfig};
use contracts::system::session::{tenant_from_host, MemorySessionStore, Session, SessionStore};
use wasm_bindgen::JsCast;
use web_sys::window;

/// Session backend chosen from `[session] backend` in the UI config.
#[derive(Clone, Debug)]
pub enum BrowserStore {
    Local,
    Cookie,
    Memory(MemorySessionStore),
}

pub type AppSession = Session<BrowserStore>;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_html_document() -> Option<web_sys::HtmlDocument> {
    window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Value of `key` in a `document.cookie` string.
pub fn cookie_value(cookies: &str, key: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| urlencoding::decode(name).map(|n| n == key).unwrap_or(false))
        .and_then(|(_, value)| urlencoding::decode(value).ok().map(|v| v.into_owned()))
}

fn cookie_assignment(key: &str, value: &str, max_age: Option<u32>) -> String {
    let mut cookie = format!(
        "{}={}; path=/; SameSite=Strict",
        urlencoding::encode(key),
        urlencoding::encode(value)
    );
    if let Some(age) = max_age {
        cookie.push_str(&format!("; max-age={}", age));
    }
    cookie
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local => get_local_storage()?.get_item(key).ok()?,
            BrowserStore::Cookie => cookie_value(&get_html_document()?.cookie().ok()?, key),
            BrowserStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self {
            BrowserStore::Local => {
                if let Some(storage) = get_local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
            BrowserStore::Cookie => {
                if let Some(doc) = get_html_document() {
                    let _ = doc.set_cookie(&cookie_assignment(key, value, None));
                }
            }
            BrowserStore::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            BrowserStore::Local => {
                if let Some(storage) = get_local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
            BrowserStore::Cookie => {
                if let Some(doc) = get_html_document() {
                    let _ = doc.set_cookie(&cookie_assignment(key, "", Some(0)));
                }
            }
            BrowserStore::Memory(store) => store.remove(key),
        }
    }
}

fn current_hostname() -> Option<String> {
    window()?.location().hostname().ok()
}

/// Builds the session for the host the app was opened on.
pub fn create_session(config: &SessionConfig) -> AppSession {
    let store = match config.backend {
        SessionBackend::Local if get_local_storage().is_some() => BrowserStore::Local,
        SessionBackend::Local => {
            log::warn!("localStorage unavailable, keeping session in memory");
            BrowserStore::Memory(MemorySessionStore::new())
        }
        SessionBackend::Cookie => BrowserStore::Cookie,
        SessionBackend::Memory => BrowserStore::Memory(MemorySessionStore::new()),
    };
    let tenant = current_hostname().and_then(|h| tenant_from_host(&h));
    log::debug!("session: backend={:?} tenant={:?}", config.backend, tenant);

    Session::new(store, tenant, config.key_prefix.clone())
}
