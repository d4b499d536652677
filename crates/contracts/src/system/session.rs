//! Tenant-scoped session storage.
//!
//! Tokens are kept under keys namespaced by the tenant (subdomain), so two
//! company instances opened in the same browser do not overwrite each other.
//! The backing store is pluggable: browser localStorage or cookies in the app,
//! [`MemorySessionStore`] in tests.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, RwLock};

pub const ACCESS_TOKEN_KEY: &str = "auth_access_token";
pub const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";
pub const LAST_USERNAME_KEY: &str = "last_username";

/// Key/value persistence used by [`Session`].
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Clones share the same map, like every handle to localStorage does.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.write() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut items) = self.items.write() {
            items.remove(key);
        }
    }
}

/// Tenant = first label of the host name.
///
/// `acme.admin.example.com` -> `acme`, `acme.localhost:8080` -> `acme`.
/// Bare domains, `www`, `localhost` and IP addresses have no tenant.
pub fn tenant_from_host(host: &str) -> Option<String> {
    let host = host.trim().to_lowercase();
    let host = host.split(':').next().unwrap_or_default();
    if host.is_empty() || host.parse::<IpAddr>().is_ok() {
        return None;
    }

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    let has_subdomain = match labels.last() {
        Some(&"localhost") => labels.len() >= 2,
        _ => labels.len() >= 3,
    };
    if !has_subdomain {
        return None;
    }

    match labels[0] {
        "www" => None,
        tenant => Some(tenant.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
    tenant: Option<String>,
    prefix: String,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S, tenant: Option<String>, prefix: impl Into<String>) -> Self {
        Self {
            store,
            tenant,
            prefix: prefix.into(),
        }
    }

    pub fn tenant(&self) -> Option<&str> {
        self.tenant.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn key(&self, name: &str) -> String {
        match &self.tenant {
            Some(tenant) => format!("{}{}:{}", self.prefix, tenant, name),
            None => format!("{}{}", self.prefix, name),
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.store
            .get(&self.key(ACCESS_TOKEN_KEY))
            .filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store
            .get(&self.key(REFRESH_TOKEN_KEY))
            .filter(|t| !t.is_empty())
    }

    pub fn save_access_token(&self, token: &str) {
        self.store.set(&self.key(ACCESS_TOKEN_KEY), token);
    }

    pub fn save_tokens(&self, access_token: &str, refresh_token: &str) {
        self.save_access_token(access_token);
        self.store.set(&self.key(REFRESH_TOKEN_KEY), refresh_token);
    }

    /// Clear all authentication tokens of this tenant
    pub fn clear_tokens(&self) {
        self.store.remove(&self.key(ACCESS_TOKEN_KEY));
        self.store.remove(&self.key(REFRESH_TOKEN_KEY));
    }

    pub fn last_username(&self) -> Option<String> {
        self.store.get(&self.key(LAST_USERNAME_KEY))
    }

    pub fn remember_username(&self, username: &str) {
        self.store.set(&self.key(LAST_USERNAME_KEY), username);
    }

    pub fn auth_header(&self) -> Option<String> {
        self.access_token().map(|t| format!("Bearer {}", t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_from_host() {
        assert_eq!(tenant_from_host("acme.admin.example.com").as_deref(), Some("acme"));
        assert_eq!(tenant_from_host("ACME.localhost:8080").as_deref(), Some("acme"));
        assert_eq!(tenant_from_host("example.com"), None);
        assert_eq!(tenant_from_host("localhost"), None);
        assert_eq!(tenant_from_host("www.example.com"), None);
        assert_eq!(tenant_from_host("127.0.0.1:3000"), None);
        assert_eq!(tenant_from_host(""), None);
    }

    #[test]
    fn test_tokens_are_namespaced_by_tenant() {
        let store = MemorySessionStore::new();
        let acme = Session::new(store.clone(), Some("acme".into()), "admin.");
        let globex = Session::new(store.clone(), Some("globex".into()), "admin.");

        acme.save_tokens("a1", "r1");
        assert_eq!(acme.access_token().as_deref(), Some("a1"));
        assert_eq!(globex.access_token(), None);
        assert_eq!(store.get("admin.acme:auth_access_token").as_deref(), Some("a1"));

        acme.clear_tokens();
        assert_eq!(acme.access_token(), None);
        assert_eq!(acme.refresh_token(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_no_tenant_and_username() {
        let session = Session::new(MemorySessionStore::new(), None, "admin.");
        session.remember_username("admin");
        session.save_access_token("tok");
        assert_eq!(session.last_username().as_deref(), Some("admin"));
        assert_eq!(session.auth_header().as_deref(), Some("Bearer tok"));
        assert_eq!(session.store().get("admin.auth_access_token").as_deref(), Some("tok"));

        session.clear_tokens();
        assert_eq!(session.last_username().as_deref(), Some("admin"));
    }

    #[test]
    fn test_empty_token_is_absent() {
        let session = Session::new(MemorySessionStore::new(), None, "");
        session.save_access_token("");
        assert_eq!(session.access_token(), None);
    }
}
