//! API utilities for frontend-backend communication
//!
//! [`ApiClient`] carries the base URL and the session, and adds the
//! `Authorization` and `X-Tenant` headers to every request. Responses are
//! decoded straight into the typed contracts; there is no shape probing here.

use contracts::shared::config::ApiConfig;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage::AppSession;

/// Get the base URL for API requests
///
/// Same protocol and host as the page, backend port and prefix from config:
/// "http://acme.localhost:3000/api". Empty host part if window is not available.
pub fn api_base(config: &ApiConfig) -> String {
    let Some(window) = web_sys::window() else {
        return config.prefix.clone();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    join_base(&protocol, &hostname, config.port, &config.prefix)
}

fn join_base(protocol: &str, hostname: &str, port: u16, prefix: &str) -> String {
    format!(
        "{}//{}:{}/{}",
        protocol,
        hostname,
        port,
        prefix.trim_matches('/')
    )
    .trim_end_matches('/')
    .to_string()
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    session: AppSession,
}

impl ApiClient {
    pub fn new(base: String, session: AppSession) -> Self {
        Self { base, session }
    }

    pub fn session(&self) -> &AppSession {
        &self.session
    }

    /// Build a full API URL from a path like "/products?page=1"
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    fn with_headers(&self, mut builder: RequestBuilder) -> RequestBuilder {
        builder = builder.header("Accept", "application/json");
        if let Some(auth) = self.session.auth_header() {
            builder = builder.header("Authorization", &auth);
        }
        if let Some(tenant) = self.session.tenant() {
            builder = builder.header("X-Tenant", tenant);
        }
        builder
    }

    async fn decode<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, String> {
        if !response.ok() {
            return Err(format!("{} failed: {}", what, response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self
            .with_headers(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        Self::decode(response, path).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .with_headers(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        Self::decode(response, path).await
    }

    /// POST whose response body is ignored
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), String> {
        let response = self
            .with_headers(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        if !response.ok() {
            return Err(format!("{} failed: {}", path, response.status()));
        }
        Ok(())
    }
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::BrowserStore;
    use contracts::system::session::{MemorySessionStore, Session};

    #[test]
    fn test_join_base() {
        assert_eq!(
            join_base("https:", "acme.example.com", 3000, "/api"),
            "https://acme.example.com:3000/api"
        );
        assert_eq!(join_base("http:", "localhost", 8080, "/"), "http://localhost:8080");
    }

    #[test]
    fn test_url() {
        let session = Session::new(BrowserStore::Memory(MemorySessionStore::new()), None, "");
        let api = ApiClient::new("http://localhost:3000/api".into(), session);
        assert_eq!(api.url("/products?page=2"), "http://localhost:3000/api/products?page=2");
        assert_eq!(api.url("users"), "http://localhost:3000/api/users");
    }
}
