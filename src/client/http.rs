//! HTTP client for the fieldwork API server.
//!
//! Wraps `reqwest` with a cookie store so the session cookie issued by
//! `POST /api/session` is replayed on later requests.

use crate::contract::{
    ApiFailure, CurrentUser, HealthResponse, LoginRequest, LoginResponse, OptionItem, ProfileSaved,
    ProfileSubmission,
};
use crate::form::Choice;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Default server address when neither config nor environment name one
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8750";

/// Request timeout for every call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors surfaced on the status line
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with its JSON failure payload
    #[error("{message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }
}

/// Client for the fieldwork API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL, e.g. `http://127.0.0.1:8750`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Probe the server
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let res = self.http.get(self.url("/api/health")).send().await?;
        Self::decode(res).await
    }

    /// Fetch the sample user record
    pub async fn current_user(&self) -> Result<CurrentUser, ClientError> {
        let res = self.http.get(self.url("/api/current-user")).send().await?;
        Self::decode(res).await
    }

    /// Establish a session; the cookie lands in the client's jar
    pub async fn login(&self, username: &str, password: &str) -> Result<CurrentUser, ClientError> {
        let res = self
            .http
            .post(self.url("/api/session"))
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        let response: LoginResponse = Self::decode(res).await?;
        Ok(response.user)
    }

    /// Clear the session
    pub async fn logout(&self) -> Result<(), ClientError> {
        let res = self.http.delete(self.url("/api/session")).send().await?;
        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::failure(res).await)
    }

    /// Search options for the combobox; an empty query yields an empty list
    pub async fn search_options(&self, query: &str) -> Result<Vec<Choice>, ClientError> {
        let res = self
            .http
            .get(self.url("/api/options/search"))
            .query(&[("q", query)])
            .send()
            .await?;
        let items: Vec<OptionItem> = Self::decode(res).await?;
        Ok(items
            .into_iter()
            .map(|item| Choice::new(item.id, item.name))
            .collect())
    }

    /// Submit a profile; requires a session cookie in the jar
    pub async fn submit_profile(
        &self,
        submission: &ProfileSubmission,
    ) -> Result<ProfileSaved, ClientError> {
        let res = self
            .http
            .post(self.url("/api/profile"))
            .json(submission)
            .send()
            .await?;
        Self::decode(res).await
    }

    async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ClientError> {
        if res.status().is_success() {
            return Ok(res.json().await?);
        }
        Err(Self::failure(res).await)
    }

    /// Turn a non-success response into [`ClientError::Api`], keeping the
    /// server's message when the body parses as a failure payload.
    async fn failure(res: reqwest::Response) -> ClientError {
        let status = res.status();
        let message = match res.json::<ApiFailure>().await {
            Ok(failure) => failure.error,
            Err(_) => format!("unexpected status {status}"),
        };
        ClientError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::build_app;
    use actix_web::cookie::Key;
    use actix_web::HttpServer;

    /// Boot the real server on an OS-assigned port and return its base URL.
    fn start_server() -> String {
        let key = Key::generate();
        let server = HttpServer::new(move || build_app(key.clone(), false))
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))
            .expect("bind test server");
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{addr}")
    }

    fn client_for(base_url: &str) -> ApiClient {
        ApiClient::new(base_url).expect("client")
    }

    #[test]
    fn test_new_trims_trailing_slashes() {
        let client = ApiClient::new("http://localhost:8750///").expect("client");
        assert_eq!(client.base_url(), "http://localhost:8750");
        assert_eq!(client.url("/api/health"), "http://localhost:8750/api/health");
    }

    #[actix_web::test]
    async fn test_health_round_trip() {
        let server = start_server();
        let client = client_for(&server);
        let health = client.health().await.expect("health");
        assert_eq!(health.status, "ok");
    }

    #[actix_web::test]
    async fn test_current_user_round_trip() {
        let server = start_server();
        let client = client_for(&server);
        let user = client.current_user().await.expect("current user");
        assert_eq!(user.id, "123");
        assert_eq!(user.name, "John Doe");
    }

    #[actix_web::test]
    async fn test_login_then_submit_replays_the_cookie() {
        let server = start_server();
        let client = client_for(&server);
        let user = client.login("ada", "secret").await.expect("login");
        assert_eq!(user.name, "ada");

        let submission = ProfileSubmission {
            display_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            accept_terms: true,
            ..ProfileSubmission::default()
        };
        let saved = client.submit_profile(&submission).await.expect("submit");
        assert!(saved.success);
    }

    #[actix_web::test]
    async fn test_submit_without_login_is_unauthorized() {
        let server = start_server();
        let client = client_for(&server);
        let submission = ProfileSubmission {
            display_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            accept_terms: true,
            ..ProfileSubmission::default()
        };
        let err = client
            .submit_profile(&submission)
            .await
            .expect_err("no session");
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Authentication required");
    }

    #[actix_web::test]
    async fn test_login_failure_surfaces_the_server_message() {
        let server = start_server();
        let client = client_for(&server);
        let err = client.login("", "secret").await.expect_err("empty username");
        assert_eq!(err.to_string(), "username must not be empty");
        assert!(!err.is_unauthorized());
    }

    #[actix_web::test]
    async fn test_search_options_maps_to_choices() {
        let server = start_server();
        let client = client_for(&server);
        let choices = client.search_options("jap").await.expect("search");
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].value, "jp");
        assert_eq!(choices[0].label, "Japan");
        assert!(client.search_options("").await.expect("empty").is_empty());
    }
}
