//! HTTP server assembly.
//!
//! Requests pass through timing, then request logging, then CORS, with the
//! cookie session innermost on the `/api` scope. `wrap` applies
//! outermost-last, so the registration order in [`build_app`] is the
//! reverse of that.

mod error;
pub mod handlers;
mod middleware;
mod session;

pub use error::{ApiError, ApiResult};
pub use middleware::{RequestLog, Timing};
pub use session::SessionContext;

use actix_cors::Cors;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::body::MessageBody;
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error, HttpServer};
use std::env;
use tracing::{info, warn};

/// Default listen address when `FIELDWORK_BIND` is unset
pub const DEFAULT_BIND: &str = "127.0.0.1:8750";

/// Minimum length for a session key supplied via the environment
const MIN_KEY_BYTES: usize = 32;

/// Server settings resolved at startup
pub struct ServerConfig {
    pub bind_addr: String,
    pub key: Key,
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Read settings from `FIELDWORK_BIND`, `FIELDWORK_SESSION_KEY` and
    /// `FIELDWORK_COOKIE_SECURE`.
    pub fn from_env() -> Self {
        let bind_addr = env::var("FIELDWORK_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let key = session_key(env::var("FIELDWORK_SESSION_KEY").ok().as_deref());
        let cookie_secure = secure_flag(env::var("FIELDWORK_COOKIE_SECURE").ok().as_deref());
        Self {
            bind_addr,
            key,
            cookie_secure,
        }
    }
}

/// Derive the cookie key from the configured secret, or generate an
/// ephemeral one. Sessions signed with an ephemeral key do not survive a
/// restart.
fn session_key(secret: Option<&str>) -> Key {
    match secret {
        Some(secret) if secret.len() >= MIN_KEY_BYTES => Key::derive_from(secret.as_bytes()),
        Some(_) => {
            warn!("FIELDWORK_SESSION_KEY is shorter than {MIN_KEY_BYTES} bytes; using an ephemeral key");
            Key::generate()
        }
        None => Key::generate(),
    }
}

fn secure_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

fn session_layer(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build()
}

/// Mirror the request origin. A wildcard origin cannot be combined with
/// cookie credentials, so every origin is reflected back instead.
fn cors_layer() -> Cors {
    Cors::default()
        .allowed_origin_fn(|_origin, _req_head| true)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

/// Assemble the application: the `/api` routes behind the cookie session,
/// then CORS, request logging and response timing. Unmatched paths fall
/// through to the JSON 404 handler at both levels.
pub fn build_app(
    key: Key,
    cookie_secure: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .wrap(session_layer(key, cookie_secure))
        .service(handlers::health)
        .service(handlers::current_user)
        .service(handlers::login)
        .service(handlers::logout)
        .service(handlers::search_options)
        .service(handlers::submit_profile)
        .default_service(web::route().to(handlers::fallback));

    App::new()
        .service(api)
        .default_service(web::route().to(handlers::fallback))
        .wrap(cors_layer())
        .wrap(RequestLog)
        .wrap(Timing)
}

/// Bind and run the server until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let ServerConfig {
        bind_addr,
        key,
        cookie_secure,
    } = config;
    info!(%bind_addr, "starting API server");
    HttpServer::new(move || build_app(key.clone(), cookie_secure))
        .bind(bind_addr.as_str())?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::{
        ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN,
    };
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{json, Value};

    fn test_key() -> Key {
        Key::generate()
    }

    #[test]
    fn test_session_key_is_stable_for_a_given_secret() {
        let secret = "0123456789abcdef0123456789abcdef";
        let a = session_key(Some(secret));
        let b = session_key(Some(secret));
        assert_eq!(a.signing(), b.signing());
    }

    #[test]
    fn test_short_secret_falls_back_to_an_ephemeral_key() {
        let a = session_key(Some("too-short"));
        let b = session_key(Some("too-short"));
        assert_ne!(a.signing(), b.signing());
    }

    #[test]
    fn test_secure_flag_accepts_1_and_true() {
        assert!(secure_flag(Some("1")));
        assert!(secure_flag(Some("true")));
        assert!(secure_flag(Some("TRUE")));
        assert!(!secure_flag(Some("0")));
        assert!(!secure_flag(Some("yes")));
        assert!(!secure_flag(None));
    }

    #[actix_web::test]
    async fn test_responses_carry_a_server_timing_header() {
        let app = actix_test::init_service(build_app(test_key(), false)).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/health")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let timing = res
            .headers()
            .get("server-timing")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(timing.starts_with("total;dur="), "header {timing:?}");
    }

    #[actix_web::test]
    async fn test_cors_mirrors_the_origin_and_allows_credentials() {
        let app = actix_test::init_service(build_app(test_key(), false)).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/health")
                .insert_header((ORIGIN, "http://localhost:3000"))
                .to_request(),
        )
        .await;
        assert_eq!(
            res.headers()
                .get(ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:3000")
        );
        assert_eq!(
            res.headers()
                .get(ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .and_then(|v| v.to_str().ok()),
            Some("true")
        );
    }

    #[actix_web::test]
    async fn test_login_then_submit_through_the_full_stack() {
        let app = actix_test::init_service(build_app(test_key(), false)).await;
        let login = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/session")
                .set_json(json!({ "username": "ada", "password": "secret" }))
                .to_request(),
        )
        .await;
        assert_eq!(login.status(), StatusCode::OK);
        let cookie = login
            .response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session cookie")
            .into_owned();

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/profile")
                .cookie(cookie)
                .set_json(json!({
                    "displayName": "Ada Lovelace",
                    "email": "ada@example.com",
                    "acceptTerms": true
                }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("success"), Some(&json!(true)));
    }

    #[actix_web::test]
    async fn test_paths_outside_the_api_scope_yield_the_json_404() {
        let app = actix_test::init_service(build_app(test_key(), false)).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/nope").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({ "success": false, "error": "Not found" }));
    }
}
