//! API handlers.
//!
//! ```text
//! GET    /api/health
//! GET    /api/current-user
//! POST   /api/session {"username":"ada","password":"secret"}
//! DELETE /api/session
//! GET    /api/options/search?q=jap
//! POST   /api/profile {profile JSON}
//! ```

use crate::contract::{
    ApiFailure, CurrentUser, HealthResponse, LoginRequest, LoginResponse, OptionItem, ProfileSaved,
    ProfileSubmission,
};
use crate::server::error::{ApiError, ApiResult};
use crate::server::session::SessionContext;
use actix_web::{delete, get, post, web, HttpResponse};
use serde::Deserialize;

/// Countries served to the combobox lookup
const COUNTRIES: &[(&str, &str)] = &[
    ("ar", "Argentina"),
    ("au", "Australia"),
    ("br", "Brazil"),
    ("ca", "Canada"),
    ("cn", "China"),
    ("de", "Germany"),
    ("eg", "Egypt"),
    ("es", "Spain"),
    ("fi", "Finland"),
    ("fr", "France"),
    ("gb", "United Kingdom"),
    ("in", "India"),
    ("it", "Italy"),
    ("jp", "Japan"),
    ("ke", "Kenya"),
    ("kr", "South Korea"),
    ("mx", "Mexico"),
    ("ng", "Nigeria"),
    ("nl", "Netherlands"),
    ("no", "Norway"),
    ("nz", "New Zealand"),
    ("pl", "Poland"),
    ("pt", "Portugal"),
    ("se", "Sweden"),
    ("us", "United States"),
];

/// Health probe
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    ),
    tags = ["system"],
    operation_id = "health",
    security([])
)]
#[get("/health")]
pub async fn health() -> web::Json<HealthResponse> {
    web::Json(HealthResponse::now())
}

/// Fixed sample user record
#[utoipa::path(
    get,
    path = "/api/current-user",
    responses(
        (status = 200, description = "Sample user", body = CurrentUser)
    ),
    tags = ["session"],
    operation_id = "currentUser",
    security([])
)]
#[get("/current-user")]
pub async fn current_user() -> web::Json<CurrentUser> {
    web::Json(CurrentUser::sample())
}

/// Establish a cookie session.
///
/// Any non-empty credentials are accepted; this backs the sample gallery,
/// not a real user store.
#[utoipa::path(
    post,
    path = "/api/session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", body = LoginResponse,
         headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Empty credentials", body = ApiFailure)
    ),
    tags = ["session"],
    operation_id = "login",
    security([])
)]
#[post("/session")]
pub async fn login(
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let LoginRequest { username, password } = payload.into_inner();
    if username.trim().is_empty() {
        return Err(ApiError::bad_request("username must not be empty"));
    }
    if password.is_empty() {
        return Err(ApiError::bad_request("password must not be empty"));
    }
    let user = CurrentUser {
        id: "123".to_string(),
        name: username,
    };
    session.persist_user(&user)?;
    Ok(web::Json(LoginResponse {
        success: true,
        user,
    }))
}

/// Clear the session
#[utoipa::path(
    delete,
    path = "/api/session",
    responses(
        (status = 204, description = "Session cleared")
    ),
    tags = ["session"],
    operation_id = "logout",
    security([])
)]
#[delete("/session")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::NoContent().finish()
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against option names
    pub q: Option<String>,
}

/// Search options for the combobox.
///
/// An empty or missing query yields an empty list; the widget only asks
/// once the user has typed something.
#[utoipa::path(
    get,
    path = "/api/options/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching options", body = [OptionItem])
    ),
    tags = ["options"],
    operation_id = "searchOptions",
    security([])
)]
#[get("/options/search")]
pub async fn search_options(query: web::Query<SearchQuery>) -> web::Json<Vec<OptionItem>> {
    let needle = query
        .q
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    if needle.is_empty() {
        return web::Json(Vec::new());
    }
    let matches = COUNTRIES
        .iter()
        .filter(|(id, name)| name.to_lowercase().contains(&needle) || *id == needle)
        .map(|(id, name)| OptionItem {
            id: (*id).to_string(),
            name: (*name).to_string(),
        })
        .collect();
    web::Json(matches)
}

/// Accept a validated profile submission. Requires a session.
#[utoipa::path(
    post,
    path = "/api/profile",
    request_body = ProfileSubmission,
    responses(
        (status = 200, description = "Profile accepted", body = ProfileSaved),
        (status = 400, description = "Invalid submission", body = ApiFailure),
        (status = 401, description = "No session", body = ApiFailure)
    ),
    tags = ["profile"],
    operation_id = "submitProfile"
)]
#[post("/profile")]
pub async fn submit_profile(
    session: SessionContext,
    payload: web::Json<ProfileSubmission>,
) -> ApiResult<web::Json<ProfileSaved>> {
    session.require_user()?;
    let submission = payload.into_inner();
    submission.validate().map_err(ApiError::bad_request)?;
    Ok(web::Json(ProfileSaved::now()))
}

/// Fallback for unmatched sub-paths, any method
pub async fn fallback() -> HttpResponse {
    HttpResponse::NotFound().json(ApiFailure::not_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::session::test_session_middleware;
    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, web, App};
    use chrono::{DateTime, Utc};
    use serde_json::{json, Value};

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().service(
            web::scope("/api")
                .wrap(test_session_middleware())
                .service(health)
                .service(current_user)
                .service(login)
                .service(logout)
                .service(search_options)
                .service(submit_profile)
                .default_service(web::route().to(fallback)),
        )
    }

    fn valid_profile() -> Value {
        json!({
            "displayName": "Ada Lovelace",
            "email": "ada@example.com",
            "acceptTerms": true
        })
    }

    async fn login_cookie(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    ) -> actix_web::cookie::Cookie<'static> {
        let res = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/api/session")
                .set_json(json!({ "username": "ada", "password": "secret" }))
                .to_request(),
        )
        .await;
        assert!(res.status().is_success());
        res.response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session cookie")
            .into_owned()
    }

    #[actix_web::test]
    async fn test_health_reports_ok_with_timestamp() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/health")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("status"), Some(&json!("ok")));
        let timestamp = body.get("timestamp").and_then(Value::as_str).unwrap();
        assert!(timestamp.parse::<DateTime<Utc>>().is_ok());
    }

    #[actix_web::test]
    async fn test_current_user_is_the_fixed_record() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/current-user")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({ "id": "123", "name": "John Doe" }));
    }

    #[actix_web::test]
    async fn test_login_rejects_empty_username() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/session")
                .set_json(json!({ "username": "   ", "password": "secret" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("success"), Some(&json!(false)));
        assert_eq!(body.get("error"), Some(&json!("username must not be empty")));
    }

    #[actix_web::test]
    async fn test_login_echoes_the_user() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/session")
                .set_json(json!({ "username": "ada", "password": "secret" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("success"), Some(&json!(true)));
        assert_eq!(
            body.pointer("/user/name").and_then(Value::as_str),
            Some("ada")
        );
    }

    #[actix_web::test]
    async fn test_profile_without_session_is_the_fixed_401() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/profile")
                .set_json(valid_profile())
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({ "success": false, "error": "Authentication required" })
        );
    }

    #[actix_web::test]
    async fn test_profile_accepts_valid_submission_with_session() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/profile")
                .cookie(cookie)
                .set_json(valid_profile())
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("success"), Some(&json!(true)));
        assert!(body.get("id").is_some());
        assert!(body.get("savedAt").is_some());
    }

    #[actix_web::test]
    async fn test_profile_rejects_invalid_submission() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;
        let mut payload = valid_profile();
        payload["email"] = json!("not-an-email");
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/profile")
                .cookie(cookie)
                .set_json(payload)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("success"), Some(&json!(false)));
    }

    #[actix_web::test]
    async fn test_logout_clears_and_protects_again() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/api/session")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        let removal = res
            .response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("removal cookie");

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/profile")
                .cookie(removal)
                .set_json(valid_profile())
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_search_matches_name_substring() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/options/search?q=jap")
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!([{ "id": "jp", "name": "Japan" }]));
    }

    #[actix_web::test]
    async fn test_search_is_case_insensitive_and_matches_ids() {
        let app = actix_test::init_service(test_app()).await;
        for uri in ["/api/options/search?q=JAPAN", "/api/options/search?q=jp"] {
            let res = actix_test::call_service(
                &app,
                actix_test::TestRequest::get().uri(uri).to_request(),
            )
            .await;
            let body: Value = actix_test::read_body_json(res).await;
            assert_eq!(body.as_array().map(Vec::len), Some(1), "uri {uri}");
        }
    }

    #[actix_web::test]
    async fn test_search_empty_query_yields_empty_list() {
        let app = actix_test::init_service(test_app()).await;
        for uri in ["/api/options/search", "/api/options/search?q="] {
            let res = actix_test::call_service(
                &app,
                actix_test::TestRequest::get().uri(uri).to_request(),
            )
            .await;
            let body: Value = actix_test::read_body_json(res).await;
            assert_eq!(body, json!([]), "uri {uri}");
        }
    }

    #[actix_web::test]
    async fn test_unmatched_paths_yield_the_fixed_404_for_any_method() {
        let app = actix_test::init_service(test_app()).await;
        let requests = [
            actix_test::TestRequest::get().uri("/api/nope"),
            actix_test::TestRequest::put().uri("/api/profile"),
            actix_test::TestRequest::patch().uri("/api/anything/else"),
            actix_test::TestRequest::delete().uri("/api/options"),
        ];
        for request in requests {
            let res = actix_test::call_service(&app, request.to_request()).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND);
            let body: Value = actix_test::read_body_json(res).await;
            assert_eq!(body, json!({ "success": false, "error": "Not found" }));
        }
    }
}
