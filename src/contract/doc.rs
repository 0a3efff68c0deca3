//! OpenAPI document for the HTTP surface.
//!
//! The generated document is the contract boundary: client methods, server
//! handlers, and the schema components all derive from the same types in
//! [`crate::contract::types`]. `cargo run --bin fieldwork-openapi` prints
//! the document for external tooling.

use super::types::{
    ApiFailure, CurrentUser, HealthResponse, LoginRequest, LoginResponse, OptionItem, ProfileSaved,
    ProfileSubmission,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the session cookie security scheme to the document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/session.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Fieldwork API",
        description = "Backing service for the component gallery: health probe, \
                       sample user record, session handling, option search, and \
                       profile submission."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::server::handlers::health,
        crate::server::handlers::current_user,
        crate::server::handlers::login,
        crate::server::handlers::logout,
        crate::server::handlers::search_options,
        crate::server::handlers::submit_profile,
    ),
    components(schemas(
        HealthResponse,
        CurrentUser,
        LoginRequest,
        LoginResponse,
        OptionItem,
        ProfileSubmission,
        ProfileSaved,
        ApiFailure,
    )),
    tags(
        (name = "system", description = "Health and diagnostics"),
        (name = "session", description = "Cookie session handling"),
        (name = "profile", description = "Profile form endpoints"),
        (name = "options", description = "Option lookups for choice widgets")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::schema::Schema;
    use utoipa::openapi::RefOr;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn test_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/health",
            "/api/current-user",
            "/api/session",
            "/api/options/search",
            "/api/profile",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path {path} in document"
            );
        }
    }

    #[test]
    fn test_session_path_carries_post_and_delete() {
        let doc = ApiDoc::openapi();
        let session = doc.paths.paths.get("/api/session").expect("session path");
        assert!(session.post.is_some());
        assert!(session.delete.is_some());
    }

    #[test]
    fn test_failure_schema_has_fixed_shape() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let failure = schemas.get("ApiFailure").expect("ApiFailure schema");
        assert_object_schema_has_field(failure, "success");
        assert_object_schema_has_field(failure, "error");
    }

    #[test]
    fn test_health_schema_has_status_and_timestamp() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let health = schemas.get("HealthResponse").expect("HealthResponse");
        assert_object_schema_has_field(health, "status");
        assert_object_schema_has_field(health, "timestamp");
    }

    #[test]
    fn test_submission_schema_uses_camel_case_keys() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let submission = schemas.get("ProfileSubmission").expect("ProfileSubmission");
        assert_object_schema_has_field(submission, "displayName");
        assert_object_schema_has_field(submission, "acceptTerms");
    }

    #[test]
    fn test_document_serializes_to_json() {
        let json = ApiDoc::openapi().to_json().expect("serializable document");
        assert!(json.contains("\"Fieldwork API\""));
    }
}
