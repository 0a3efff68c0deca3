//! Shared API contract: wire types and the OpenAPI document built from them

mod doc;
mod types;

pub use doc::ApiDoc;
pub use types::{
    ApiFailure, CurrentUser, HealthResponse, LoginRequest, LoginResponse, OptionItem, ProfileSaved,
    ProfileSubmission,
};
