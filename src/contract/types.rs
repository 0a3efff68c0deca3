//! Wire types shared by the HTTP handlers and the terminal client

use crate::form::rules::is_email;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Health probe payload for `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` while the server is responding
    #[schema(example = "ok")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn now() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Sample user record returned by `GET /api/current-user`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CurrentUser {
    #[schema(example = "123")]
    pub id: String,
    #[schema(example = "John Doe")]
    pub name: String,
}

impl CurrentUser {
    /// The fixed record the sample endpoint serves
    pub fn sample() -> Self {
        Self {
            id: "123".to_string(),
            name: "John Doe".to_string(),
        }
    }
}

/// Login body for `POST /api/session`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session established response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub user: CurrentUser,
}

/// One searchable option, as served by `GET /api/options/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OptionItem {
    #[schema(example = "jp")]
    pub id: String,
    #[schema(example = "Japan")]
    pub name: String,
}

/// Profile form payload for `POST /api/profile`.
///
/// Validated identically on both sides: the form pre-validates before
/// submitting and the handler re-checks on arrival.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSubmission {
    pub display_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default)]
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub newsletter: bool,
    pub accept_terms: bool,
}

impl ProfileSubmission {
    /// Check the payload, returning the first problem found
    pub fn validate(&self) -> Result<(), String> {
        if self.display_name.trim().is_empty() {
            return Err("displayName is required".to_string());
        }
        if !is_email(&self.email) {
            return Err("email is not a valid address".to_string());
        }
        if let Some(passphrase) = &self.passphrase {
            if passphrase.chars().count() < 8 {
                return Err("passphrase must be at least 8 characters".to_string());
            }
        }
        if let Some(age) = self.age {
            if !(0..=130).contains(&age) {
                return Err("age must be between 0 and 130".to_string());
            }
        }
        if self.bio.chars().count() > 280 {
            return Err("bio must be at most 280 characters".to_string());
        }
        if !self.accept_terms {
            return Err("acceptTerms must be true".to_string());
        }
        Ok(())
    }
}

/// Acknowledgement for an accepted profile submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSaved {
    pub success: bool,
    /// Server-assigned id for this submission
    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
}

impl ProfileSaved {
    pub fn now() -> Self {
        Self {
            success: true,
            id: Uuid::new_v4(),
            saved_at: Utc::now(),
        }
    }
}

/// Fixed-shape failure object used for every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiFailure {
    /// Always `false`
    pub success: bool,
    #[schema(example = "Authentication required")]
    pub error: String,
}

impl ApiFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }

    /// The fixed object protected routes return without a session
    pub fn unauthorized() -> Self {
        Self::new("Authentication required")
    }

    pub fn not_found() -> Self {
        Self::new("Not found")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn valid_submission() -> ProfileSubmission {
        ProfileSubmission {
            display_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            accept_terms: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_current_user_sample_record() {
        let user = CurrentUser::sample();
        assert_eq!(user.id, "123");
        assert_eq!(user.name, "John Doe");
    }

    #[test]
    fn test_health_serializes_status_and_timestamp() {
        let value = serde_json::to_value(HealthResponse::now()).unwrap();
        assert_eq!(value.get("status"), Some(&json!("ok")));
        let timestamp = value.get("timestamp").and_then(Value::as_str).unwrap();
        assert!(timestamp.parse::<DateTime<Utc>>().is_ok());
    }

    #[test]
    fn test_unauthorized_failure_shape() {
        let value = serde_json::to_value(ApiFailure::unauthorized()).unwrap();
        assert_eq!(
            value,
            json!({ "success": false, "error": "Authentication required" })
        );
    }

    #[test]
    fn test_submission_validates_clean_payload() {
        assert_eq!(valid_submission().validate(), Ok(()));
    }

    #[test]
    fn test_submission_rejects_blank_display_name() {
        let submission = ProfileSubmission {
            display_name: "   ".to_string(),
            ..valid_submission()
        };
        assert!(submission.validate().is_err());
    }

    #[test]
    fn test_submission_rejects_bad_email() {
        let submission = ProfileSubmission {
            email: "not-an-email".to_string(),
            ..valid_submission()
        };
        assert_eq!(
            submission.validate(),
            Err("email is not a valid address".to_string())
        );
    }

    #[test]
    fn test_submission_rejects_short_passphrase() {
        let submission = ProfileSubmission {
            passphrase: Some("short".to_string()),
            ..valid_submission()
        };
        assert!(submission.validate().is_err());
        let submission = ProfileSubmission {
            passphrase: Some("long enough".to_string()),
            ..valid_submission()
        };
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn test_submission_rejects_age_out_of_range() {
        for age in [-1, 131] {
            let submission = ProfileSubmission {
                age: Some(age),
                ..valid_submission()
            };
            assert!(submission.validate().is_err(), "age {age} should fail");
        }
    }

    #[test]
    fn test_submission_requires_accepted_terms() {
        let submission = ProfileSubmission {
            accept_terms: false,
            ..valid_submission()
        };
        assert_eq!(
            submission.validate(),
            Err("acceptTerms must be true".to_string())
        );
    }

    #[test]
    fn test_submission_uses_camel_case_on_the_wire() {
        let value = serde_json::to_value(valid_submission()).unwrap();
        assert!(value.get("displayName").is_some());
        assert!(value.get("acceptTerms").is_some());
        assert!(value.get("display_name").is_none());
        // Empty options are omitted entirely
        assert!(value.get("passphrase").is_none());
        assert!(value.get("birthday").is_none());
    }

    #[test]
    fn test_submission_birthday_round_trips_as_iso_date() {
        let submission = ProfileSubmission {
            birthday: Some(NaiveDate::from_ymd_opt(1815, 12, 10).unwrap()),
            ..valid_submission()
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value.get("birthday"), Some(&json!("1815-12-10")));
        let back: ProfileSubmission = serde_json::from_value(value).unwrap();
        assert_eq!(back.birthday, submission.birthday);
    }
}
