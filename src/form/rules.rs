//! Declarative validation rules for form fields

use super::field::FieldValue;
use std::sync::Arc;

/// Built-in validation rules.
///
/// Rules are checked in order; the first failure becomes the field's error
/// message. Length and range rules pass on empty values so optional fields
/// only fail them once something was entered (pair with `Required` to force
/// a value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must be present (non-empty text, a selection, `true` for bools)
    Required,
    /// Minimum text length in characters
    MinLen(usize),
    /// Maximum text length in characters
    MaxLen(usize),
    /// Minimum integer value
    Min(i64),
    /// Maximum integer value
    Max(i64),
    /// Loose email shape check: `local@domain`, no whitespace
    Email,
}

impl Rule {
    /// Check a value against this rule
    pub fn check(&self, value: &FieldValue) -> Result<(), String> {
        match self {
            Rule::Required => {
                if value.is_empty() {
                    Err("This field is required".to_string())
                } else {
                    Ok(())
                }
            }
            Rule::MinLen(min) => {
                let len = value.as_text().chars().count();
                if len > 0 && len < *min {
                    Err(format!("Must be at least {min} characters"))
                } else {
                    Ok(())
                }
            }
            Rule::MaxLen(max) => {
                if value.as_text().chars().count() > *max {
                    Err(format!("Must be at most {max} characters"))
                } else {
                    Ok(())
                }
            }
            Rule::Min(min) => match value.as_integer() {
                Some(n) if n < *min => Err(format!("Must be at least {min}")),
                _ => Ok(()),
            },
            Rule::Max(max) => match value.as_integer() {
                Some(n) if n > *max => Err(format!("Must be at most {max}")),
                _ => Ok(()),
            },
            Rule::Email => {
                let text = value.as_text();
                if text.is_empty() || is_email(text) {
                    Ok(())
                } else {
                    Err("Must be a valid email address".to_string())
                }
            }
        }
    }
}

/// Loose email shape check shared with the server-side contract validation
pub fn is_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Custom validation closure attached to a field.
///
/// Wrapped in an `Arc` so `FieldState` stays cloneable.
#[derive(Clone)]
pub struct Validator(Arc<dyn Fn(&FieldValue) -> Result<(), String> + Send + Sync>);

impl Validator {
    pub fn new(f: impl Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn check(&self, value: &FieldValue) -> Result<(), String> {
        (self.0)(value)
    }
}
