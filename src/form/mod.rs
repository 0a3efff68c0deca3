//! Form domain layer
//!
//! Field values, validation rules, and the binder that ties an ordered set
//! of fields to focus and revalidation behaviour.

mod field;
mod form_state;
mod options;
pub mod rules;

pub use field::{Control, FieldState, FieldValue};
pub use form_state::{FormState, FORM_BUTTONS};
pub use options::{label_for, Choice};
pub use rules::{Rule, Validator};
