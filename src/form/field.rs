//! Form field value objects

use super::rules::{Rule, Validator};
use chrono::NaiveDate;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(Option<i64>),
    Bool(bool),
    Date(Option<NaiveDate>),
    /// Single selection, stored as the option value
    Choice(Option<String>),
    /// Multiple selection, stored as option ids
    Selection(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for non-text values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the integer value, if any
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => *n,
            _ => None,
        }
    }

    /// Get the boolean value (returns false for non-bool values)
    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }

    /// Get the date value, if any
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => *d,
            _ => None,
        }
    }

    /// Get the selected choice value, if any
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            FieldValue::Choice(c) => c.as_deref(),
            _ => None,
        }
    }

    /// Get the selected ids (returns empty slice for non-selection values)
    pub fn as_selection(&self) -> &[String] {
        match self {
            FieldValue::Selection(ids) => ids,
            _ => &[],
        }
    }

    /// Whether the value counts as empty for `Rule::Required`
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Integer(n) => n.is_none(),
            FieldValue::Bool(b) => !b,
            FieldValue::Date(d) => d.is_none(),
            FieldValue::Choice(c) => c.is_none(),
            FieldValue::Selection(ids) => ids.is_empty(),
        }
    }
}

/// Which input widget renders a field. The form definition picks one per
/// field, the way the original page markup does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    /// Single- or multi-line text entry (also used for integers)
    #[default]
    Input,
    /// Closed option list cycled in place
    Select,
    /// Searchable dropdown backed by a remote lookup
    Combobox,
    /// Inline exclusive choice
    Radio,
    /// Dropdown of toggleable options
    MultiSelect,
    Checkbox,
    Switch,
    /// Calendar overlay
    DatePicker,
}

/// A single form field: descriptor, current value, and validation state.
///
/// Fields are owned by a `FormState` and mutated only through its update
/// methods, so the error always reflects the current value.
#[derive(Clone, Default)]
pub struct FieldState {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub control: Control,
    /// Current validation message, set/cleared on every update
    pub error: Option<String>,
    pub disabled: bool,
    pub placeholder: Option<String>,
    pub multiline: bool,
    /// Render the text value obfuscated (secrets)
    pub masked: bool,
    /// Temporarily show a masked value in clear text
    pub revealed: bool,
    pub rules: Vec<Rule>,
    pub validator: Option<Validator>,
}

impl std::fmt::Debug for FieldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldState")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("value", &self.value)
            .field("control", &self.control)
            .field("error", &self.error)
            .field("disabled", &self.disabled)
            .field("multiline", &self.multiline)
            .field("masked", &self.masked)
            .finish()
    }
}

impl FieldState {
    fn new(name: &str, label: &str, value: FieldValue, control: Control) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value,
            control,
            ..Self::default()
        }
    }

    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldValue::Text(String::new()), Control::Input)
    }

    /// Create a new integer field (text entry filtered to digits)
    pub fn integer(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldValue::Integer(None), Control::Input)
    }

    /// Create a new boolean field, rendered as a checkbox
    pub fn boolean(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldValue::Bool(false), Control::Checkbox)
    }

    /// Create a new date field
    pub fn date(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldValue::Date(None), Control::DatePicker)
    }

    /// Create a new single-choice field, rendered as a closed select
    pub fn choice(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldValue::Choice(None), Control::Select)
    }

    /// Create a new multi-choice field
    pub fn selection(name: &str, label: &str) -> Self {
        Self::new(
            name,
            label,
            FieldValue::Selection(Vec::new()),
            Control::MultiSelect,
        )
    }

    /// Set an initial value
    pub fn with_value(mut self, value: FieldValue) -> Self {
        self.value = value;
        self
    }

    /// Set the placeholder shown while the field is empty
    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    /// Mark the field as multiline (text fields only)
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Render a choice field as an inline radio group
    pub fn radio(mut self) -> Self {
        self.control = Control::Radio;
        self
    }

    /// Render a choice field as a searchable combobox
    pub fn searchable(mut self) -> Self {
        self.control = Control::Combobox;
        self
    }

    /// Render a boolean field as a switch
    pub fn switch(mut self) -> Self {
        self.control = Control::Switch;
        self
    }

    /// Render the value obfuscated until revealed
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Mark the field as disabled: skipped by focus, ignored by updates
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Attach declarative validation rules
    pub fn rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    /// Attach a custom validation closure, run after the declarative rules
    pub fn validator(
        mut self,
        f: impl Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validator = Some(Validator::new(f));
        self
    }

    /// Whether any rule requires the field to be filled
    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required))
    }

    /// Push a character into the field value (text and integer fields)
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Integer(n) => {
                // Digits only; everything else is dropped
                if let Some(d) = c.to_digit(10) {
                    let next = n
                        .unwrap_or(0)
                        .saturating_mul(10)
                        .saturating_add(i64::from(d));
                    *n = Some(next);
                }
            }
            _ => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Integer(n) => {
                *n = match n.map(|v| v / 10) {
                    Some(0) | None => None,
                    Some(v) => Some(v),
                };
            }
            _ => {}
        }
    }

    /// Clear the field value back to its empty state
    pub fn clear(&mut self) {
        self.value = match self.value {
            FieldValue::Text(_) => FieldValue::Text(String::new()),
            FieldValue::Integer(_) => FieldValue::Integer(None),
            FieldValue::Bool(_) => FieldValue::Bool(false),
            FieldValue::Date(_) => FieldValue::Date(None),
            FieldValue::Choice(_) => FieldValue::Choice(None),
            FieldValue::Selection(_) => FieldValue::Selection(Vec::new()),
        };
    }

    /// Get the display value for rendering (masking applied)
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => {
                if self.masked && !self.revealed {
                    "•".repeat(s.chars().count())
                } else {
                    s.clone()
                }
            }
            FieldValue::Integer(n) => n.map(|v| v.to_string()).unwrap_or_default(),
            FieldValue::Bool(b) => if *b { "on" } else { "off" }.to_string(),
            FieldValue::Date(d) => d.map(|v| v.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            FieldValue::Choice(c) => c.clone().unwrap_or_default(),
            FieldValue::Selection(ids) => ids.join(", "),
        }
    }

    /// Run the field's rules against its current value
    pub fn validate(&mut self) {
        self.error = None;
        for rule in &self.rules {
            if let Err(message) = rule.check(&self.value) {
                self.error = Some(message);
                return;
            }
        }
        if let Some(validator) = &self.validator {
            if let Err(message) = validator.check(&self.value) {
                self.error = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_empty_text() {
        let value = FieldValue::default();
        assert_eq!(value, FieldValue::Text(String::new()));
        assert!(value.is_empty());
    }

    #[test]
    fn test_push_char_appends_to_text() {
        let mut field = FieldState::text("name", "Name");
        field.push_char('h');
        field.push_char('i');
        assert_eq!(field.value.as_text(), "hi");
    }

    #[test]
    fn test_push_char_filters_non_digits_for_integer() {
        let mut field = FieldState::integer("age", "Age");
        field.push_char('4');
        field.push_char('x');
        field.push_char('2');
        assert_eq!(field.value.as_integer(), Some(42));
    }

    #[test]
    fn test_pop_char_on_integer_drops_last_digit() {
        let mut field = FieldState::integer("age", "Age").with_value(FieldValue::Integer(Some(42)));
        field.pop_char();
        assert_eq!(field.value.as_integer(), Some(4));
        field.pop_char();
        assert_eq!(field.value.as_integer(), None);
    }

    #[test]
    fn test_pop_char_on_empty_integer_is_noop() {
        let mut field = FieldState::integer("age", "Age");
        field.pop_char();
        assert_eq!(field.value.as_integer(), None);
    }

    #[test]
    fn test_push_char_ignored_for_bool() {
        let mut field = FieldState::boolean("ok", "Ok");
        field.push_char('x');
        assert_eq!(field.value, FieldValue::Bool(false));
    }

    #[test]
    fn test_masked_display_obfuscates() {
        let mut field =
            FieldState::text("secret", "Secret").masked().with_value(FieldValue::Text("abcd".into()));
        assert_eq!(field.display_value(), "••••");
        field.revealed = true;
        assert_eq!(field.display_value(), "abcd");
    }

    #[test]
    fn test_clear_resets_each_value_kind() {
        let mut field = FieldState::selection("tags", "Tags")
            .with_value(FieldValue::Selection(vec!["a".into(), "b".into()]));
        field.clear();
        assert!(field.value.as_selection().is_empty());

        let mut field = FieldState::date("day", "Day")
            .with_value(FieldValue::Date(NaiveDate::from_ymd_opt(2024, 5, 1)));
        field.clear();
        assert_eq!(field.value.as_date(), None);
    }

    #[test]
    fn test_is_required_reflects_rules() {
        let field = FieldState::text("name", "Name").rules(vec![Rule::Required]);
        assert!(field.is_required());
        let field = FieldState::text("name", "Name").rules(vec![Rule::MaxLen(5)]);
        assert!(!field.is_required());
    }

    #[test]
    fn test_validate_sets_and_clears_error() {
        let mut field = FieldState::text("name", "Name").rules(vec![Rule::Required]);
        field.validate();
        assert!(field.error.is_some());
        field.push_char('a');
        field.validate();
        assert!(field.error.is_none());
    }

    #[test]
    fn test_custom_validator_runs_after_rules() {
        let mut field = FieldState::text("code", "Code")
            .rules(vec![Rule::Required])
            .validator(|v| {
                if v.as_text().starts_with('F') {
                    Ok(())
                } else {
                    Err("Must start with F".to_string())
                }
            });
        field.push_char('X');
        field.validate();
        assert_eq!(field.error.as_deref(), Some("Must start with F"));
        field.clear();
        field.push_char('F');
        field.validate();
        assert!(field.error.is_none());
    }

    #[test]
    fn test_display_value_for_date() {
        let field = FieldState::date("day", "Day")
            .with_value(FieldValue::Date(NaiveDate::from_ymd_opt(2024, 5, 1)));
        assert_eq!(field.display_value(), "2024-05-01");
    }
}
