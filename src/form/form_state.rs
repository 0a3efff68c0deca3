//! Form binder: ordered fields, focus cycling, and a single mutation path

use super::field::{FieldState, FieldValue};

/// Buttons shown on the form's trailing row
pub const FORM_BUTTONS: [&str; 2] = ["Cancel", "Submit"];

/// Holds an ordered set of fields plus focus and button state.
///
/// Every value change funnels through [`FormState::update`] (the key-driven
/// helpers build the new value and delegate to it), so revalidation happens
/// in exactly one place. Validation is quiet until the first
/// [`FormState::validate_all`]; after that, edited fields revalidate on
/// every change.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub fields: Vec<FieldState>,
    /// Index into `fields`, or `fields.len()` for the buttons row
    pub active: usize,
    /// Which button is selected when on the buttons row (0=Cancel, 1=Submit)
    pub selected_button: usize,
    validated: bool,
}

impl FormState {
    pub fn new(fields: Vec<FieldState>) -> Self {
        Self {
            fields,
            active: 0,
            selected_button: 1, // Default to "Submit"
            validated: false,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active == self.fields.len()
    }

    /// The focused field, or `None` when on the buttons row
    pub fn active_field(&self) -> Option<&FieldState> {
        self.fields.get(self.active)
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FieldState> {
        self.fields.get_mut(self.active)
    }

    /// Move focus forward, skipping disabled fields (wraps around)
    pub fn next_field(&mut self) {
        let stops = self.fields.len() + 1;
        for step in 1..=stops {
            let candidate = (self.active + step) % stops;
            if self.is_focusable(candidate) {
                self.active = candidate;
                return;
            }
        }
    }

    /// Move focus backward, skipping disabled fields (wraps around)
    pub fn prev_field(&mut self) {
        let stops = self.fields.len() + 1;
        for step in 1..=stops {
            let candidate = (self.active + stops - step) % stops;
            if self.is_focusable(candidate) {
                self.active = candidate;
                return;
            }
        }
    }

    fn is_focusable(&self, index: usize) -> bool {
        // The buttons row is always reachable
        self.fields.get(index).map_or(true, |f| !f.disabled)
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FORM_BUTTONS.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FORM_BUTTONS.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Set a field's value by name. Returns false if no such field exists.
    ///
    /// This is the single mutation path: once the form has been validated,
    /// the changed field revalidates immediately.
    pub fn update(&mut self, name: &str, value: FieldValue) -> bool {
        let Some(index) = self.field_index(name) else {
            return false;
        };
        self.fields[index].value = value;
        self.maybe_revalidate(index);
        true
    }

    /// Feed a typed character into the focused field
    pub fn input_char(&mut self, c: char) {
        let index = self.active;
        if let Some(field) = self.fields.get_mut(index) {
            field.push_char(c);
            self.maybe_revalidate(index);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        let index = self.active;
        if let Some(field) = self.fields.get_mut(index) {
            field.pop_char();
            self.maybe_revalidate(index);
        }
    }

    /// Flip the focused bool field
    pub fn toggle(&mut self) {
        let index = self.active;
        if let Some(field) = self.fields.get_mut(index) {
            if let FieldValue::Bool(b) = field.value {
                field.value = FieldValue::Bool(!b);
                self.maybe_revalidate(index);
            }
        }
    }

    /// Add or remove an id from the focused multi-select field
    pub fn toggle_selection(&mut self, id: &str) {
        let index = self.active;
        if let Some(field) = self.fields.get_mut(index) {
            if let FieldValue::Selection(ids) = &mut field.value {
                if let Some(pos) = ids.iter().position(|i| i == id) {
                    ids.remove(pos);
                } else {
                    ids.push(id.to_string());
                }
                self.maybe_revalidate(index);
            }
        }
    }

    /// Set the focused choice field
    pub fn choose(&mut self, value: Option<String>) {
        let index = self.active;
        if let Some(field) = self.fields.get_mut(index) {
            if matches!(field.value, FieldValue::Choice(_)) {
                field.value = FieldValue::Choice(value);
                self.maybe_revalidate(index);
            }
        }
    }

    /// Toggle masking on the focused field (password reveal)
    pub fn toggle_reveal(&mut self) {
        if let Some(field) = self.active_field_mut() {
            if field.masked {
                field.revealed = !field.revealed;
            }
        }
    }

    fn maybe_revalidate(&mut self, index: usize) {
        if self.validated {
            if let Some(field) = self.fields.get_mut(index) {
                field.validate();
            }
        }
    }

    /// Validate every field. Returns true when the whole form is valid and
    /// turns on revalidate-on-change for subsequent edits.
    pub fn validate_all(&mut self) -> bool {
        self.validated = true;
        let mut ok = true;
        for field in &mut self.fields {
            field.validate();
            ok &= field.error.is_none();
        }
        ok
    }

    /// Index of the first field carrying an error, if any
    pub fn first_error(&self) -> Option<usize> {
        self.fields.iter().position(|f| f.error.is_some())
    }

    /// Reset all values, errors, and focus
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
            field.error = None;
            field.revealed = false;
        }
        self.active = 0;
        self.selected_button = 1;
        self.validated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::rules::Rule;

    fn sample_form() -> FormState {
        FormState::new(vec![
            FieldState::text("name", "Name").rules(vec![Rule::Required]),
            FieldState::text("nickname", "Nickname").disabled(),
            FieldState::integer("age", "Age"),
            FieldState::boolean("subscribe", "Subscribe"),
        ])
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_skips_disabled() {
            let mut form = sample_form();
            assert_eq!(form.active, 0);
            form.next_field();
            assert_eq!(form.active, 2); // nickname is disabled
        }

        #[test]
        fn test_prev_field_skips_disabled_and_wraps() {
            let mut form = sample_form();
            form.prev_field();
            assert_eq!(form.active, 4); // buttons row
            form.prev_field();
            assert_eq!(form.active, 3);
            form.prev_field();
            assert_eq!(form.active, 2);
            form.prev_field();
            assert_eq!(form.active, 0);
        }

        #[test]
        fn test_buttons_row_is_reachable() {
            let mut form = sample_form();
            for _ in 0..3 {
                form.next_field();
            }
            assert!(form.is_buttons_row_active());
            assert!(form.active_field().is_none());
        }

        #[test]
        fn test_button_cycling_wraps() {
            let mut form = sample_form();
            assert_eq!(form.selected_button, 1); // Submit
            form.next_button();
            assert_eq!(form.selected_button, 0);
            form.prev_button();
            assert_eq!(form.selected_button, 1);
        }

        #[test]
        fn test_all_fields_disabled_still_reaches_buttons() {
            let mut form = FormState::new(vec![
                FieldState::text("a", "A").disabled(),
                FieldState::text("b", "B").disabled(),
            ]);
            form.active = 2;
            form.next_field();
            assert!(form.is_buttons_row_active());
        }
    }

    mod mutation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_update_sets_value_by_name() {
            let mut form = sample_form();
            assert!(form.update("name", FieldValue::Text("Ada".into())));
            assert_eq!(form.field("name").unwrap().value.as_text(), "Ada");
        }

        #[test]
        fn test_update_unknown_field_is_false() {
            let mut form = sample_form();
            assert!(!form.update("missing", FieldValue::Text("x".into())));
        }

        #[test]
        fn test_input_char_edits_focused_field() {
            let mut form = sample_form();
            form.input_char('A');
            form.input_char('d');
            form.input_char('a');
            assert_eq!(form.field("name").unwrap().value.as_text(), "Ada");
            form.backspace();
            assert_eq!(form.field("name").unwrap().value.as_text(), "Ad");
        }

        #[test]
        fn test_toggle_flips_bool_field() {
            let mut form = sample_form();
            form.active = 3;
            form.toggle();
            assert!(form.field("subscribe").unwrap().value.as_bool());
            form.toggle();
            assert!(!form.field("subscribe").unwrap().value.as_bool());
        }

        #[test]
        fn test_toggle_ignores_non_bool_field() {
            let mut form = sample_form();
            form.toggle();
            assert_eq!(form.field("name").unwrap().value.as_text(), "");
        }

        #[test]
        fn test_toggle_selection_adds_and_removes() {
            let mut form = FormState::new(vec![FieldState::selection("tags", "Tags")]);
            form.toggle_selection("rust");
            form.toggle_selection("tui");
            assert_eq!(
                form.field("tags").unwrap().value.as_selection(),
                &["rust".to_string(), "tui".to_string()]
            );
            form.toggle_selection("rust");
            assert_eq!(
                form.field("tags").unwrap().value.as_selection(),
                &["tui".to_string()]
            );
        }

        #[test]
        fn test_toggle_reveal_only_on_masked_fields() {
            let mut form = FormState::new(vec![
                FieldState::text("secret", "Secret").masked(),
                FieldState::text("plain", "Plain"),
            ]);
            form.toggle_reveal();
            assert!(form.field("secret").unwrap().revealed);
            form.active = 1;
            form.toggle_reveal();
            assert!(!form.field("plain").unwrap().revealed);
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_quiet_until_first_validate_all() {
            let mut form = sample_form();
            form.input_char('x');
            form.backspace();
            assert!(form.field("name").unwrap().error.is_none());
        }

        #[test]
        fn test_validate_all_reports_and_enables_revalidation() {
            let mut form = sample_form();
            assert!(!form.validate_all());
            assert_eq!(
                form.field("name").unwrap().error.as_deref(),
                Some("This field is required")
            );
            form.input_char('A');
            assert!(form.field("name").unwrap().error.is_none());
        }

        #[test]
        fn test_update_revalidates_after_validate_all() {
            let mut form = sample_form();
            form.update("name", FieldValue::Text("Ada".into()));
            assert!(form.validate_all());
            form.update("name", FieldValue::Text(String::new()));
            assert_eq!(
                form.field("name").unwrap().error.as_deref(),
                Some("This field is required")
            );
        }

        #[test]
        fn test_first_error_index() {
            let mut form = sample_form();
            form.validate_all();
            assert_eq!(form.first_error(), Some(0));
            form.update("name", FieldValue::Text("Ada".into()));
            assert_eq!(form.first_error(), None);
        }

        #[test]
        fn test_reset_clears_values_errors_and_focus() {
            let mut form = sample_form();
            form.validate_all();
            form.active = 2;
            form.selected_button = 0;
            form.reset();
            assert_eq!(form.active, 0);
            assert_eq!(form.selected_button, 1);
            assert!(form.field("name").unwrap().error.is_none());
            // Editing after reset is quiet again
            form.input_char('x');
            form.backspace();
            assert!(form.field("name").unwrap().error.is_none());
        }
    }
}
