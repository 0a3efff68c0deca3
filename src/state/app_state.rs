//! Application state definitions

use crate::contract::{CurrentUser, HealthResponse, ProfileSubmission};
use crate::form::{Choice, FieldState, FormState, Rule};
use crate::theme::{Palette, ThemeConfig};
use chrono::NaiveDate;
use std::time::{Duration, Instant};

/// Delay between the last combobox keystroke and the remote lookup
pub const LOOKUP_DEBOUNCE: Duration = Duration::from_millis(300);

/// Number of sections on the catalog view the scroll can land on
pub const CATALOG_SECTIONS: u16 = 3;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Profile form with every input widget bound to the form engine
    #[default]
    Form,
    /// Static showcase of badges, buttons and spinners
    Catalog,
    /// Server health and session status
    Server,
}

impl View {
    pub const ALL: [View; 3] = [View::Form, View::Catalog, View::Server];

    pub fn next(&self) -> Self {
        match self {
            Self::Form => Self::Catalog,
            Self::Catalog => Self::Server,
            Self::Server => Self::Form,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Form => Self::Server,
            Self::Catalog => Self::Form,
            Self::Server => Self::Catalog,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Form => "Form",
            Self::Catalog => "Catalog",
            Self::Server => "Server",
        }
    }
}

/// Modal overlay attached to the active form field
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Combobox dropdown with server-backed results
    Combo {
        query: String,
        results: Vec<Choice>,
        highlight: usize,
        loading: bool,
    },
    /// Multi-select dropdown over a fixed option set
    Multi { highlight: usize },
    /// Calendar for the date picker
    Calendar { cursor: NaiveDate },
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::None)
    }
}

/// Combobox lookup waiting for the debounce delay to elapse
#[derive(Debug, Clone)]
pub struct PendingLookup {
    pub query: String,
    pub due: Instant,
}

/// Top-level application state
pub struct AppState {
    /// Current view
    pub view: View,
    /// Active overlay, if any
    pub overlay: Overlay,
    /// The profile form every input widget binds to
    pub form: FormState,
    /// Options for the language select
    pub languages: Vec<Choice>,
    /// Options for the contact radio group
    pub contacts: Vec<Choice>,
    /// Options for the interests multi-select
    pub interests: Vec<Choice>,
    /// Combobox results remembered so committed ids render with labels
    pub countries: Vec<Choice>,
    /// Base URL the client was built with, shown on the server panel
    pub server_address: String,
    /// Last health probe result
    pub health: Option<HealthResponse>,
    /// User the server echoed back at login
    pub user: Option<CurrentUser>,
    /// Status line message
    pub status_message: Option<String>,
    /// Render the status line in the error style
    pub status_is_error: bool,
    /// Debounced combobox lookup, fired by the tick loop once due
    pub pending_lookup: Option<PendingLookup>,
    /// Animation counter advanced every poll interval
    pub tick: u64,
    /// Render with the dark palette
    pub dark_mode: bool,
    /// Theme the palettes derive from
    pub theme: ThemeConfig,
    /// Scroll offset for the catalog view
    pub catalog_scroll: u16,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::default(),
            overlay: Overlay::default(),
            form: profile_form(),
            languages: default_languages(),
            contacts: default_contacts(),
            interests: default_interests(),
            countries: Vec::new(),
            server_address: crate::client::DEFAULT_ADDRESS.to_string(),
            health: None,
            user: None,
            status_message: None,
            status_is_error: false,
            pending_lookup: None,
            tick: 0,
            dark_mode: false,
            theme: ThemeConfig::default(),
            catalog_scroll: 0,
        }
    }
}

impl AppState {
    /// Resolve the active palette for the current mode
    pub fn palette(&self) -> Palette {
        if self.dark_mode {
            Palette::from_colors(&self.theme.dark)
        } else {
            Palette::from_colors(&self.theme.light)
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }

    /// Schedule a combobox lookup, restarting the debounce window
    pub fn schedule_lookup(&mut self, query: impl Into<String>) {
        self.pending_lookup = Some(PendingLookup {
            query: query.into(),
            due: Instant::now() + LOOKUP_DEBOUNCE,
        });
    }

    /// Take the pending lookup once its debounce delay has elapsed
    pub fn take_due_lookup(&mut self) -> Option<String> {
        if self
            .pending_lookup
            .as_ref()
            .is_some_and(|p| p.due <= Instant::now())
        {
            self.pending_lookup.take().map(|p| p.query)
        } else {
            None
        }
    }

    pub fn advance_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn catalog_scroll_down(&mut self) {
        self.catalog_scroll = (self.catalog_scroll + 1).min(CATALOG_SECTIONS - 1);
    }

    pub fn catalog_scroll_up(&mut self) {
        self.catalog_scroll = self.catalog_scroll.saturating_sub(1);
    }

    /// Fixed option set backing a named field, if it has one
    pub fn option_set(&self, name: &str) -> Option<&[Choice]> {
        match name {
            "language" => Some(&self.languages),
            "interests" => Some(&self.interests),
            "contact" => Some(&self.contacts),
            "country" => Some(&self.countries),
            _ => None,
        }
    }

    /// Keep a committed combobox choice around for label display
    pub fn remember_country(&mut self, choice: Choice) {
        if !self.countries.iter().any(|c| c.value == choice.value) {
            self.countries.push(choice);
        }
    }

    /// Collect the form's current values into a submission payload
    pub fn submission(&self) -> ProfileSubmission {
        let text = |name: &str| {
            self.form
                .field(name)
                .map(|f| f.value.as_text().to_string())
                .unwrap_or_default()
        };
        let choice = |name: &str| {
            self.form
                .field(name)
                .and_then(|f| f.value.as_choice().map(String::from))
        };
        ProfileSubmission {
            display_name: text("display_name"),
            email: text("email"),
            passphrase: self.form.field("passphrase").and_then(|f| {
                let value = f.value.as_text();
                (!value.is_empty()).then(|| value.to_string())
            }),
            age: self.form.field("age").and_then(|f| f.value.as_integer()),
            bio: text("bio"),
            language: choice("language"),
            country: choice("country"),
            interests: self
                .form
                .field("interests")
                .map(|f| f.value.as_selection().to_vec())
                .unwrap_or_default(),
            contact: choice("contact"),
            birthday: self.form.field("birthday").and_then(|f| f.value.as_date()),
            newsletter: self
                .form
                .field("newsletter")
                .is_some_and(|f| f.value.as_bool()),
            accept_terms: self
                .form
                .field("accept_terms")
                .is_some_and(|f| f.value.as_bool()),
        }
    }
}

/// The profile form backing the gallery: one field per widget kind
fn profile_form() -> FormState {
    FormState::new(vec![
        FieldState::text("display_name", "Display name")
            .placeholder("Ada Lovelace")
            .rules(vec![Rule::Required, Rule::MaxLen(60)]),
        FieldState::text("email", "Email")
            .placeholder("ada@example.com")
            .rules(vec![Rule::Required, Rule::Email]),
        FieldState::text("passphrase", "Passphrase")
            .masked()
            .rules(vec![Rule::MinLen(8)]),
        FieldState::integer("age", "Age").rules(vec![Rule::Min(0), Rule::Max(130)]),
        FieldState::text("bio", "Bio")
            .multiline()
            .placeholder("A few lines about yourself")
            .rules(vec![Rule::MaxLen(280)]),
        FieldState::choice("language", "Language"),
        FieldState::choice("country", "Country")
            .searchable()
            .placeholder("Type to search"),
        FieldState::selection("interests", "Interests"),
        FieldState::choice("contact", "Preferred contact").radio(),
        FieldState::date("birthday", "Birthday"),
        FieldState::boolean("newsletter", "Newsletter").switch(),
        FieldState::boolean("accept_terms", "Accept terms").validator(|value| {
            if value.as_bool() {
                Ok(())
            } else {
                Err("You must accept the terms and conditions".to_string())
            }
        }),
    ])
}

fn default_languages() -> Vec<Choice> {
    vec![
        Choice::new("en", "English"),
        Choice::new("es", "Spanish"),
        Choice::new("fr", "French"),
        Choice::new("de", "German"),
        Choice::new("ja", "Japanese"),
    ]
}

fn default_contacts() -> Vec<Choice> {
    vec![
        Choice::new("email", "Email"),
        Choice::new("phone", "Phone"),
        Choice::new("sms", "Text message"),
    ]
}

fn default_interests() -> Vec<Choice> {
    vec![
        Choice::new("art", "Art"),
        Choice::new("music", "Music"),
        Choice::new("sports", "Sports"),
        Choice::new("tech", "Technology"),
        Choice::new("travel", "Travel"),
    ]
}
