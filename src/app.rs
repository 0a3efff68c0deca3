//! Application core: key dispatch, the tick loop, and server calls

use crate::client::{ApiClientTrait, ClientError};
use crate::contract::{CurrentUser, HealthResponse};
use crate::form::{Choice, Control, FieldValue, FORM_BUTTONS};
use crate::state::{AppState, Overlay, View};
use anyhow::Result;
use chrono::{Days, Local, Months, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Account the server panel signs in with
const DEMO_USERNAME: &str = "demo";
const DEMO_PASSWORD: &str = "fieldwork";

/// A finished server call, delivered to the tick loop by a spawned task
enum NetEvent {
    Health(Result<HealthResponse, ClientError>),
    User(Result<CurrentUser, ClientError>),
    Search(Result<Vec<Choice>, ClientError>),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client the views talk to the server through
    client: Arc<dyn ApiClientTrait>,
    /// Sender cloned into spawned request tasks
    events_tx: mpsc::UnboundedSender<NetEvent>,
    /// Finished requests, drained every tick
    events_rx: mpsc::UnboundedReceiver<NetEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance talking to the given client
    pub fn new(client: Arc<dyn ApiClientTrait>, server_address: impl Into<String>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState {
                server_address: server_address.into(),
                ..AppState::default()
            },
            client,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Probe health and the sample user in the background. Results land on
    /// a later tick via the event channel; failures read as "unreachable"
    /// and "signed out" on the server panel.
    pub fn refresh_server_state(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(NetEvent::Health(client.health().await));
        });
        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(NetEvent::User(client.current_user().await));
        });
    }

    /// Advance animations, fire due combobox lookups, and apply finished
    /// requests. Called once per poll interval by the event loop.
    pub fn tick(&mut self) {
        self.state.advance_tick();
        if let Some(query) = self.state.take_due_lookup() {
            if let Overlay::Combo { loading, .. } = &mut self.state.overlay {
                *loading = true;
            }
            let client = Arc::clone(&self.client);
            let tx = self.events_tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(NetEvent::Search(client.search_options(&query).await));
            });
        }
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: NetEvent) {
        match event {
            NetEvent::Health(result) => self.state.health = result.ok(),
            NetEvent::User(result) => self.state.user = result.ok(),
            NetEvent::Search(Ok(results)) => {
                if let Overlay::Combo {
                    results: shown,
                    highlight,
                    loading,
                    ..
                } = &mut self.state.overlay
                {
                    *shown = results;
                    *highlight = 0;
                    *loading = false;
                }
            }
            NetEvent::Search(Err(err)) => {
                if let Overlay::Combo { loading, .. } = &mut self.state.overlay {
                    *loading = false;
                }
                self.state.set_error(err.to_string());
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return Ok(());
        }

        // Any keypress retires the previous status line message
        self.state.clear_status();

        // Overlays are modal: they see every key until closed
        if self.state.overlay.is_open() {
            self.handle_overlay_key(key);
            return Ok(());
        }

        match key.code {
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.toggle_dark_mode();
                return Ok(());
            }
            KeyCode::Tab => {
                self.state.view = self.state.view.next();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.view = self.state.view.prev();
                return Ok(());
            }
            _ => {}
        }

        match self.state.view {
            View::Form => self.handle_form_key(key).await,
            View::Catalog => {
                self.handle_catalog_key(key);
                Ok(())
            }
            View::Server => self.handle_server_key(key).await,
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Down => self.state.form.next_field(),
            KeyCode::Left => {
                if self.state.form.is_buttons_row_active() {
                    self.state.form.prev_button();
                } else {
                    self.cycle_choice(-1);
                }
            }
            KeyCode::Right => {
                if self.state.form.is_buttons_row_active() {
                    self.state.form.next_button();
                } else {
                    self.cycle_choice(1);
                }
            }
            KeyCode::Enter if self.state.form.is_buttons_row_active() => {
                if FORM_BUTTONS[self.state.form.selected_button] == "Submit" {
                    self.submit_profile().await;
                } else {
                    self.state.form.reset();
                    self.state.set_status("Form cleared");
                }
            }
            KeyCode::Enter => self.activate_field(),
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.toggle_reveal();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                match self.state.form.active_field().map(|f| f.control) {
                    Some(Control::Checkbox | Control::Switch) if c == ' ' => {
                        self.state.form.toggle();
                    }
                    Some(Control::Input) => self.state.form.input_char(c),
                    _ => {}
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Enter on a field: open its overlay or flip its value
    fn activate_field(&mut self) {
        let Some((control, multiline)) = self
            .state
            .form
            .active_field()
            .map(|f| (f.control, f.multiline))
        else {
            return;
        };
        match control {
            Control::Combobox => self.open_combo(),
            Control::MultiSelect => self.state.overlay = Overlay::Multi { highlight: 0 },
            Control::DatePicker => self.open_calendar(),
            Control::Checkbox | Control::Switch => self.state.form.toggle(),
            Control::Input if multiline => self.state.form.input_char('\n'),
            _ => {}
        }
    }

    /// Step a select or radio field through its option set, wrapping around
    fn cycle_choice(&mut self, step: isize) {
        let Some(field) = self.state.form.active_field() else {
            return;
        };
        if !matches!(field.control, Control::Select | Control::Radio) {
            return;
        }
        let Some(options) = self.state.option_set(&field.name) else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let next = match field
            .value
            .as_choice()
            .and_then(|v| options.iter().position(|c| c.value == v))
        {
            Some(index) => (index as isize + step).rem_euclid(options.len() as isize) as usize,
            None if step < 0 => options.len() - 1,
            None => 0,
        };
        let value = options[next].value.clone();
        self.state.form.choose(Some(value));
    }

    fn open_combo(&mut self) {
        self.state.overlay = Overlay::Combo {
            query: String::new(),
            results: Vec::new(),
            highlight: 0,
            loading: false,
        };
    }

    /// Open the calendar on the field's current date, or today
    fn open_calendar(&mut self) {
        let cursor = self
            .state
            .form
            .active_field()
            .and_then(|f| f.value.as_date())
            .unwrap_or_else(|| Local::now().date_naive());
        self.state.overlay = Overlay::Calendar { cursor };
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) {
        match self.state.overlay {
            Overlay::Combo { .. } => self.handle_combo_key(key),
            Overlay::Multi { .. } => self.handle_multi_key(key),
            Overlay::Calendar { .. } => self.handle_calendar_key(key),
            Overlay::None => {}
        }
    }

    fn handle_combo_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.overlay = Overlay::None;
                self.state.pending_lookup = None;
            }
            KeyCode::Enter => self.commit_combo(),
            KeyCode::Up => {
                if let Overlay::Combo { highlight, .. } = &mut self.state.overlay {
                    *highlight = highlight.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if let Overlay::Combo {
                    results, highlight, ..
                } = &mut self.state.overlay
                {
                    if !results.is_empty() {
                        *highlight = (*highlight + 1).min(results.len() - 1);
                    }
                }
            }
            KeyCode::Backspace => {
                let Overlay::Combo { query, .. } = &mut self.state.overlay else {
                    return;
                };
                query.pop();
                let query = query.clone();
                self.state.schedule_lookup(query);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let Overlay::Combo { query, .. } = &mut self.state.overlay else {
                    return;
                };
                query.push(c);
                let query = query.clone();
                self.state.schedule_lookup(query);
            }
            _ => {}
        }
    }

    /// Commit the highlighted combobox result into the active field
    fn commit_combo(&mut self) {
        let choice = match &self.state.overlay {
            Overlay::Combo {
                results, highlight, ..
            } => results.get(*highlight).cloned(),
            _ => None,
        };
        self.state.overlay = Overlay::None;
        self.state.pending_lookup = None;
        if let Some(choice) = choice {
            self.state.remember_country(choice.clone());
            self.state.form.choose(Some(choice.value));
        }
    }

    fn handle_multi_key(&mut self, key: KeyEvent) {
        let options = self
            .state
            .form
            .active_field()
            .and_then(|f| self.state.option_set(&f.name))
            .map(<[Choice]>::len)
            .unwrap_or(0);
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.state.overlay = Overlay::None,
            KeyCode::Up => {
                if let Overlay::Multi { highlight } = &mut self.state.overlay {
                    *highlight = highlight.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if let Overlay::Multi { highlight } = &mut self.state.overlay {
                    if options > 0 {
                        *highlight = (*highlight + 1).min(options - 1);
                    }
                }
            }
            KeyCode::Char(' ') => {
                let highlight = match self.state.overlay {
                    Overlay::Multi { highlight } => highlight,
                    _ => return,
                };
                let id = self
                    .state
                    .form
                    .active_field()
                    .and_then(|f| self.state.option_set(&f.name))
                    .and_then(|options| options.get(highlight))
                    .map(|choice| choice.value.clone());
                if let Some(id) = id {
                    self.state.form.toggle_selection(&id);
                }
            }
            _ => {}
        }
    }

    fn handle_calendar_key(&mut self, key: KeyEvent) {
        let cursor = match &self.state.overlay {
            Overlay::Calendar { cursor } => *cursor,
            _ => return,
        };
        match key.code {
            KeyCode::Esc => self.state.overlay = Overlay::None,
            KeyCode::Enter => {
                self.state.overlay = Overlay::None;
                let name = self.state.form.active_field().map(|f| f.name.clone());
                if let Some(name) = name {
                    self.state.form.update(&name, FieldValue::Date(Some(cursor)));
                }
            }
            KeyCode::Left => self.move_calendar_cursor(cursor.checked_sub_days(Days::new(1))),
            KeyCode::Right => self.move_calendar_cursor(cursor.checked_add_days(Days::new(1))),
            KeyCode::Up => self.move_calendar_cursor(cursor.checked_sub_days(Days::new(7))),
            KeyCode::Down => self.move_calendar_cursor(cursor.checked_add_days(Days::new(7))),
            KeyCode::PageUp => self.move_calendar_cursor(cursor.checked_sub_months(Months::new(1))),
            KeyCode::PageDown => {
                self.move_calendar_cursor(cursor.checked_add_months(Months::new(1)));
            }
            _ => {}
        }
    }

    fn move_calendar_cursor(&mut self, next: Option<NaiveDate>) {
        if let (Some(next), Overlay::Calendar { cursor }) = (next, &mut self.state.overlay) {
            *cursor = next;
        }
    }

    /// Validate locally, then POST the profile
    async fn submit_profile(&mut self) {
        if !self.state.form.validate_all() {
            if let Some(index) = self.state.form.first_error() {
                self.state.form.active = index;
            }
            self.state.set_error("Please fix the highlighted fields");
            return;
        }
        let submission = self.state.submission();
        match self.client.submit_profile(&submission).await {
            Ok(saved) => self.state.set_status(format!("Profile saved ({})", saved.id)),
            Err(err) if err.is_unauthorized() => {
                self.state.user = None;
                self.state.set_error("Sign in on the Server tab before submitting");
            }
            Err(err) => self.state.set_error(err.to_string()),
        }
    }

    /// Sign in with the demo account
    async fn login(&mut self) {
        match self.client.login(DEMO_USERNAME, DEMO_PASSWORD).await {
            Ok(user) => {
                self.state.set_status(format!("Signed in as {}", user.name));
                self.state.user = Some(user);
            }
            Err(err) => self.state.set_error(err.to_string()),
        }
    }

    /// Clear the session
    async fn logout(&mut self) {
        match self.client.logout().await {
            Ok(()) => {
                self.state.user = None;
                self.state.set_status("Signed out");
            }
            Err(err) => self.state.set_error(err.to_string()),
        }
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.catalog_scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.catalog_scroll_up(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    async fn handle_server_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('l') => self.login().await,
            KeyCode::Char('o') => self.logout().await,
            KeyCode::Char('r') => self.refresh_server_state(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }
}
