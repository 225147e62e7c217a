//! Application state and core logic

use crate::api::OptionProvider;
use crate::state::{ApiOption, AppState, FlowPhase, FormFocus, OptionKind, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Results delivered to the UI loop by background tasks
#[derive(Debug)]
pub enum AppEvent {
    OptionsFetched {
        kind: OptionKind,
        result: Result<Vec<ApiOption>, String>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Remote source of the country and city lists
    api: Arc<dyn OptionProvider>,
    /// Bound on each list fetch
    fetch_timeout: Duration,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Arc<dyn OptionProvider>, fetch_timeout: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            api,
            fetch_timeout,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Fetch every list that is not loaded yet, one task per list
    pub fn start_fetches(&self) {
        for kind in self.state.pending_lists() {
            self.spawn_fetch(kind);
        }
    }

    fn spawn_fetch(&self, kind: OptionKind) {
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        let timeout = self.fetch_timeout;

        tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, api.list_options(kind)).await {
                Ok(Ok(items)) => Ok(items),
                Ok(Err(err)) => {
                    tracing::warn!(?kind, "option fetch failed: {err:#}");
                    Err(format!("{err:#}"))
                }
                Err(_) => {
                    tracing::warn!(?kind, "option fetch timed out after {timeout:?}");
                    Err(format!("no response after {timeout:?}"))
                }
            };
            // Receiver is gone once the app has exited; the result is dropped
            let _ = tx.send(AppEvent::OptionsFetched { kind, result });
        });
    }

    /// Apply everything background tasks have reported so far
    pub fn drain_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::OptionsFetched { kind, result } => {
                if let Ok(items) = &result {
                    tracing::info!(?kind, count = items.len(), "options loaded");
                }
                self.state.apply_options(kind, result);
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return Ok(());
        }

        // Success dialog is modal
        if self.state.phase == FlowPhase::Submitted {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_success();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.submit();
        }

        match key.code {
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            _ => match self.state.form.focus() {
                FormFocus::Countries | FormFocus::Cities => self.handle_picker_key(key),
                FormFocus::Submit => return self.handle_submit_button_key(key),
                _ => self.handle_text_key(key),
            },
        }
        Ok(())
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form_input_char(c)
            }
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Enter | KeyCode::Down => self.state.next_form_field(),
            KeyCode::Up => self.state.prev_form_field(),
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.move_option_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_option_cursor_down(),
            KeyCode::Char(' ') | KeyCode::Enter => self.state.toggle_focused_option(),
            _ => {}
        }
    }

    fn handle_submit_button_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.submit()?,
            KeyCode::Up => self.state.prev_form_field(),
            _ => {}
        }
        Ok(())
    }

    /// Attempt submission; an accepted record is written to the log
    fn submit(&mut self) -> Result<()> {
        match self.state.submit() {
            SubmitOutcome::Disabled => {
                tracing::debug!("submit ignored: form incomplete");
            }
            SubmitOutcome::Invalid(errors) => {
                tracing::debug!(?errors, "submit rejected by validation");
            }
            SubmitOutcome::Accepted(submission) => {
                let record = serde_json::to_string(&submission)?;
                tracing::info!(submission = %record, "form submitted");
            }
        }
        Ok(())
    }

    /// Close the success dialog and start over
    fn dismiss_success(&mut self) {
        self.state.reset();
        tracing::debug!("form reset after submission");
    }
}
