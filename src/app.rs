//! Application state and core logic

use crate::client::{CvParserClient, HttpCvParserClient};
use crate::config::TuiConfig;
use crate::platform;
use crate::state::{AppState, FormSlot};
use crate::submit::{begin_submission, finish_submission, SubmitOptions, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the parsing service
    client: Arc<dyn CvParserClient>,
    options: SubmitOptions,
    /// Whether the app should quit
    quit: bool,
    /// Advances while a submission is in flight
    pub spinner_frame: usize,
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
}

impl App {
    /// Create a new App from user configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let endpoint = config.endpoint();
        tracing::info!(%endpoint, "Using CV parsing service");
        let client = HttpCvParserClient::new(endpoint)?;
        let options = SubmitOptions {
            preserve_input_on_failure: config.preserve_input_on_failure(),
        };
        Ok(Self::with_client(
            Arc::new(client),
            options,
            platform::resolve_timezone(),
        ))
    }

    pub fn with_client(
        client: Arc<dyn CvParserClient>,
        options: SubmitOptions,
        timezone: String,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(timezone),
            client,
            options,
            quit: false,
            spinner_frame: 0,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.state.status.in_progress
    }

    /// Advance the spinner; called once per event-loop iteration
    pub fn tick(&mut self) {
        if self.is_submitting() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        } else {
            self.spinner_frame = 0;
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let slot = self.state.form.active_slot();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.start_submission(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Enter => match slot {
                FormSlot::CvPath => {
                    self.state.select_cv_from_input();
                }
                FormSlot::Submit => self.start_submission(),
                // Enter on a text field moves on, like a terminal form
                _ => self.state.next_form_field(),
            },
            KeyCode::Char(c) if !ctrl && slot.is_text_input() => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
    }

    /// Validate and, if clean, send the form on a background task.
    ///
    /// A submission already in flight does not block another one.
    fn start_submission(&mut self) {
        let Some(submission) = begin_submission(&mut self.state) else {
            return;
        };
        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = client.parse_cv(submission).await;
            // Receiver only goes away when the app is shutting down
            let _ = tx.send(outcome);
        });
    }

    /// Apply any finished submissions. Returns how many were applied.
    pub fn poll_submissions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
            applied += 1;
        }
        applied
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        finish_submission(
            &mut self.state,
            outcome,
            platform::resolve_timezone(),
            self.options,
        );
    }
}
