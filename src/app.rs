//! Application state and core logic

use crate::error::FormResult;
use crate::form::{Focus, FormController, SubmitEvent, SubmitOutcome};
use crate::state::{FieldKey, FormValues};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::task::JoinHandle;

/// Main application struct
pub struct App<T: FormValues> {
    /// The one form this host renders
    pub controller: FormController<T>,
    /// Which field or control receives keyboard input
    pub focus: Focus<T::Field>,
    /// Feedback shown under the form
    pub status_message: Option<String>,
    /// In-flight submission protocol
    submission: Option<JoinHandle<FormResult<SubmitOutcome<T>>>>,
    /// Whether the app should quit
    quit: bool,
}

impl<T: FormValues> App<T> {
    pub fn new(controller: FormController<T>) -> Self {
        let focus = T::fields()
            .first()
            .map(|field| Focus::Field(*field))
            .unwrap_or(Focus::Submit);
        Self {
            controller,
            focus,
            status_message: None,
            submission: None,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_some()
    }

    /// Focus order: declared fields, then the submit control
    fn focus_order() -> Vec<Focus<T::Field>> {
        T::fields()
            .iter()
            .map(|field| Focus::Field(*field))
            .chain(std::iter::once(Focus::Submit))
            .collect()
    }

    pub fn next_focus(&mut self) {
        let order = Self::focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + 1) % order.len()];
    }

    pub fn prev_focus(&mut self) {
        let order = Self::focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + order.len() - 1) % order.len()];
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.prev_focus(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.fire_submit();
            }
            KeyCode::Enter if self.focus == Focus::Submit => {
                self.fire_submit();
            }
            KeyCode::Enter => self.next_focus(),
            KeyCode::Esc => {
                if self.is_submitting() {
                    self.cancel_submission();
                } else {
                    self.quit = true;
                }
            }
            KeyCode::Left => self.cycle_choice(false),
            KeyCode::Right => self.cycle_choice(true),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.edit_active_field(|text| text.push(c))
            }
            KeyCode::Backspace => self.edit_active_field(|text| {
                text.pop();
            }),
            _ => {}
        }
        Ok(())
    }

    /// Start the submission protocol on a background task.
    /// Returns false if the submit control is currently disabled.
    pub fn fire_submit(&mut self) -> bool {
        if self.is_submitting() || !self.controller.submit_enabled() {
            tracing::debug!("Submit key ignored, control disabled");
            return false;
        }
        self.status_message = None;
        let controller = self.controller.clone();
        self.submission = Some(tokio::spawn(async move {
            let mut event = SubmitEvent::new();
            controller.submit(&mut event).await
        }));
        true
    }

    /// Abort the in-flight submission; the form becomes interactive again
    pub fn cancel_submission(&mut self) {
        if let Some(handle) = &self.submission {
            tracing::info!("Cancelling submission");
            handle.abort();
        }
    }

    /// Collect the result of a finished submission, if any
    pub async fn poll_submission(&mut self) -> Result<()> {
        let finished = self
            .submission
            .as_ref()
            .is_some_and(|handle| handle.is_finished());
        if !finished {
            return Ok(());
        }
        let Some(handle) = self.submission.take() else {
            return Ok(());
        };

        self.status_message = match handle.await {
            Ok(Ok(SubmitOutcome::Submitted)) => Some("Signed up!".to_string()),
            Ok(Ok(SubmitOutcome::Invalid(errors))) => {
                self.focus_first_error(errors.iter().map(|(field, _)| field));
                None
            }
            // Surfaced through the store's submit_error
            Ok(Err(_)) => None,
            Err(err) if err.is_cancelled() => Some("Submission cancelled".to_string()),
            Err(err) => return Err(err.into()),
        };
        Ok(())
    }

    fn focus_first_error(&mut self, mut fields: impl Iterator<Item = T::Field>) {
        if let Some(field) = fields.next() {
            self.focus = Focus::Field(field);
        }
    }

    fn edit_active_field(&mut self, edit: impl FnOnce(&mut String)) {
        let Focus::Field(field) = self.focus else {
            return;
        };
        let store = self.controller.store();
        let state = store.get_state();
        if state.loading || field.choices().is_some() {
            return;
        }
        let mut text = state.values.text(field);
        edit(&mut text);
        store.set_field(field, &text);
    }

    fn cycle_choice(&mut self, forward: bool) {
        let Focus::Field(field) = self.focus else {
            return;
        };
        let Some(choices) = field.choices() else {
            return;
        };
        let store = self.controller.store();
        let state = store.get_state();
        if state.loading || choices.is_empty() {
            return;
        }
        let current = state.values.text(field);
        let index = choices.iter().position(|c| *c == current).unwrap_or(0);
        let next = if forward {
            (index + 1) % choices.len()
        } else {
            (index + choices.len() - 1) % choices.len()
        };
        store.set_field(field, choices[next]);
    }
}
