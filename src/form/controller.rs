//! Form controller: binds a store to validation, submission and rendering

use super::validator::{RequiredCredentials, Validator};
use crate::error::{FormError, FormResult};
use crate::state::{Credentials, FormErrors, FormState, FormStore, FormValues};
use crate::submit::{SimulatedSubmitter, Submitter};
use crate::ui::{BorderedFieldRenderer, ButtonRenderer, FieldRenderer, SubmitControlRenderer};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Paragraph, Wrap},
    Frame,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Default bound on how long a submission may stay in flight
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

/// A user-initiated submit request.
///
/// `submit` always marks it default-prevented; hosts that run the protocol
/// inline can read the flag afterwards before applying the input's ordinary
/// handling.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// How a submit attempt that was not rejected ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T: FormValues> {
    /// Validation failed; the collaborator was not called
    Invalid(FormErrors<T::Field>),
    /// The collaborator resolved
    Submitted,
}

/// Which part of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus<F> {
    Field(F),
    Submit,
}

/// Clears `loading` when the submission settles, fails, times out or is dropped
struct LoadingGuard<'a, T: FormValues> {
    store: &'a FormStore<T>,
}

impl<T: FormValues> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        self.store.set_loading(false);
    }
}

/// Orchestrates one form's lifecycle.
///
/// Cheap to clone; clones drive the same store, which lets a host run the
/// submission on a spawned task while it keeps drawing.
#[derive(Clone)]
pub struct FormController<T: FormValues> {
    store: FormStore<T>,
    validator: Arc<dyn Validator<T>>,
    submitter: Arc<dyn Submitter<T>>,
    field_renderer: Arc<dyn FieldRenderer<T>>,
    submit_renderer: Arc<dyn SubmitControlRenderer<T>>,
    submit_timeout: Option<Duration>,
    disable_when_invalid: bool,
}

impl<T> FormController<T>
where
    T: Credentials + Serialize,
{
    /// Controller with the default strategies: required username/password,
    /// simulated submission and the bordered renderers
    pub fn new(initial: T) -> Self {
        Self::with_strategies(
            initial,
            RequiredCredentials::new(),
            SimulatedSubmitter::default(),
        )
    }
}

impl<T: FormValues> FormController<T> {
    pub fn with_strategies(
        initial: T,
        validator: impl Validator<T> + 'static,
        submitter: impl Submitter<T> + 'static,
    ) -> Self {
        Self {
            store: FormStore::new(initial),
            validator: Arc::new(validator),
            submitter: Arc::new(submitter),
            field_renderer: Arc::new(BorderedFieldRenderer),
            submit_renderer: Arc::new(ButtonRenderer::default()),
            submit_timeout: Some(DEFAULT_SUBMIT_TIMEOUT),
            disable_when_invalid: false,
        }
    }

    pub fn with_validator(mut self, validator: impl Validator<T> + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    pub fn with_submitter(mut self, submitter: impl Submitter<T> + 'static) -> Self {
        self.submitter = Arc::new(submitter);
        self
    }

    pub fn with_field_renderer(mut self, renderer: impl FieldRenderer<T> + 'static) -> Self {
        self.field_renderer = Arc::new(renderer);
        self
    }

    pub fn with_submit_renderer(
        mut self,
        renderer: impl SubmitControlRenderer<T> + 'static,
    ) -> Self {
        self.submit_renderer = Arc::new(renderer);
        self
    }

    /// `None` waits for the collaborator unconditionally
    pub fn with_submit_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.submit_timeout = timeout;
        self
    }

    /// Disable the submit control while the current values fail validation
    pub fn with_disable_when_invalid(mut self, disable: bool) -> Self {
        self.disable_when_invalid = disable;
        self
    }

    pub fn store(&self) -> &FormStore<T> {
        &self.store
    }

    /// Run the validator against the current values without touching state
    pub fn validate(&self) -> FormErrors<T::Field> {
        self.validator.validate(&self.store.get_state().values)
    }

    /// Whether the submit control should accept input right now
    pub fn submit_enabled(&self) -> bool {
        let state = self.store.get_state();
        if state.loading {
            return false;
        }
        !self.disable_when_invalid || self.validator.validate(&state.values).is_empty()
    }

    /// Run the submission protocol for one submit event.
    ///
    /// Validation failures come back as `Ok(SubmitOutcome::Invalid)`.
    /// Errors mean the attempt was rejected (already in flight) or the
    /// collaborator failed; in the latter case `submit_error` is set on the
    /// store. `loading` is always false again once this returns or is dropped.
    pub async fn submit(&self, event: &mut SubmitEvent) -> FormResult<SubmitOutcome<T>> {
        event.prevent_default();
        let form = self.store.id();

        let state = self.store.get_state();
        if state.loading {
            tracing::warn!(%form, "Submit ignored, submission already in progress");
            return Err(FormError::AlreadySubmitting);
        }

        let values = state.values;
        let errors = self.validator.validate(&values);
        self.store.set_errors(errors.clone());
        if !errors.is_empty() {
            tracing::info!(%form, count = errors.len(), "Validation failed");
            return Ok(SubmitOutcome::Invalid(errors));
        }

        if !self.store.try_begin_submission() {
            tracing::warn!(%form, "Submit ignored, submission already in progress");
            return Err(FormError::AlreadySubmitting);
        }
        let _loading = LoadingGuard { store: &self.store };
        self.store.set_submit_error(None);

        tracing::info!(%form, "Submitting form");
        let result = match self.submit_timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, self.submitter.submit(&values)).await {
                    Ok(result) => result.map_err(|e| FormError::Submission(format!("{e:#}"))),
                    Err(_) => Err(FormError::TimedOut(limit)),
                }
            }
            None => self
                .submitter
                .submit(&values)
                .await
                .map_err(|e| FormError::Submission(format!("{e:#}"))),
        };

        match result {
            Ok(()) => {
                tracing::info!(%form, "Submission complete");
                Ok(SubmitOutcome::Submitted)
            }
            Err(err) => {
                tracing::warn!(%form, error = %err, "Submission failed");
                self.store.set_submit_error(Some(err.to_string()));
                Err(err)
            }
        }
    }

    /// Total rows needed to draw the whole form
    pub fn height(&self) -> u16 {
        let fields: u16 = T::fields()
            .iter()
            .map(|field| self.field_renderer.height(*field))
            .sum();
        fields + self.submit_renderer.height() + 1
    }

    /// Draw every field, the submit control and the form-level error
    pub fn render(&self, frame: &mut Frame, area: Rect, focus: Focus<T::Field>) {
        let state: FormState<T> = self.store.get_state();

        let mut constraints: Vec<Constraint> = T::fields()
            .iter()
            .map(|field| Constraint::Length(self.field_renderer.height(*field)))
            .collect();
        constraints.push(Constraint::Length(self.submit_renderer.height()));
        constraints.push(Constraint::Min(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, field) in T::fields().iter().enumerate() {
            let is_active = focus == Focus::Field(*field);
            self.field_renderer
                .render(frame, chunks[i], &state, *field, is_active);
        }

        let button_area = chunks[T::fields().len()];
        self.submit_renderer.render(
            frame,
            button_area,
            &state,
            focus == Focus::Submit,
            self.submit_enabled(),
        );

        if let Some(message) = &state.submit_error {
            let error = Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            ))
            .wrap(Wrap { trim: true });
            frame.render_widget(error, chunks[T::fields().len() + 1]);
        }
    }
}
