//! Form state and the store that owns it

use super::field::{FormErrors, FormValues};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

/// Identifies one form instance in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(Uuid);

impl FormId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Snapshot of one form: values, field errors and the in-flight flag
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<T: FormValues> {
    pub values: T,
    /// Result of the most recent validation pass only
    pub errors: FormErrors<T::Field>,
    /// True strictly between submission start and settlement
    pub loading: bool,
    /// Form-level error from the last failed submission
    pub submit_error: Option<String>,
    /// Bumped on every mutation
    pub revision: u64,
}

impl<T: FormValues> FormState<T> {
    pub fn new(values: T) -> Self {
        Self {
            values,
            errors: FormErrors::default(),
            loading: false,
            submit_error: None,
            revision: 0,
        }
    }
}

/// Owner of one form's mutable state.
///
/// Cloning yields another handle to the same state, so a submission running on
/// a spawned task and the host's draw loop observe the same values. Every
/// mutation notifies subscribers.
#[derive(Clone)]
pub struct FormStore<T: FormValues> {
    id: FormId,
    tx: Arc<watch::Sender<FormState<T>>>,
}

impl<T: FormValues> FormStore<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(FormState::new(initial));
        Self {
            id: FormId::new(),
            tx: Arc::new(tx),
        }
    }

    pub fn id(&self) -> FormId {
        self.id
    }

    /// Read-only snapshot of the current state
    pub fn get_state(&self) -> FormState<T> {
        self.tx.borrow().clone()
    }

    /// Merge a partial update into the current values
    pub fn set_values(&self, patch: T::Patch) {
        tracing::debug!(form = %self.id, ?patch, "set_values");
        self.mutate(|state| state.values.merge(patch));
    }

    /// Replace the whole error map
    pub fn set_errors(&self, errors: FormErrors<T::Field>) {
        tracing::debug!(form = %self.id, count = errors.len(), "set_errors");
        self.mutate(|state| state.errors = errors);
    }

    pub fn set_loading(&self, loading: bool) {
        tracing::debug!(form = %self.id, loading, "set_loading");
        self.mutate(|state| state.loading = loading);
    }

    pub fn set_submit_error(&self, message: Option<String>) {
        self.mutate(|state| state.submit_error = message);
    }

    /// Parse raw input for one field and merge it.
    /// Returns false (and leaves the state alone) if the input is rejected.
    pub fn set_field(&self, field: T::Field, raw: &str) -> bool {
        match T::parse_field(field, raw) {
            Some(patch) => {
                self.set_values(patch);
                true
            }
            None => false,
        }
    }

    /// Set `loading` only if it is currently false.
    /// Returns whether this call started the submission.
    pub fn try_begin_submission(&self) -> bool {
        self.tx.send_if_modified(|state| {
            if state.loading {
                return false;
            }
            state.loading = true;
            state.revision += 1;
            true
        })
    }

    /// Receiver that is marked changed after every mutation
    pub fn subscribe(&self) -> watch::Receiver<FormState<T>> {
        self.tx.subscribe()
    }

    fn mutate(&self, apply: impl FnOnce(&mut FormState<T>)) {
        self.tx.send_modify(|state| {
            apply(state);
            state.revision += 1;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SignupField, SignupPatch, SignupValues};
    use pretty_assertions::assert_eq;

    fn store() -> FormStore<SignupValues> {
        FormStore::new(SignupValues::default())
    }

    #[test]
    fn test_new_store_is_idle_and_clean() {
        let state = store().get_state();
        assert_eq!(state.values, SignupValues::default());
        assert!(state.errors.is_empty());
        assert!(!state.loading);
        assert_eq!(state.submit_error, None);
    }

    #[test]
    fn test_set_values_merges_partial_update() {
        let store = store();
        store.set_values(SignupPatch {
            username: Some("alice".into()),
            password: Some("secret".into()),
        });
        store.set_values(SignupPatch {
            password: Some("x".into()),
            ..Default::default()
        });
        let state = store.get_state();
        assert_eq!(state.values.username, "alice");
        assert_eq!(state.values.password, "x");
    }

    #[test]
    fn test_set_errors_replaces_whole_map() {
        let store = store();
        store.set_errors(
            FormErrors::new()
                .with(SignupField::Username, "Username is required")
                .with(SignupField::Password, "Password is required"),
        );
        store.set_errors(FormErrors::new().with(SignupField::Password, "Password is required"));
        let errors = store.get_state().errors;
        assert_eq!(errors.get(SignupField::Username), None);
        assert_eq!(errors.len(), 1);

        store.set_errors(FormErrors::new());
        assert!(store.get_state().errors.is_empty());
    }

    #[test]
    fn test_set_field_parses_and_merges() {
        let store = store();
        assert!(store.set_field(SignupField::Username, "bob"));
        assert_eq!(store.get_state().values.username, "bob");
        assert_eq!(store.get_state().values.password, "");
    }

    #[test]
    fn test_clones_share_state() {
        let store = store();
        let other = store.clone();
        other.set_loading(true);
        assert!(store.get_state().loading);
        assert_eq!(store.id(), other.id());
    }

    #[test]
    fn test_try_begin_submission_is_exclusive() {
        let store = store();
        assert!(store.try_begin_submission());
        assert!(!store.try_begin_submission());
        store.set_loading(false);
        assert!(store.try_begin_submission());
    }

    #[test]
    fn test_every_mutation_notifies_subscribers() {
        let store = store();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.set_loading(true);
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().loading);

        store.set_errors(FormErrors::new());
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn test_revision_counts_mutations() {
        let store = store();
        let before = store.get_state().revision;
        store.set_loading(true);
        store.set_loading(false);
        store.set_submit_error(Some("boom".into()));
        assert_eq!(store.get_state().revision, before + 3);
    }

    #[test]
    fn test_distinct_stores_have_distinct_ids() {
        assert_ne!(store().id(), store().id());
    }
}
