//! Generic form store and submission controller
//!
//! A [`FormStore`] owns one form's values, field errors and in-flight flag. A
//! [`FormController`] binds a store to a [`Validator`], a [`Submitter`] and
//! the ratatui renderers, and runs the validate, submit, settle protocol for
//! each submit event. Both are generic over the value shape, so the same
//! machinery drives a plain signup form and a signup-with-gender form.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod state;
pub mod submit;
pub mod ui;

pub use error::{FormError, FormResult};
pub use form::{
    Focus, FormController, RequiredCredentials, RequiredFields, SubmitEvent, SubmitOutcome,
    Validator,
};
pub use state::{
    Credentials, FieldKey, FormErrors, FormState, FormStore, FormValues, Gender,
    GenderedSignupValues, SignupValues,
};
pub use submit::{SimulatedSubmitter, Submitter};
