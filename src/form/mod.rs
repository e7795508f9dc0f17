//! Form controller and validation strategies

mod controller;
mod validator;

pub use controller::{
    Focus, FormController, SubmitEvent, SubmitOutcome, DEFAULT_SUBMIT_TIMEOUT,
};
pub use validator::{RequiredCredentials, RequiredFields, Validator};
