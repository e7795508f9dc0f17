//! Validation strategies

use crate::state::{required_message, Credentials, FormErrors, FormValues};
use std::marker::PhantomData;

/// Pure mapping from field values to field errors.
///
/// Validators are total: the same input always yields the same error map.
#[cfg_attr(test, mockall::automock)]
pub trait Validator<T: FormValues>: Send + Sync {
    fn validate(&self, values: &T) -> FormErrors<T::Field>;
}

impl<T, F> Validator<T> for F
where
    T: FormValues,
    F: Fn(&T) -> FormErrors<T::Field> + Send + Sync,
{
    fn validate(&self, values: &T) -> FormErrors<T::Field> {
        self(values)
    }
}

/// Default policy: username and password must be non-empty.
/// Any other field of the shape is optional.
pub struct RequiredCredentials<T> {
    _shape: PhantomData<fn(&T)>,
}

impl<T> RequiredCredentials<T> {
    pub fn new() -> Self {
        Self {
            _shape: PhantomData,
        }
    }
}

impl<T> Default for RequiredCredentials<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Credentials> Validator<T> for RequiredCredentials<T> {
    fn validate(&self, values: &T) -> FormErrors<T::Field> {
        let mut errors = FormErrors::new();
        if values.username().is_empty() {
            errors.insert(T::USERNAME, required_message(T::USERNAME));
        }
        if values.password().is_empty() {
            errors.insert(T::PASSWORD, required_message(T::PASSWORD));
        }
        errors
    }
}

/// Require every declared field of the shape to be non-empty
pub struct RequiredFields<T> {
    _shape: PhantomData<fn(&T)>,
}

impl<T> RequiredFields<T> {
    pub fn new() -> Self {
        Self {
            _shape: PhantomData,
        }
    }
}

impl<T> Default for RequiredFields<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FormValues> Validator<T> for RequiredFields<T> {
    fn validate(&self, values: &T) -> FormErrors<T::Field> {
        T::fields()
            .iter()
            .filter(|field| values.text(**field).is_empty())
            .map(|field| (*field, required_message(*field)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Gender, GenderedField, GenderedSignupValues, SignupField, SignupValues};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_both_empty_reports_both() {
        let errors = RequiredCredentials::new().validate(&SignupValues::default());
        assert_eq!(
            errors,
            FormErrors::new()
                .with(SignupField::Username, "Username is required")
                .with(SignupField::Password, "Password is required")
        );
    }

    #[test]
    fn test_each_empty_field_reported_alone() {
        let validator = RequiredCredentials::new();
        let errors = validator.validate(&SignupValues::new("", "secret"));
        assert_eq!(
            errors,
            FormErrors::new().with(SignupField::Username, "Username is required")
        );

        let errors = validator.validate(&SignupValues::new("alice", ""));
        assert_eq!(
            errors,
            FormErrors::new().with(SignupField::Password, "Password is required")
        );
    }

    #[test]
    fn test_both_present_is_valid() {
        let errors = RequiredCredentials::new().validate(&SignupValues::new("alice", "secret"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let validator = RequiredCredentials::new();
        let values = SignupValues::new("", "x");
        assert_eq!(validator.validate(&values), validator.validate(&values));
    }

    #[test]
    fn test_gender_is_not_required_by_default() {
        let values = GenderedSignupValues {
            username: "alice".into(),
            password: "secret".into(),
            gender: Gender::Female,
        };
        assert!(RequiredCredentials::new().validate(&values).is_empty());

        let errors = RequiredCredentials::new().validate(&GenderedSignupValues::default());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(GenderedField::Gender), None);
    }

    #[test]
    fn test_required_fields_checks_every_field() {
        let errors = RequiredFields::new().validate(&SignupValues::new("alice", ""));
        assert_eq!(
            errors,
            FormErrors::new().with(SignupField::Password, "Password is required")
        );
    }

    #[test]
    fn test_closures_are_validators() {
        let min_length = |values: &SignupValues| {
            let mut errors = FormErrors::new();
            if values.password.len() < 8 {
                errors.insert(SignupField::Password, "Password is too short");
            }
            errors
        };
        let errors = min_length.validate(&SignupValues::new("alice", "short"));
        assert_eq!(errors.get(SignupField::Password), Some("Password is too short"));
    }
}
