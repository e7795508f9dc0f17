//! Form field value objects
//!
//! A form's value shape is any struct implementing [`FormValues`]. Each shape
//! names its own field key enum, so an error map can only ever mention fields
//! the shape actually declares.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Key identifying one declared field of a value shape
pub trait FieldKey: Copy + Ord + Hash + Debug + Send + Sync + 'static {
    /// Machine name, as used in patches and logs
    fn name(&self) -> &'static str;

    /// Human label, also used in the "is required" message
    fn label(&self) -> &'static str;

    fn placeholder(&self) -> &'static str {
        ""
    }

    /// Whether the value should be masked when displayed
    fn is_secret(&self) -> bool {
        false
    }

    /// Closed set of legal values, for fields that are picked rather than typed
    fn choices(&self) -> Option<&'static [&'static str]> {
        None
    }
}

/// A caller-defined record of named scalar fields
pub trait FormValues: Clone + Debug + PartialEq + Send + Sync + 'static {
    type Field: FieldKey;

    /// Partial update; unset entries leave the current value untouched
    type Patch: Default + Debug + Clone + Send + Sync;

    /// Declared fields in display order
    fn fields() -> &'static [Self::Field];

    /// Shallow merge, set entries in `patch` win
    fn merge(&mut self, patch: Self::Patch);

    /// Display value of a single field
    fn text(&self, field: Self::Field) -> String;

    /// Build a single-field patch from raw input.
    /// Returns `None` when `raw` is not a legal value for `field`.
    fn parse_field(field: Self::Field, raw: &str) -> Option<Self::Patch>;
}

/// Value shapes that carry at least a username and a password
pub trait Credentials: FormValues {
    const USERNAME: Self::Field;
    const PASSWORD: Self::Field;

    fn username(&self) -> &str;
    fn password(&self) -> &str;
}

/// Field-scoped error messages. Absence of a key means no error for that field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors<F: FieldKey> {
    messages: BTreeMap<F, String>,
}

impl<F: FieldKey> Default for FormErrors<F> {
    fn default() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }
}

impl<F: FieldKey> FormErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// Builder-style insert
    pub fn with(mut self, field: F, message: impl Into<String>) -> Self {
        self.insert(field, message);
        self
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.messages.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl<F: FieldKey> FromIterator<(F, String)> for FormErrors<F> {
    fn from_iter<I: IntoIterator<Item = (F, String)>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

/// The message produced for an empty required field
pub fn required_message<F: FieldKey>(field: F) -> String {
    format!("{} is required", field.label())
}
