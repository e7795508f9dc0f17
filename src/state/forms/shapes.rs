//! Concrete value shapes: plain signup and signup with gender

use super::field::{Credentials, FieldKey, FormValues};
use serde::{Deserialize, Serialize, Serializer};

fn redact<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&"*".repeat(value.chars().count()))
}

// Plain signup

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignupField {
    Username,
    Password,
}

impl FieldKey for SignupField {
    fn name(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            Self::Username => "Enter username",
            Self::Password => "Enter password",
        }
    }

    fn is_secret(&self) -> bool {
        matches!(self, Self::Password)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupValues {
    pub username: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
}

impl SignupValues {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupPatch {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl FormValues for SignupValues {
    type Field = SignupField;
    type Patch = SignupPatch;

    fn fields() -> &'static [SignupField] {
        &[SignupField::Username, SignupField::Password]
    }

    fn merge(&mut self, patch: SignupPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
    }

    fn text(&self, field: SignupField) -> String {
        match field {
            SignupField::Username => self.username.clone(),
            SignupField::Password => self.password.clone(),
        }
    }

    fn parse_field(field: SignupField, raw: &str) -> Option<SignupPatch> {
        let value = Some(raw.to_string());
        Some(match field {
            SignupField::Username => SignupPatch {
                username: value,
                ..Default::default()
            },
            SignupField::Password => SignupPatch {
                password: value,
                ..Default::default()
            },
        })
    }
}

impl Credentials for SignupValues {
    const USERNAME: SignupField = SignupField::Username;
    const PASSWORD: SignupField = SignupField::Password;

    fn username(&self) -> &str {
        &self.username
    }

    fn password(&self) -> &str {
        &self.password
    }
}

// Signup with gender

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: &'static [&'static str] = &["male", "female"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GenderedField {
    Username,
    Password,
    Gender,
}

impl FieldKey for GenderedField {
    fn name(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::Gender => "gender",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
            Self::Gender => "Gender",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            Self::Username => "Enter username",
            Self::Password => "Enter password",
            Self::Gender => "",
        }
    }

    fn is_secret(&self) -> bool {
        matches!(self, Self::Password)
    }

    fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Gender => Some(Gender::ALL),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderedSignupValues {
    pub username: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderedPatch {
    pub username: Option<String>,
    pub password: Option<String>,
    pub gender: Option<Gender>,
}

impl FormValues for GenderedSignupValues {
    type Field = GenderedField;
    type Patch = GenderedPatch;

    fn fields() -> &'static [GenderedField] {
        &[
            GenderedField::Username,
            GenderedField::Password,
            GenderedField::Gender,
        ]
    }

    fn merge(&mut self, patch: GenderedPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
    }

    fn text(&self, field: GenderedField) -> String {
        match field {
            GenderedField::Username => self.username.clone(),
            GenderedField::Password => self.password.clone(),
            GenderedField::Gender => self.gender.as_str().to_string(),
        }
    }

    fn parse_field(field: GenderedField, raw: &str) -> Option<GenderedPatch> {
        let mut patch = GenderedPatch::default();
        match field {
            GenderedField::Username => patch.username = Some(raw.to_string()),
            GenderedField::Password => patch.password = Some(raw.to_string()),
            GenderedField::Gender => patch.gender = Some(Gender::parse(raw)?),
        }
        Some(patch)
    }
}

impl Credentials for GenderedSignupValues {
    const USERNAME: GenderedField = GenderedField::Username;
    const PASSWORD: GenderedField = GenderedField::Password;

    fn username(&self) -> &str {
        &self.username
    }

    fn password(&self) -> &str {
        &self.password
    }
}
