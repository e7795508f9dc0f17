//! Configuration handling for the signup form host

use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the configured form variant
pub const VARIANT_ENV: &str = "SIGNUP_FORM_VARIANT";

/// Which value shape the host renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    #[default]
    Signup,
    Gendered,
}

impl FormVariant {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "signup" => Ok(Self::Signup),
            "gendered" => Ok(Self::Gendered),
            other => bail!("Unknown form variant: {other}"),
        }
    }
}

/// User configuration for the form host
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Form variant
    pub variant: Option<FormVariant>,
    /// Simulated submission delay
    pub submit_delay_ms: Option<u64>,
    /// Upper bound on an in-flight submission, 0 disables the bound
    pub submit_timeout_ms: Option<u64>,
    /// Disable the submit button while the form is invalid
    pub disable_when_invalid: Option<bool>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup-form", "signup-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        if let Ok(raw) = std::env::var(VARIANT_ENV) {
            config.variant = Some(FormVariant::parse(&raw)?);
        }
        Ok(config)
    }

    /// Load configuration from a specific file; missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn variant(&self) -> FormVariant {
        self.variant.unwrap_or_default()
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::submit::DEFAULT_DELAY)
    }

    pub fn submit_timeout(&self) -> Option<Duration> {
        match self.submit_timeout_ms {
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms)),
            None => Some(crate::form::DEFAULT_SUBMIT_TIMEOUT),
        }
    }

    pub fn disable_when_invalid(&self) -> bool {
        self.disable_when_invalid.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.variant(), FormVariant::Signup);
        assert_eq!(config.submit_delay(), Duration::from_millis(500));
        assert_eq!(config.submit_timeout(), Some(Duration::from_secs(10)));
        assert!(!config.disable_when_invalid());
    }

    #[test]
    fn test_zero_timeout_disables_bound() {
        let config = FormConfig {
            submit_timeout_ms: Some(0),
            ..Default::default()
        };
        assert_eq!(config.submit_timeout(), None);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.variant.is_none());
        assert!(parsed.submit_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_variant_and_ignore_extra_fields() {
        let json = r#"{"variant": "gendered", "submit_delay_ms": 600, "unknown_field": 1}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.variant(), FormVariant::Gendered);
        assert_eq!(parsed.submit_delay(), Duration::from_millis(600));
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!(FormVariant::parse("Gendered").unwrap(), FormVariant::Gendered);
        assert_eq!(FormVariant::parse(" signup ").unwrap(), FormVariant::Signup);
        assert!(FormVariant::parse("wizard").is_err());
    }

    #[test]
    fn test_save_then_load_from_file() {
        let dir = std::env::temp_dir().join(format!("signup-form-test-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.json");
        let config = FormConfig {
            variant: Some(FormVariant::Gendered),
            disable_when_invalid: Some(true),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = FormConfig::load_from(&path).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(loaded.variant(), FormVariant::Gendered);
        assert!(loaded.disable_when_invalid());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = std::env::temp_dir().join("signup-form-does-not-exist/config.json");
        let loaded = FormConfig::load_from(&path).unwrap();
        assert!(loaded.variant.is_none());
    }
}
