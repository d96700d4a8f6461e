use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TOPIC_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GRAND_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Validated connection settings for the remote content generator.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    api_key: String,
    base_url: String,
    topic_model: String,
    grand_model: String,
    timeout_secs: u64,
}

#[derive(Clone, Debug, Default)]
pub struct GeneratorSettingsDraft {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub topic_model: Option<String>,
    pub grand_model: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("api key is missing")]
    MissingApiKey,
    #[error("invalid base URL")]
    InvalidBaseUrl,
    #[error("timeout must be > 0")]
    InvalidTimeout,
}

impl GeneratorSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft, filling defaults for optional slots.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the key is blank, the base URL does not
    /// parse, or the timeout is zero.
    pub fn validate(self) -> Result<GeneratorSettings, SettingsError> {
        let api_key = normalize_optional(self.api_key).ok_or(SettingsError::MissingApiKey)?;
        let base_url =
            normalize_optional(self.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if Url::parse(&base_url).is_err() {
            return Err(SettingsError::InvalidBaseUrl);
        }
        let topic_model =
            normalize_optional(self.topic_model).unwrap_or_else(|| DEFAULT_TOPIC_MODEL.into());
        let grand_model =
            normalize_optional(self.grand_model).unwrap_or_else(|| DEFAULT_GRAND_MODEL.into());
        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(SettingsError::InvalidTimeout);
        }

        Ok(GeneratorSettings {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            topic_model,
            grand_model,
            timeout_secs,
        })
    }
}

impl GeneratorSettings {
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn topic_model(&self) -> &str {
        &self.topic_model
    }

    #[must_use]
    pub fn grand_model(&self) -> &str {
        &self.grand_model
    }

    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for GeneratorSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("topic_model", &self.topic_model)
            .field("grand_model", &self.grand_model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_optional_slots() {
        let settings = GeneratorSettingsDraft {
            api_key: Some(" key ".into()),
            ..GeneratorSettingsDraft::new()
        }
        .validate()
        .unwrap();

        assert_eq!(settings.api_key(), "key");
        assert_eq!(settings.base_url(), DEFAULT_BASE_URL);
        assert_eq!(settings.topic_model(), DEFAULT_TOPIC_MODEL);
        assert_eq!(settings.grand_model(), DEFAULT_GRAND_MODEL);
        assert_eq!(settings.timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn blank_key_is_missing() {
        let err = GeneratorSettingsDraft {
            api_key: Some("   ".into()),
            ..GeneratorSettingsDraft::new()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, SettingsError::MissingApiKey);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = GeneratorSettingsDraft {
            api_key: Some("key".into()),
            base_url: Some("not a url".into()),
            ..GeneratorSettingsDraft::new()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, SettingsError::InvalidBaseUrl);
    }

    #[test]
    fn trailing_slash_is_trimmed_and_key_redacted() {
        let settings = GeneratorSettingsDraft {
            api_key: Some("secret".into()),
            base_url: Some("http://localhost:8080/v1beta/".into()),
            ..GeneratorSettingsDraft::new()
        }
        .validate()
        .unwrap();
        assert_eq!(settings.base_url(), "http://localhost:8080/v1beta");
        assert!(!format!("{settings:?}").contains("secret"));
    }
}
