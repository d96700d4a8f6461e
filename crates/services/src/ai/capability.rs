//! Non-throwing detection of whether remote content generation can be used.

use std::collections::HashMap;
use std::env::{self, VarError};
use std::panic::{self, AssertUnwindSafe};

use samskrita_core::model::{GeneratorSettings, GeneratorSettingsDraft, SettingsError};
use thiserror::Error;
use tracing::{debug, warn};

/// Config slots probed for an API key, first non-blank wins.
pub const API_KEY_SLOTS: [&str; 3] = ["SAMSKRITA_API_KEY", "API_KEY", "GEMINI_API_KEY"];
pub const BASE_URL_SLOT: &str = "SAMSKRITA_AI_BASE_URL";
pub const TOPIC_MODEL_SLOT: &str = "SAMSKRITA_AI_MODEL";
pub const GRAND_MODEL_SLOT: &str = "SAMSKRITA_AI_GRAND_MODEL";
pub const TIMEOUT_SLOT: &str = "SAMSKRITA_AI_TIMEOUT_SECS";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config slot {key} is unreadable: {reason}")]
    Unreadable { key: String, reason: String },
}

/// Environment-provided configuration slots.
pub trait ConfigSource {
    /// # Errors
    ///
    /// Returns `ConfigError` if the slot exists but cannot be read.
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfigError>;
}

/// Reads slots from process environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfig;

impl ConfigSource for EnvConfig {
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(err @ VarError::NotUnicode(_)) => Err(ConfigError::Unreadable {
                key: key.to_string(),
                reason: err.to_string(),
            }),
        }
    }
}

/// Fixed slots, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapConfig {
    slots: HashMap<String, String>,
}

impl MapConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }
}

impl ConfigSource for MapConfig {
    fn lookup(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.slots.get(key).cloned())
    }
}

#[derive(Debug, Error)]
enum ProbeFailure {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("{TIMEOUT_SLOT} is not a number: {0}")]
    Timeout(String),
}

/// Outcome of probing for remote generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorCapability {
    Available(GeneratorSettings),
    Unavailable,
}

impl GeneratorCapability {
    /// Probe `source` for usable generator settings.
    ///
    /// Never panics and never fails: any absence, read error, invalid value or
    /// panic inside the source yields `Unavailable`.
    #[must_use]
    pub fn probe(source: &dyn ConfigSource) -> Self {
        match panic::catch_unwind(AssertUnwindSafe(|| read_settings(source))) {
            Ok(Ok(settings)) => GeneratorCapability::Available(settings),
            Ok(Err(reason)) => {
                debug!(%reason, "content generation unavailable");
                GeneratorCapability::Unavailable
            }
            Err(_) => {
                warn!("config probe panicked; content generation unavailable");
                GeneratorCapability::Unavailable
            }
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::probe(&EnvConfig)
    }

    #[must_use]
    pub fn is_capable(&self) -> bool {
        matches!(self, GeneratorCapability::Available(_))
    }

    #[must_use]
    pub fn settings(&self) -> Option<&GeneratorSettings> {
        match self {
            GeneratorCapability::Available(settings) => Some(settings),
            GeneratorCapability::Unavailable => None,
        }
    }
}

fn read_settings(source: &dyn ConfigSource) -> Result<GeneratorSettings, ProbeFailure> {
    let mut api_key = None;
    for slot in API_KEY_SLOTS {
        if let Some(value) = source.lookup(slot)?
            && !value.trim().is_empty()
        {
            api_key = Some(value);
            break;
        }
    }

    let timeout_secs = match source.lookup(TIMEOUT_SLOT)? {
        Some(raw) if !raw.trim().is_empty() => Some(
            raw.trim()
                .parse::<u64>()
                .map_err(|_| ProbeFailure::Timeout(raw.clone()))?,
        ),
        _ => None,
    };

    let settings = GeneratorSettingsDraft {
        api_key,
        base_url: source.lookup(BASE_URL_SLOT)?,
        topic_model: source.lookup(TOPIC_MODEL_SLOT)?,
        grand_model: source.lookup(GRAND_MODEL_SLOT)?,
        timeout_secs,
    }
    .validate()?;
    Ok(settings)
}
