//! Remote lesson generation.

pub mod capability;
pub mod gemini;

use async_trait::async_trait;
use samskrita_core::model::{GrandDeck, GrandQuiz, TopicContent};

use crate::error::GenerationError;

pub use capability::{ConfigError, ConfigSource, EnvConfig, GeneratorCapability, MapConfig};
pub use gemini::GeminiGenerator;

/// Produces lesson material on demand.
///
/// Implementations return validated content; raw payloads never leave the
/// generator.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_topic(&self, title: &str) -> Result<TopicContent, GenerationError>;

    async fn generate_grand_quiz(&self) -> Result<GrandQuiz, GenerationError>;

    async fn generate_grand_deck(&self) -> Result<GrandDeck, GenerationError>;
}
