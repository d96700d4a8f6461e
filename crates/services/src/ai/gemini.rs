use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use samskrita_core::model::{
    GeneratorSettings, GrandDeck, GrandDeckDraft, GrandQuiz, GrandQuizDraft, TopicContent,
    TopicContentDraft,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use super::ContentGenerator;
use crate::error::GenerationError;

const JSON_MIME_TYPE: &str = "application/json";

/// `ContentGenerator` backed by the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiGenerator {
    client: Client,
    settings: GeneratorSettings,
}

impl GeminiGenerator {
    /// Build a generator with a request timeout taken from `settings`.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Http` if the HTTP client cannot be built.
    pub fn new(settings: GeneratorSettings) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs()))
            .build()?;
        Ok(Self { client, settings })
    }

    #[must_use]
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    async fn generate(
        &self,
        model: &str,
        prompt: String,
        schema: Option<Value>,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/models/{model}:generateContent", self.settings.base_url());
        let payload = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: schema,
            },
        };

        debug!(model, "requesting generated content");
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", self.settings.api_key())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        body.into_text().ok_or(GenerationError::EmptyResponse)
    }
}

#[async_trait]
impl ContentGenerator for GeminiGenerator {
    async fn generate_topic(&self, title: &str) -> Result<TopicContent, GenerationError> {
        let prompt = format!(
            "Act as a Sanskrit expert teacher. Based on the \"Bhaashaa Praveshah - I\" \
             curriculum, generate content for the topic: \"{title}\".\n\
             Include:\n\
             1. Summary in English.\n\
             2. Summary in Marathi.\n\
             3. 5 MCQs in Devanagari, each with exactly 4 options.\n\
             4. 5 Flashcards."
        );
        let text = self
            .generate(self.settings.topic_model(), prompt, Some(topic_schema()))
            .await?;
        parse_topic_payload(&text)
    }

    async fn generate_grand_quiz(&self) -> Result<GrandQuiz, GenerationError> {
        let prompt = "Generate 30 Sanskrit MCQs in Devanagari as JSON of the form \
                      {\"questions\": [{\"question\", \"options\" (4 strings), \
                      \"correctAnswer\", \"explanation\", \"difficulty\"}]}."
            .to_string();
        let text = self
            .generate(self.settings.grand_model(), prompt, None)
            .await?;
        parse_grand_quiz(&text)
    }

    async fn generate_grand_deck(&self) -> Result<GrandDeck, GenerationError> {
        let prompt = "Generate 30 Sanskrit Flashcards as JSON of the form \
                      {\"flashcards\": [{\"front\", \"back\"}]}."
            .to_string();
        let text = self
            .generate(self.settings.grand_model(), prompt, None)
            .await?;
        parse_grand_deck(&text)
    }
}

//
// ─── PAYLOAD PARSING ───────────────────────────────────────────────────────────
//

/// Parse and validate a generated topic payload.
///
/// # Errors
///
/// Returns `EmptyResponse` for blank text, `Malformed` for invalid JSON and
/// `Invalid` when the payload does not satisfy the content rules.
pub fn parse_topic_payload(text: &str) -> Result<TopicContent, GenerationError> {
    let draft: TopicContentDraft = serde_json::from_str(json_body(text)?)?;
    Ok(draft.validate()?)
}

/// Parse a grand quiz payload, wrapped (`{"questions": [...]}`) or bare.
///
/// # Errors
///
/// See [`parse_topic_payload`].
pub fn parse_grand_quiz(text: &str) -> Result<GrandQuiz, GenerationError> {
    let draft: GrandQuizDraft = serde_json::from_str(json_body(text)?)?;
    Ok(draft.validate()?)
}

/// Parse a grand deck payload, wrapped (`{"flashcards": [...]}`) or bare.
///
/// # Errors
///
/// See [`parse_topic_payload`].
pub fn parse_grand_deck(text: &str) -> Result<GrandDeck, GenerationError> {
    let draft: GrandDeckDraft = serde_json::from_str(json_body(text)?)?;
    Ok(draft.validate()?)
}

/// Trim whitespace and an optional Markdown code fence around the JSON body.
fn json_body(text: &str) -> Result<&str, GenerationError> {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        body = rest.strip_suffix("```").unwrap_or(rest).trim();
    }
    if body.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(body)
}

fn topic_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summaryEnglish": { "type": "STRING" },
            "summaryMarathi": { "type": "STRING" },
            "practiceQuestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "question": { "type": "STRING" },
                        "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "correctAnswer": { "type": "STRING" },
                        "explanation": { "type": "STRING" },
                        "difficulty": { "type": "STRING" }
                    },
                    "required": ["question", "options", "correctAnswer"]
                }
            },
            "flashcards": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "front": { "type": "STRING" },
                        "back": { "type": "STRING" }
                    },
                    "required": ["front", "back"]
                }
            }
        },
        "required": ["summaryEnglish", "summaryMarathi", "practiceQuestions", "flashcards"]
    })
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
