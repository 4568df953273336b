// src/analysis/mod.rs
//! Single-shot drawing analysis against a multimodal chat-completions API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4o-mini";
const MAX_TOKENS: u32 = 800;

/// Fixed instruction sent with every drawing. Asks for three headed
/// sections (mythological, scientific, cultural), answered in Spanish.
pub const ANALYSIS_PROMPT: &str = "\
Analiza este dibujo y proporciona:

1. **ANÁLISIS MITOLÓGICO**:
   - ¿Qué figuras mitológicas podrían estar representadas?
   - Significado simbólico en diferentes mitologías
   - Historias o leyendas relacionadas

2. **DATOS CIENTÍFICOS**:
   - Explicación científica si corresponde a fenómenos naturales
   - Curiosidades relevantes
   - Perspectiva histórica o antropológica

3. **INTERPRETACIÓN CULTURAL**:
   - Simbolismo en diferentes culturas
   - Representaciones artísticas similares

Responde en español, sé detallado pero conciso, separando claramente cada sección.";

/// Everything that can go wrong around the one external call. All variants
/// are recoverable by the user and surface as banners, never as a crash.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("missing API key")]
    MissingApiKey,

    #[error("missing drawing")]
    MissingDrawing,

    #[error("network error: {0}")]
    Network(String),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Debug, Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

fn build_request(image_data_uri: &str) -> ChatRequest<'_> {
    ChatRequest {
        model: MODEL,
        messages: vec![ChatMessage {
            role: "user",
            content: vec![
                ContentPart::Text {
                    text: ANALYSIS_PROMPT,
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image_data_uri,
                    },
                },
            ],
        }],
        max_tokens: MAX_TOKENS,
    }
}

/// Blocking client for the completions endpoint. One request per call,
/// no retries, no streaming.
pub struct AnalysisClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl AnalysisClient {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Point the client at a different endpoint. Tests use this with a
    /// local HTTP server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Send the drawing plus the fixed prompt, returning the model's text
    /// verbatim. Preconditions are validated here as well so the missing
    /// credential and missing drawing cases stay distinct errors.
    pub fn analyze(&self, api_key: &str, image_data_uri: &str) -> Result<String, AnalysisError> {
        if api_key.trim().is_empty() {
            return Err(AnalysisError::MissingApiKey);
        }
        if image_data_uri.is_empty() {
            return Err(AnalysisError::MissingDrawing);
        }

        log::info!("requesting drawing analysis from {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&build_request(image_data_uri))
            .send()
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            log::warn!("analysis request failed with status {}", status);
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AnalysisError::MalformedResponse("response had no content".into()))
    }
}

impl Default for AnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_has_the_expected_shape() {
        let request = build_request("data:image/png;base64,QUJD");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["max_tokens"], 800);

        let content = &value["messages"][0]["content"];
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(content[0]["type"], "text");
        assert_eq!(content[0]["text"], ANALYSIS_PROMPT);
        assert_eq!(content[1]["type"], "image_url");
        assert_eq!(content[1]["image_url"]["url"], "data:image/png;base64,QUJD");
    }

    #[test]
    fn missing_preconditions_are_distinct_errors() {
        let client = AnalysisClient::with_endpoint("http://127.0.0.1:1/unused");

        let err = client.analyze("", "data:image/png;base64,QUJD").unwrap_err();
        assert!(matches!(err, AnalysisError::MissingApiKey));

        let err = client.analyze("sk-test", "").unwrap_err();
        assert!(matches!(err, AnalysisError::MissingDrawing));
    }

    #[test]
    fn whitespace_key_counts_as_missing() {
        let client = AnalysisClient::with_endpoint("http://127.0.0.1:1/unused");
        let err = client.analyze("   ", "data:image/png;base64,QUJD").unwrap_err();
        assert!(matches!(err, AnalysisError::MissingApiKey));
    }

    #[test]
    fn prompt_requests_all_three_sections() {
        assert!(ANALYSIS_PROMPT.contains("ANÁLISIS MITOLÓGICO"));
        assert!(ANALYSIS_PROMPT.contains("DATOS CIENTÍFICOS"));
        assert!(ANALYSIS_PROMPT.contains("INTERPRETACIÓN CULTURAL"));
        assert!(ANALYSIS_PROMPT.contains("Responde en español"));
    }
}
