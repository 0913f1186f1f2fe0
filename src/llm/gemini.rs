use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::completion_interface::{CompletionClient, PromptPart, ProviderError};
use crate::config::Config;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Gemini `generateContent` client.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        info!(
            "Initialized GeminiClient: model={}, base_url={}",
            config.model, config.base_url
        );
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn generate(&self, parts: &[PromptPart]) -> Result<String, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        // Roles are forwarded verbatim; the adapter does not remap them.
        let body = GenerateContentRequest {
            contents: parts
                .iter()
                .map(|part| Content {
                    role: part.role.as_str().to_string(),
                    parts: vec![Part {
                        text: part.text.clone(),
                    }],
                })
                .collect(),
        };

        debug!("Sending {} content entries to Gemini", parts.len());

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            return Err(ProviderError(format!(
                "provider returned {}: {}",
                status, message
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        extract_text(parsed)
    }
}

/// Pull the generated text out of a successful response. A response with no
/// candidates, or one whose candidate carries no text, is a provider error;
/// the relay never returns an empty assistant message.
fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<String>()
        })
        .ok_or_else(|| ProviderError("provider response contained no candidates".to_string()))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(ProviderError(
            "provider response contained no generated text".to_string(),
        ));
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn request_serializes_roles_verbatim() {
        let body = GenerateContentRequest {
            contents: vec![
                Content {
                    role: Role::User.as_str().to_string(),
                    parts: vec![Part {
                        text: "hello".to_string(),
                    }],
                },
                Content {
                    role: Role::Assistant.as_str().to_string(),
                    parts: vec![Part {
                        text: "hi there".to_string(),
                    }],
                },
            ],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["contents"][1]["role"], "assistant");
    }

    #[test]
    fn response_parses_candidate_text() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Answer "}, {"text": "text"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(extract_text(parsed).unwrap(), "Answer text");
    }

    #[test]
    fn candidate_without_parts_is_a_provider_error() {
        let raw = r#"{"candidates": [{"content": {"role": "model"}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert!(extract_text(parsed).is_err());
    }

    #[test]
    fn whitespace_only_text_is_a_provider_error() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "  \n "}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert!(extract_text(parsed).is_err());
    }

    #[test]
    fn missing_candidates_is_a_provider_error() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_text(parsed).is_err());
    }

    #[test]
    fn error_body_parses_provider_message() {
        let raw = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        let parsed: ErrorBody = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.error.message, "API key not valid");
    }
}
