use async_trait::async_trait;
use thiserror::Error;

use crate::models::Role;

/// One role-tagged entry of the payload sent to the completion provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPart {
    pub role: Role,
    pub text: String,
}

/// Anything that went wrong talking to the provider: transport failure,
/// upstream rejection, or a response with no usable text. Opaque on purpose;
/// the adapter does not classify, retry, or back off.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError(err.to_string())
    }
}

/// Interface for a completion provider.
/// One outbound call per invocation; no streaming, no caching.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the assembled prompt and return the generated text,
    /// stripped of leading/trailing whitespace.
    async fn generate(&self, parts: &[PromptPart]) -> Result<String, ProviderError>;
}
