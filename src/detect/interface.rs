use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Detection request as received on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionRequest {
    pub text: Option<String>,
}

/// Detection response returned to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResponse {
    pub detected_language: String,
}

/// Language detector interface - maps raw text to a best-guess language code
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    /// Guess the language of `text`, returning an ISO code such as "en"
    async fn detect(&self, text: &str) -> Result<String, anyhow::Error>;
}
