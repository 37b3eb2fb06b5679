use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Translation request as received on the wire.
/// `source_language` defaults to "auto" when the field is omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: Option<String>,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    pub target_language: Option<String>,
}

fn default_source_language() -> String {
    "auto".to_string()
}

/// Translation response returned to the client.
/// `detected_language` is set only when the request asked for "auto".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub translated_text: String,
    pub detected_language: Option<String>,
}

/// Translation provider interface - mock or remote API
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` from a concrete `source` code to `target`.
    /// Pure per call: no caching, no retries.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, anyhow::Error>;

    /// Short name for logs and the health endpoint
    fn name(&self) -> &'static str;
}
