use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::interface::TranslationProvider;

/// Client for the Google Cloud Translation v2 REST API
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    data: ApiData,
}

#[derive(Debug, Deserialize)]
struct ApiData {
    translations: Vec<ApiTranslation>,
}

#[derive(Debug, Deserialize)]
struct ApiTranslation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: String, api_key: String, timeout: Duration) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, anyhow::Error> {
        if source == target {
            return Ok(text.to_string());
        }

        // An empty source tells the remote API to auto-detect.
        let source = if source == "auto" { "" } else { source };
        let request = ApiRequest {
            q: text,
            source,
            target,
            format: "text",
        };

        debug!(
            "Requesting remote translation: source={:?}, target={}, chars={}",
            source,
            target,
            text.chars().count()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .context("translation API request failed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("translation API returned status {}", status));
        }

        let body: ApiResponse = response
            .json()
            .await
            .context("translation API returned an unexpected body")?;

        body.data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| anyhow!("translation API returned no translations"))
    }

    fn name(&self) -> &'static str {
        "google"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_response_shape() {
        let body = r#"{
            "data": {
                "translations": [
                    { "translatedText": "Hola mundo" }
                ]
            }
        }"#;
        let response: ApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.translations[0].translated_text, "Hola mundo");
    }

    #[test]
    fn serializes_api_request_fields() {
        let request = ApiRequest {
            q: "Hello",
            source: "",
            target: "es",
            format: "text",
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["q"], "Hello");
        assert_eq!(value["source"], "");
        assert_eq!(value["target"], "es");
        assert_eq!(value["format"], "text");
    }

    #[tokio::test]
    async fn identity_pair_skips_the_network() {
        // No server is listening on this endpoint; an identity pair must
        // return before any request is attempted.
        let translator = GoogleTranslator::new(
            "http://127.0.0.1:1".to_string(),
            "test-key".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();
        let result = translator.translate("Hello", "en", "en").await.unwrap();
        assert_eq!(result, "Hello");
    }
}
