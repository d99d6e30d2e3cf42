//! Google Translate through the public `translate_a/single` endpoint

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::application::errors::ContentError;
use crate::domain::traits::Translator;
use crate::infrastructure::config::TranslationConfig;

/// Texts of this many characters or more are rejected
pub const MAX_CHARS: usize = 5000;

/// Google Translate client
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
    source: String,
    target: String,
}

impl GoogleTranslator {
    pub fn new(config: &TranslationConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &TranslationConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            source: config.source_language.clone(),
            target: config.target_language.clone(),
        }
    }
}

/// Joins the translated segments of a `translate_a/single` response.
///
/// The body looks like `[[["Привет","Hello",null,null,10], ...], null, "en", ...]`.
pub fn parse_response(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    (!text.trim().is_empty()).then_some(text)
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    fn target_language(&self) -> &str {
        &self.target
    }

    async fn translate(&self, text: &str) -> Result<String, ContentError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }
        if text.chars().count() >= MAX_CHARS {
            return Err(ContentError::Translation(format!(
                "text must be shorter than {} characters",
                MAX_CHARS
            )));
        }

        let response = self.client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source.as_str()),
                ("tl", self.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| ContentError::Translation(format!("provider unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(ContentError::Translation(format!(
                "provider returned HTTP {}",
                response.status().as_u16()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ContentError::Translation(format!("unreadable response: {}", e)))?;

        let translated = parse_response(&body)
            .ok_or_else(|| ContentError::Translation("provider returned no text".to_string()))?;

        tracing::debug!("Translated {} chars to {}", text.len(), self.target);
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_response_joins_segments() {
        let body = json!([
            [["Привет. ", "Hello. ", null, null, 10], ["Как дела?", "How are you?", null, null, 10]],
            null,
            "en"
        ]);
        assert_eq!(parse_response(&body).as_deref(), Some("Привет. Как дела?"));
    }

    #[test]
    fn test_parse_response_rejects_empty() {
        assert_eq!(parse_response(&json!([[], null, "en"])), None);
        assert_eq!(parse_response(&json!({"error": "nope"})), None);
        assert_eq!(parse_response(&json!([[["", "Hello"]]])), None);
    }

    #[tokio::test]
    async fn test_blank_and_oversized_text_skip_network() {
        let config = TranslationConfig {
            endpoint: "http://127.0.0.1:9/unreachable".to_string(),
            ..TranslationConfig::default()
        };
        let translator = GoogleTranslator::new(&config);

        assert_eq!(translator.translate("  ").await.unwrap(), "  ");

        let long = "a".repeat(MAX_CHARS + 1);
        assert!(matches!(
            translator.translate(&long).await,
            Err(ContentError::Translation(_))
        ));

        let at_limit = "б".repeat(MAX_CHARS);
        assert!(matches!(
            translator.translate(&at_limit).await,
            Err(ContentError::Translation(_))
        ));
    }
}
