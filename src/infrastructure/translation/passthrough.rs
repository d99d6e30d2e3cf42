use async_trait::async_trait;

use crate::application::errors::ContentError;
use crate::domain::traits::Translator;

/// Returns text unchanged. Used when translation is disabled.
#[derive(Debug, Clone, Default)]
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn target_language(&self) -> &str {
        "auto"
    }

    async fn translate(&self, text: &str) -> Result<String, ContentError> {
        Ok(text.to_string())
    }
}
