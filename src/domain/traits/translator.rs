use async_trait::async_trait;

use crate::application::errors::ContentError;

/// Translates text into the language the implementation was configured with
#[async_trait]
pub trait Translator: Send + Sync {
    /// Provider name, for logs
    fn name(&self) -> &str;

    /// Target language code, e.g. "ru"
    fn target_language(&self) -> &str;

    async fn translate(&self, text: &str) -> Result<String, ContentError>;
}
