use std::sync::Arc;

use super::formatter;
use crate::application::errors::ContentError;
use crate::domain::entities::{Fact, Joke, Quote, Reply};
use crate::domain::traits::{ContentProvider, Translator};

/// Fetches content, translates every text field, then formats the reply
pub struct ContentService {
    provider: Arc<dyn ContentProvider>,
    translator: Arc<dyn Translator>,
}

impl ContentService {
    pub fn new(provider: Arc<dyn ContentProvider>, translator: Arc<dyn Translator>) -> Self {
        Self { provider, translator }
    }

    pub async fn joke(&self) -> Result<Reply, ContentError> {
        let joke = self.provider.joke().await?;
        let translated = Joke {
            setup: self.translator.translate(&joke.setup).await?,
            punchline: self.translator.translate(&joke.punchline).await?,
        };
        Ok(formatter::joke(&translated))
    }

    pub async fn quote(&self) -> Result<Reply, ContentError> {
        let quote = self.provider.quote().await?;
        let translated = Quote {
            content: self.translator.translate(&quote.content).await?,
            author: self.translator.translate(&quote.author).await?,
        };
        Ok(formatter::quote(&translated))
    }

    pub async fn fact(&self) -> Result<Reply, ContentError> {
        let fact = self.provider.fact().await?;
        let translated = Fact {
            text: self.translator.translate(&fact.text).await?,
        };
        Ok(formatter::fact(&translated))
    }

    pub async fn cat(&self) -> Result<Reply, ContentError> {
        let image = self.provider.cat_image().await?;
        Ok(formatter::cat(&image))
    }
}
