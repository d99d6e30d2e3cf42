use async_trait::async_trait;

use crate::application::errors::ContentError;
use crate::domain::entities::{CatImage, Fact, Joke, Quote};

/// Source of random content. Each call performs one fetch against an external API.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn joke(&self) -> Result<Joke, ContentError>;

    async fn quote(&self) -> Result<Quote, ContentError>;

    async fn fact(&self) -> Result<Fact, ContentError>;

    /// First image of a search result
    async fn cat_image(&self) -> Result<CatImage, ContentError>;
}
