//! HTTP content providers - jokes, quotes, facts and cat pictures

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::application::errors::ContentError;
use crate::domain::entities::{CatImage, Fact, Joke, Quote};
use crate::domain::traits::ContentProvider;
use crate::infrastructure::config::ProvidersConfig;

/// Talks to the public joke, quote, fact and cat APIs
pub struct PublicApiClient {
    client: Client,
    endpoints: ProvidersConfig,
}

impl PublicApiClient {
    pub fn new(endpoints: ProvidersConfig) -> Self {
        Self::with_client(Client::new(), endpoints)
    }

    pub fn with_client(client: Client, endpoints: ProvidersConfig) -> Self {
        Self { client, endpoints }
    }

    /// GET `url` and decode the JSON body into `T`
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ContentError> {
        tracing::debug!("GET {}", url);

        let response = self.client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ContentError::network(url, e))?;

        if !response.status().is_success() {
            return Err(ContentError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ContentError::network(url, e))?;

        serde_json::from_str(&body).map_err(|e| ContentError::parse(url, e))
    }
}

#[async_trait]
impl ContentProvider for PublicApiClient {
    async fn joke(&self) -> Result<Joke, ContentError> {
        self.get_json(&self.endpoints.joke_url).await
    }

    async fn quote(&self) -> Result<Quote, ContentError> {
        self.get_json(&self.endpoints.quote_url).await
    }

    async fn fact(&self) -> Result<Fact, ContentError> {
        self.get_json(&self.endpoints.fact_url).await
    }

    async fn cat_image(&self) -> Result<CatImage, ContentError> {
        let url = &self.endpoints.cat_url;
        let images: Vec<CatImage> = self.get_json(url).await?;
        images
            .into_iter()
            .next()
            .ok_or_else(|| ContentError::parse(url.as_str(), "empty image list"))
    }
}
