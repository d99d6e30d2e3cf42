//! Test doubles shared by the integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use apifun_bot::application::errors::{BotError, ContentError};
use apifun_bot::application::messaging::MessageDispatcher;
use apifun_bot::application::services::{CommandService, ContentService};
use apifun_bot::domain::entities::{CatImage, Fact, Joke, Quote};
use apifun_bot::domain::traits::{Bot, BotInfo, ContentProvider, Translator};

/// One outbound transport call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: String, text: String },
    Photo { chat_id: String, url: String },
}

/// Bot that records what it was asked to send
#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingBot {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { text, .. } => Some(text),
                Sent::Photo { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn start(&self) -> Result<(), BotError> {
        Ok(())
    }

    async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, BotError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(Sent::Text { chat_id: chat_id.to_string(), text: text.to_string() });
        Ok(sent.len().to_string())
    }

    async fn send_photo(&self, chat_id: &str, url: &str) -> Result<String, BotError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(Sent::Photo { chat_id: chat_id.to_string(), url: url.to_string() });
        Ok(sent.len().to_string())
    }

    fn bot_info(&self) -> BotInfo {
        BotInfo {
            id: "1".to_string(),
            name: "Recorder".to_string(),
            username: "recorder_bot".to_string(),
        }
    }
}

/// Content provider returning fixed payloads, or failing every call
pub struct StubProvider {
    pub failure: Option<String>,
    pub cats: Vec<CatImage>,
}

impl Default for StubProvider {
    fn default() -> Self {
        Self {
            failure: None,
            cats: vec![
                CatImage { url: "https://cdn2.thecatapi.com/images/first.jpg".to_string() },
                CatImage { url: "https://cdn2.thecatapi.com/images/second.jpg".to_string() },
            ],
        }
    }
}

impl StubProvider {
    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::default() }
    }

    fn check(&self, what: &str) -> Result<(), ContentError> {
        match &self.failure {
            Some(message) => Err(ContentError::network(format!("https://stub/{}", what), message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContentProvider for StubProvider {
    async fn joke(&self) -> Result<Joke, ContentError> {
        self.check("joke")?;
        Ok(Joke {
            setup: "Why did the chicken cross the road?".to_string(),
            punchline: "To get to the other side.".to_string(),
        })
    }

    async fn quote(&self) -> Result<Quote, ContentError> {
        self.check("quote")?;
        Ok(Quote { content: "Stay hungry".to_string(), author: "Steve Jobs".to_string() })
    }

    async fn fact(&self) -> Result<Fact, ContentError> {
        self.check("fact")?;
        Ok(Fact { text: "Honey never spoils.".to_string() })
    }

    async fn cat_image(&self) -> Result<CatImage, ContentError> {
        self.check("cat")?;
        self.cats
            .first()
            .cloned()
            .ok_or_else(|| ContentError::parse("https://stub/cat", "empty image list"))
    }
}

/// Returns text unchanged
pub struct IdentityTranslator;

#[async_trait]
impl Translator for IdentityTranslator {
    fn name(&self) -> &str {
        "identity"
    }

    fn target_language(&self) -> &str {
        "en"
    }

    async fn translate(&self, text: &str) -> Result<String, ContentError> {
        Ok(text.to_string())
    }
}

/// Upper-cases text so tests can see which fields were translated
pub struct ShoutingTranslator;

#[async_trait]
impl Translator for ShoutingTranslator {
    fn name(&self) -> &str {
        "shouting"
    }

    fn target_language(&self) -> &str {
        "en-US"
    }

    async fn translate(&self, text: &str) -> Result<String, ContentError> {
        Ok(text.to_uppercase())
    }
}

/// Always fails
pub struct BrokenTranslator;

#[async_trait]
impl Translator for BrokenTranslator {
    fn name(&self) -> &str {
        "broken"
    }

    fn target_language(&self) -> &str {
        "ru"
    }

    async fn translate(&self, _text: &str) -> Result<String, ContentError> {
        Err(ContentError::Translation("provider returned no text".to_string()))
    }
}

/// Dispatcher with the default command set, wired to a recording bot
pub fn dispatcher_with(
    provider: impl ContentProvider + 'static,
    translator: impl Translator + 'static,
    reply_to_unknown: bool,
) -> (Arc<RecordingBot>, MessageDispatcher) {
    let bot = Arc::new(RecordingBot::default());
    let content = Arc::new(ContentService::new(Arc::new(provider), Arc::new(translator)));

    let mut commands = CommandService::new().with_unknown_reply(reply_to_unknown);
    commands.register_defaults(content);

    let dispatcher = MessageDispatcher::new(bot.clone(), commands);
    (bot, dispatcher)
}

pub fn dispatcher() -> (Arc<RecordingBot>, MessageDispatcher) {
    dispatcher_with(StubProvider::default(), IdentityTranslator, false)
}
