//! Console adapter for development/testing

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc;

use crate::application::errors::BotError;
use crate::domain::traits::{Bot, BotInfo};

/// Chat id used for every console message
pub const CONSOLE_CHAT_ID: &str = "console";

/// Console bot adapter for local development
pub struct ConsoleAdapter {
    info: BotInfo,
    sender: Option<mpsc::Sender<String>>,
}

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self {
            info: BotInfo {
                id: "console".to_string(),
                name: "apifun-bot".to_string(),
                username: "console".to_string(),
            },
            sender: None,
        }
    }

    /// Send output lines to a channel instead of stdout
    pub fn with_sender(mut self, sender: mpsc::Sender<String>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Line reader over stdin
    pub fn input() -> Lines<BufReader<Stdin>> {
        BufReader::new(tokio::io::stdin()).lines()
    }

    async fn emit(&self, line: String) -> Result<(), BotError> {
        match &self.sender {
            Some(tx) => tx
                .send(line)
                .await
                .map_err(|e| BotError::Network(format!("console channel closed: {}", e))),
            None => {
                println!("{}", line);
                Ok(())
            }
        }
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode)");
        Ok(())
    }

    async fn send_message(&self, _chat_id: &str, text: &str) -> Result<String, BotError> {
        self.emit(format!("[BOT] {}", text)).await?;
        Ok("console_msg".to_string())
    }

    async fn send_photo(&self, _chat_id: &str, url: &str) -> Result<String, BotError> {
        self.emit(format!("[BOT] [photo] {}", url)).await?;
        Ok("console_msg".to_string())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
