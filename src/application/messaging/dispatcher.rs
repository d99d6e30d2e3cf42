//! Message dispatcher - Routes messages to command handlers and delivers the reply

use std::sync::Arc;

use crate::application::errors::BotError;
use crate::application::services::CommandService;
use crate::domain::entities::{Message, Reply};
use crate::domain::traits::Bot;

/// What happened to a dispatched message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Exactly one reply was delivered
    Replied,
    /// Not a command, or a command nobody handles
    Ignored,
}

/// Message dispatcher - one per process, shared by all polling tasks
pub struct MessageDispatcher {
    bot: Arc<dyn Bot>,
    commands: CommandService,
}

impl MessageDispatcher {
    pub fn new(bot: Arc<dyn Bot>, commands: CommandService) -> Self {
        Self { bot, commands }
    }

    /// Process a message: run its command handler, then send the reply
    pub async fn dispatch(&self, message: Message) -> Result<DispatchOutcome, BotError> {
        if let (Some(name), Some(sender)) = (message.content.command_name(), &message.sender) {
            tracing::debug!("[{}] /{} from {}", message.chat_id, name, sender.full_name());
        }

        let Some(reply) = self.commands.handle(&message).await else {
            tracing::debug!("[{}] Nothing to do for {:?}", message.chat_id, message.content);
            return Ok(DispatchOutcome::Ignored);
        };

        tracing::info!("Sending response to chat_id {}: {}", message.chat_id, reply.preview(100));
        self.deliver(&message.chat_id, &reply).await?;
        Ok(DispatchOutcome::Replied)
    }

    async fn deliver(&self, chat_id: &str, reply: &Reply) -> Result<String, BotError> {
        match reply {
            Reply::Text(text) => self.bot.send_message(chat_id, text).await,
            Reply::Photo(url) => self.bot.send_photo(chat_id, url).await,
        }
    }
}
