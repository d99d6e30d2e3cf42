use std::sync::Arc;

use super::ContentService;
use crate::application::messaging::guarded;
use crate::domain::entities::{Command, CommandRegistry, Handler, Message, Reply};

/// Reply to /help
pub const HELP_TEXT: &str = "This bot can run the commands: \n/start \n/help \n/joke \n/quote \n/fact \n/cat";

/// Reply to /start
pub fn greeting(name: &str) -> String {
    format!("Hello, {}! I am a bot that can use various APIs.", name)
}

/// Service for registering and executing commands
#[derive(Default)]
pub struct CommandService {
    registry: CommandRegistry,
    reply_to_unknown: bool,
}

impl CommandService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer unregistered commands instead of ignoring them
    pub fn with_unknown_reply(mut self, enabled: bool) -> Self {
        self.reply_to_unknown = enabled;
        self
    }

    pub fn register(&mut self, command: Command) {
        self.registry.register(command);
    }

    /// Register /start, /help, /joke, /quote, /fact and /cat
    pub fn register_defaults(&mut self, content: Arc<ContentService>) {
        self.register(Command::plain("start", |msg| Reply::Text(greeting(&msg.sender_name())))
            .with_description("Start the bot"));

        self.register(Command::plain("help", |_| Reply::text(HELP_TEXT))
            .with_description("Show help message"));

        let svc = Arc::clone(&content);
        self.register(Command::fallible("joke", move |_| {
            let svc = Arc::clone(&svc);
            async move { svc.joke().await }
        })
        .with_description("Get a random joke"));

        let svc = Arc::clone(&content);
        self.register(Command::fallible("quote", move |_| {
            let svc = Arc::clone(&svc);
            async move { svc.quote().await }
        })
        .with_description("Get a random quote"));

        let svc = Arc::clone(&content);
        self.register(Command::fallible("fact", move |_| {
            let svc = Arc::clone(&svc);
            async move { svc.fact().await }
        })
        .with_description("Get a random fact"));

        self.register(Command::fallible("cat", move |_| {
            let svc = Arc::clone(&content);
            async move { svc.cat().await }
        })
        .with_description("Get a random cat picture"));
    }

    /// Run the command carried by `message`.
    ///
    /// Returns `None` when there is nothing to send back.
    pub async fn handle(&self, message: &Message) -> Option<Reply> {
        let name = message.content.command_name()?;

        let Some(cmd) = self.registry.find(name) else {
            tracing::info!("[{}] Unknown command: /{}", message.chat_id, name);
            return self.reply_to_unknown.then(|| {
                Reply::Text(format!("Unknown command: /{}. Send /help to see what I can do.", name))
            });
        };

        let reply = match &cmd.handler {
            Handler::Plain(handler) => handler(message),
            Handler::Fallible(handler) => {
                guarded(&cmd.name, &message.chat_id, handler(message.clone())).await
            }
        };
        Some(reply)
    }

    /// `(name, description)` pairs, in registration order
    pub fn command_list(&self) -> Vec<(String, String)> {
        self.registry
            .all()
            .map(|c| (c.name.clone(), c.description.clone().unwrap_or_default()))
            .collect()
    }
}
