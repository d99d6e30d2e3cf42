use std::future::Future;
use std::pin::Pin;

use super::{Message, Reply};
use crate::application::errors::ContentError;

/// Future returned by a fallible command handler
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<Reply, ContentError>> + Send>>;

/// How a command produces its reply
pub enum Handler {
    /// Pure string construction; cannot fail and is not wrapped by the error boundary.
    Plain(Box<dyn Fn(&Message) -> Reply + Send + Sync>),
    /// Talks to external services; always runs inside the error boundary.
    Fallible(Box<dyn Fn(Message) -> HandlerFuture + Send + Sync>),
}

/// Represents a bot command
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    pub handler: Handler,
}

impl Command {
    /// Command answered by pure string construction
    pub fn plain<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Message) -> Reply + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: None,
            handler: Handler::Plain(Box::new(handler)),
        }
    }

    /// Command that reaches external services
    pub fn fallible<F, Fut>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Message) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Reply, ContentError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: None,
            handler: Handler::Fallible(Box::new(move |msg| -> HandlerFuture {
                Box::pin(handler(msg))
            })),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn matches(&self, input: &str) -> bool {
        self.name.eq_ignore_ascii_case(input)
    }
}

/// Command registry, kept in registration order
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, replacing any earlier one with the same name
    pub fn register(&mut self, command: Command) {
        match self.commands.iter_mut().find(|c| c.name == command.name) {
            Some(existing) => *existing = command,
            None => self.commands.push(command),
        }
    }

    pub fn find(&self, input: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.matches(input))
    }

    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }
}
