//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod content;
pub mod translator;

pub use bot::{Bot, BotInfo};
pub use content::ContentProvider;
pub use translator::Translator;
