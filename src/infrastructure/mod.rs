//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Platform integrations (Telegram, console)
//! - Content: HTTP clients for the content APIs
//! - Translation: Translator implementations

pub mod config;
pub mod adapters;
pub mod content;
pub mod translation;
