//! Domain layer - Core types with no knowledge of concrete services
//!
//! This layer contains:
//! - Entities: Users, messages, commands, provider payloads and replies
//! - Traits: Abstractions for infrastructure (Bot, ContentProvider, Translator)

pub mod entities;
pub mod traits;
