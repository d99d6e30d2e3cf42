//! apifun-bot - a chat bot that relays jokes, quotes, facts and cat pictures
//! from public APIs, translated into a configurable language.

pub mod domain;
pub mod application;
pub mod infrastructure;
