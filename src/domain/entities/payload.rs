//! Payloads returned by the content providers

use serde::{Deserialize, Serialize};

/// `{setup, punchline}` from the joke API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

/// `{content, author}` from the quote API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

/// `{text}` from the useless facts API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Fact {
    pub text: String,
}

/// One element of the cat API search result
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatImage {
    pub url: String,
}
