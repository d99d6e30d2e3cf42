//! Reply formatting for each content type

use crate::domain::entities::{CatImage, Fact, Joke, Quote, Reply};

pub fn joke(joke: &Joke) -> Reply {
    Reply::Text(format!("{} - {}", joke.setup, joke.punchline))
}

pub fn quote(quote: &Quote) -> Reply {
    Reply::Text(format!("{} - {}", quote.content, quote.author))
}

pub fn fact(fact: &Fact) -> Reply {
    Reply::Text(format!("Here is a random fact: {}", fact.text))
}

/// Cat images go out as a photo, not as text
pub fn cat(image: &CatImage) -> Reply {
    Reply::Photo(image.url.clone())
}
