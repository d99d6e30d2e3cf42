//! Message parser - Parses raw chat text into structured messages

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::domain::entities::{Content, Message, User};

/// `/name`, optionally `/name@BotName`, optionally followed by arguments
static COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^/([A-Za-z0-9_]+)(?:@([A-Za-z0-9_]+))?(?:\s+(.*))?$")
        .expect("command pattern is valid")
});

/// Parses incoming text into Message objects
pub struct MessageParser {
    bot_username: Option<String>,
    platform: String,
}

impl MessageParser {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            bot_username: None,
            platform: platform.into(),
        }
    }

    /// Only accept `/cmd@name` mentions addressed to this username
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    /// Parse a text message
    pub fn parse(&self, chat_id: impl Into<String>, text: impl Into<String>, sender: Option<User>) -> Message {
        let text = text.into();
        let content = self.parse_content(&text).unwrap_or(Content::Text(text));

        Message::new(chat_id, content)
            .with_sender_opt(sender)
            .with_platform(self.platform.clone())
    }

    fn parse_content(&self, text: &str) -> Option<Content> {
        let caps = COMMAND_RE.captures(text.trim())?;
        let name = caps.get(1)?.as_str().to_lowercase();

        if let (Some(mention), Some(own)) = (caps.get(2), &self.bot_username) {
            if !mention.as_str().eq_ignore_ascii_case(own) {
                // Command meant for another bot in the same group
                return None;
            }
        }

        let args = caps
            .get(3)
            .map(|m| m.as_str().split_whitespace().map(|s| s.to_string()).collect())
            .unwrap_or_default();

        Some(Content::Command { name, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> MessageParser {
        MessageParser::new("test").with_bot_username("FunBot")
    }

    #[test]
    fn test_parse_plain_command() {
        let msg = parser().parse("1", "/joke", None);
        assert_eq!(msg.content, Content::Command { name: "joke".to_string(), args: vec![] });
        assert_eq!(msg.platform, "test");
    }

    #[test]
    fn test_parse_command_with_args_and_case() {
        let msg = parser().parse("1", "/Help me please", None);
        assert_eq!(
            msg.content,
            Content::Command {
                name: "help".to_string(),
                args: vec!["me".to_string(), "please".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_mention_for_this_bot() {
        let msg = parser().parse("1", "/cat@funbot", None);
        assert_eq!(msg.content.command_name(), Some("cat"));
    }

    #[test]
    fn test_parse_mention_for_other_bot_is_text() {
        let msg = parser().parse("1", "/cat@OtherBot", None);
        assert_eq!(msg.content, Content::Text("/cat@OtherBot".to_string()));
    }

    #[test]
    fn test_parse_mention_without_known_username() {
        let msg = MessageParser::new("test").parse("1", "/fact@AnyBot", None);
        assert_eq!(msg.content.command_name(), Some("fact"));
    }

    #[test]
    fn test_parse_regular_text() {
        let sender = User::new("7").with_name("Ann", None::<String>);
        let msg = parser().parse("1", "hello there", Some(sender));
        assert_eq!(msg.content, Content::Text("hello there".to_string()));
        assert_eq!(msg.sender_name(), "Ann");
        assert_eq!(parser().parse("1", "/", None).content.command_name(), None);
    }
}
