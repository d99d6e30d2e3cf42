//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Environment variable holding the Telegram bot token
pub const TOKEN_ENV: &str = "API_TOKEN";

/// Environment variable overriding the translation target language
pub const TARGET_LANGUAGE_ENV: &str = "TARGET_LANGUAGE";

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub telegram: TelegramConfig,
    pub translation: TranslationConfig,
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub name: String,
    /// Answer commands the bot doesn't know instead of staying silent
    pub reply_to_unknown: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TelegramConfig {
    pub api_base: String,
    pub poll_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TranslationConfig {
    pub enabled: bool,
    pub source_language: String,
    pub target_language: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ProvidersConfig {
    pub joke_url: String,
    pub quote_url: String,
    pub fact_url: String,
    pub cat_url: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "apifun-bot".to_string(),
            reply_to_unknown: false,
        }
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.telegram.org".to_string(),
            poll_timeout_seconds: 30,
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            source_language: "auto".to_string(),
            target_language: "ru".to_string(),
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            joke_url: "https://official-joke-api.appspot.com/random_joke".to_string(),
            quote_url: "https://api.quotable.io/random".to_string(),
            fact_url: "https://uselessfacts.jsph.pl/random.json?language=en".to_string(),
            cat_url: "https://api.thecatapi.com/v1/images/search".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise start from defaults; then apply the environment
    pub fn load_or_default(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let mut config = if path.exists() {
            Self::load(&path)?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Config::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(lang) = lookup(TARGET_LANGUAGE_ENV).filter(|l| !l.trim().is_empty()) {
            self.translation.target_language = lang.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.translation.enabled && self.translation.target_language.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "translation.target-language must not be empty".to_string(),
            ));
        }
        if self.telegram.poll_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue(
                "telegram.poll-timeout-seconds must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The bot token: `override_token` if given, otherwise `API_TOKEN` from `lookup`
    pub fn bot_token(
        override_token: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<String, ConfigError> {
        override_token
            .or_else(|| lookup(TOKEN_ENV))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConfigError::MissingField(TOKEN_ENV.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.translation.target_language, "ru");
        assert_eq!(config.translation.source_language, "auto");
        assert!(!config.bot.reply_to_unknown);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "bot:\n  reply-to-unknown: true\ntranslation:\n  target-language: de\n";
        let config = Config::from_yaml(yaml).unwrap();

        assert!(config.bot.reply_to_unknown);
        assert_eq!(config.translation.target_language, "de");
        assert_eq!(config.providers.cat_url, "https://api.thecatapi.com/v1/images/search");
    }

    #[test]
    fn test_invalid_yaml_values() {
        assert!(Config::from_yaml("telegram:\n  poll-timeout-seconds: 0\n").is_err());
        assert!(Config::from_yaml("translation:\n  target-language: ''\n").is_err());
        assert!(Config::from_yaml("bot: [").is_err());
    }

    #[test]
    fn test_env_overrides_target_language() {
        let mut config = Config::default();
        config.apply_env(|key| (key == TARGET_LANGUAGE_ENV).then(|| "es".to_string()));
        assert_eq!(config.translation.target_language, "es");
    }

    #[test]
    fn test_bot_token_resolution() {
        let env = |key: &str| (key == TOKEN_ENV).then(|| "123:abc".to_string());

        assert_eq!(Config::bot_token(None, env).unwrap(), "123:abc");
        assert_eq!(Config::bot_token(Some("999:zzz".to_string()), env).unwrap(), "999:zzz");
        assert!(matches!(
            Config::bot_token(None, |_| None),
            Err(ConfigError::MissingField(field)) if field == TOKEN_ENV
        ));
        assert!(Config::bot_token(None, |_| Some("  ".to_string())).is_err());
    }
}
