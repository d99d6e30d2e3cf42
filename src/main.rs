use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use apifun_bot::application::errors::{BotError, ConfigError};
use apifun_bot::application::messaging::{MessageDispatcher, MessageParser};
use apifun_bot::application::services::{CommandService, ContentService};
use apifun_bot::domain::entities::User;
use apifun_bot::domain::traits::{Bot, ContentProvider, Translator};
use apifun_bot::infrastructure::adapters::console::CONSOLE_CHAT_ID;
use apifun_bot::infrastructure::adapters::telegram::poll_updates;
use apifun_bot::infrastructure::adapters::{ConsoleAdapter, TelegramAdapter};
use apifun_bot::infrastructure::config::Config;
use apifun_bot::infrastructure::content::PublicApiClient;
use apifun_bot::infrastructure::translation::{GoogleTranslator, PassthroughTranslator};

#[derive(Parser)]
#[command(name = "apifun-bot")]
#[command(about = "Jokes, quotes, facts and cats from public APIs, translated", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml", global = true)]
    config: String,

    /// Bot token (overrides API_TOKEN)
    #[arg(short, long, global = true)]
    token: Option<String>,

    /// Translation target language (overrides config and TARGET_LANGUAGE)
    #[arg(short, long, global = true)]
    lang: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Telegram bot
    Run,
    /// Chat with the bot on stdin/stdout
    Console,
    /// Show version
    Version,
    /// Print the default config
    InitConfig,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run => run(&cli).await,
        Commands::Console => console(&cli).await,
        Commands::Version => {
            println!("apifun-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(lang) = &cli.lang {
        config.translation.target_language = lang.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Wire the content pipeline and the command set
fn build_commands(config: &Config) -> CommandService {
    let provider: Arc<dyn ContentProvider> = Arc::new(PublicApiClient::new(config.providers.clone()));
    let translator: Arc<dyn Translator> = if config.translation.enabled {
        Arc::new(GoogleTranslator::new(&config.translation))
    } else {
        Arc::new(PassthroughTranslator)
    };
    tracing::info!(
        "Translating with {} into '{}'",
        translator.name(),
        translator.target_language()
    );

    let content = Arc::new(ContentService::new(provider, translator));
    let mut commands = CommandService::new().with_unknown_reply(config.bot.reply_to_unknown);
    commands.register_defaults(content);
    commands
}

async fn run(cli: &Cli) -> Result<(), BotError> {
    let config = load_config(cli)?;
    let token = Config::bot_token(cli.token.clone(), |key| std::env::var(key).ok())?;

    tracing::info!("Starting {}", config.bot.name);
    run_telegram_bot(config, token).await
}

async fn run_telegram_bot(config: Config, token: String) -> Result<(), BotError> {
    let mut bot = TelegramAdapter::new(token).with_api_base(&config.telegram.api_base);
    bot.fetch_bot_info().await?;

    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    let parser = MessageParser::new("telegram").with_bot_username(&info.username);
    let commands = build_commands(&config);

    if let Err(e) = bot.register_commands(&commands.command_list()).await {
        tracing::warn!("Failed to register commands: {}", e);
    }

    let bot = Arc::new(bot);
    bot.start().await?;
    let dispatcher = Arc::new(MessageDispatcher::new(bot.clone(), commands));

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    poll_updates(bot, dispatcher, parser, config.telegram.poll_timeout_seconds, shutdown).await
}

async fn console(cli: &Cli) -> Result<(), BotError> {
    let config = load_config(cli)?;

    let bot = Arc::new(ConsoleAdapter::new());
    bot.start().await?;

    let dispatcher = MessageDispatcher::new(bot, build_commands(&config));
    let parser = MessageParser::new("console");
    let user = User::new(CONSOLE_CHAT_ID)
        .with_name(std::env::var("USER").unwrap_or_else(|_| "friend".to_string()), None::<String>);

    println!("Type a command such as /help. Ctrl-D to quit.");

    let mut lines = ConsoleAdapter::input();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let message = parser.parse(CONSOLE_CHAT_ID, line, Some(user.clone()));
        if let Err(e) = dispatcher.dispatch(message).await {
            tracing::error!("Failed to send message: {}", e);
        }
    }

    Ok(())
}

fn init_config() -> Result<(), BotError> {
    let yaml = serde_yaml::to_string(&Config::default())
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
