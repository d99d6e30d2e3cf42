//! Long-polling loop - one task per incoming message, drained on shutdown

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;

use super::TelegramAdapter;
use crate::application::errors::BotError;
use crate::application::messaging::{MessageDispatcher, MessageParser};

/// Pause after a failed `getUpdates` call
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Poll `getUpdates` until `shutdown` resolves.
///
/// Handlers already running when `shutdown` fires are awaited before returning,
/// so every accepted command still gets its reply.
pub async fn poll_updates(
    bot: Arc<TelegramAdapter>,
    dispatcher: Arc<MessageDispatcher>,
    parser: MessageParser,
    timeout_seconds: u64,
    shutdown: impl Future<Output = ()>,
) -> Result<(), BotError> {
    tokio::pin!(shutdown);

    let mut tasks = JoinSet::new();
    let mut offset: i64 = 0;

    tracing::info!("Starting message loop...");

    loop {
        let polled = tokio::select! {
            _ = &mut shutdown => break,
            polled = bot.get_updates(offset, timeout_seconds) => polled,
        };

        match polled {
            Ok(updates) => {
                if !updates.is_empty() {
                    tracing::info!("Received {} updates", updates.len());
                }
                for update in &updates {
                    let Some(message) = TelegramAdapter::to_message(update, &parser) else {
                        continue;
                    };

                    // One task per message so a slow API only stalls its own chat
                    let dispatcher = Arc::clone(&dispatcher);
                    tasks.spawn(async move {
                        let chat_id = message.chat_id.clone();
                        if let Err(e) = dispatcher.dispatch(message).await {
                            tracing::error!("[{}] Failed to send message: {}", chat_id, e);
                        }
                    });
                }

                offset = TelegramAdapter::get_next_offset(&updates, offset);
            }
            Err(e) => {
                tracing::error!("Failed to get updates: {}", e);
                tokio::select! {
                    _ = &mut shutdown => break,
                    _ = tokio::time::sleep(RETRY_DELAY) => {}
                }
            }
        }

        while let Some(finished) = tasks.try_join_next() {
            if let Err(e) = finished {
                tracing::error!("Message task failed: {}", e);
            }
        }
    }

    tracing::info!("Shutting down, waiting for {} running handlers", tasks.len());
    while let Some(finished) = tasks.join_next().await {
        if let Err(e) = finished {
            tracing::error!("Message task failed: {}", e);
        }
    }

    Ok(())
}
