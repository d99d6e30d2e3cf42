//! Error boundary for handlers that reach external services

use std::future::Future;

use crate::application::errors::ContentError;
use crate::domain::entities::Reply;

/// Prefix of the reply sent when a guarded handler fails
pub const ERROR_PREFIX: &str = "An error occurred: ";

/// Reply shown to the user for a failed handler
pub fn error_reply(err: &ContentError) -> Reply {
    Reply::Text(format!("{}{}", ERROR_PREFIX, err))
}

/// Run `handler` and turn any failure into a logged error reply.
///
/// Never returns an error: the caller always gets exactly one reply to deliver.
pub async fn guarded<Fut>(command: &str, chat_id: &str, handler: Fut) -> Reply
where
    Fut: Future<Output = Result<Reply, ContentError>>,
{
    match handler.await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(command, chat_id, error = %e, "Command failed");
            error_reply(&e)
        }
    }
}
