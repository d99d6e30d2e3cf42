//! Domain entities - Core objects passed between layers

pub mod user;
pub mod message;
pub mod command;
pub mod payload;
pub mod reply;

pub use user::User;
pub use message::{Message, Content};
pub use command::{Command, CommandRegistry, Handler, HandlerFuture};
pub use payload::{CatImage, Fact, Joke, Quote};
pub use reply::Reply;
