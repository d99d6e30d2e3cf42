//! Message handling - Parsing, dispatching and the handler error boundary

pub mod boundary;
pub mod dispatcher;
pub mod parser;

pub use boundary::guarded;
pub use dispatcher::{DispatchOutcome, MessageDispatcher};
pub use parser::MessageParser;
