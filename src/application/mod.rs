//! Application layer - Use cases and orchestration
//!
//! This layer contains:
//! - Errors: Transport, content and configuration errors
//! - Messaging: Command parsing, the error boundary and dispatching
//! - Services: Content pipeline, reply formatting and the command set

pub mod errors;
pub mod services;
pub mod messaging;
