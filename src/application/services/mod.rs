//! Application services - Content pipeline and command set

pub mod command_service;
pub mod content_service;
pub mod formatter;

pub use command_service::CommandService;
pub use content_service::ContentService;
