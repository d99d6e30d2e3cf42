//! Translators - Google Translate and a passthrough for when translation is off

pub mod google;
pub mod passthrough;

pub use google::GoogleTranslator;
pub use passthrough::PassthroughTranslator;
