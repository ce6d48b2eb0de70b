//! Translation adapters

pub mod google;

pub use google::GoogleTranslator;
