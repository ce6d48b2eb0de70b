//! Translator port interface

use async_trait::async_trait;

use crate::domain::language::LangTag;

/// Port for text translation.
///
/// The source language is auto-detected by the engine. Any failure from the
/// underlying engine collapses to `None`; there is no retry and no error
/// propagates past this boundary.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate text into the target language, or `None` on failure.
    async fn translate(&self, text: &str, target: &LangTag) -> Option<String>;
}
