//! Messaging transport port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::request::AttachmentRef;

/// Transport errors
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Handle to a sent message, used for later edits and deletion.
///
/// The orchestrator holds exactly one of these per request (the status
/// message); it is never duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRef {
    pub chat_id: i64,
    pub message_id: i64,
}

/// Port for the messaging transport
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a text reply and return a handle for later edits.
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<MessageRef, TransportError>;

    /// Edit a previously sent text message in place.
    async fn edit_text(&self, message: &MessageRef, text: &str) -> Result<(), TransportError>;

    /// Delete a previously sent message.
    async fn delete_message(&self, message: &MessageRef) -> Result<(), TransportError>;

    /// Send an audio reply with a caption and optional display labels.
    async fn send_audio(
        &self,
        chat_id: i64,
        audio: &Path,
        caption: &str,
        performer: Option<&str>,
        title: Option<&str>,
    ) -> Result<(), TransportError>;

    /// Fetch a binary attachment into a destination path.
    async fn download(&self, attachment: &AttachmentRef, dest: &Path)
        -> Result<(), TransportError>;
}
