//! Telegram Bot API wire types
//!
//! Only the fields this relay reads are modeled; everything else in the
//! Bot API payloads is ignored during deserialization.

use serde::Deserialize;

/// Envelope of every Bot API response
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
    pub voice: Option<Voice>,
    pub audio: Option<Audio>,
}

impl Message {
    /// The attachment reference, if this message carries audio content
    pub fn attachment_id(&self) -> Option<&str> {
        self.voice
            .as_ref()
            .map(|v| v.file_id.as_str())
            .or_else(|| self.audio.as_ref().map(|a| a.file_id.as_str()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Voice {
    pub file_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Audio {
    pub file_id: String,
}

/// Result of `getFile`, used to build the download URL
#[derive(Debug, Clone, Deserialize)]
pub struct File {
    pub file_path: Option<String>,
}
