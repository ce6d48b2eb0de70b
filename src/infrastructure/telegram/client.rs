//! Telegram Bot API client

use std::path::Path;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::application::ports::{MessageRef, Messenger, TransportError};
use crate::domain::request::AttachmentRef;

use super::api::{ApiResponse, File, Message, Update};

/// Telegram Bot API base URL
const API_ROOT: &str = "https://api.telegram.org";

/// Transport adapter for the Telegram Bot API.
///
/// Implements the `Messenger` port for the orchestrator and additionally
/// exposes `next_updates` for the long-poll receive loop.
pub struct TelegramClient {
    client: reqwest::Client,
    api_base: String,
    file_base: String,
}

impl TelegramClient {
    /// Create a client for the given bot token
    pub fn new(token: impl AsRef<str>) -> Self {
        Self::with_api_root(API_ROOT, token)
    }

    /// Create a client against a custom API root (used in tests)
    pub fn with_api_root(root: impl AsRef<str>, token: impl AsRef<str>) -> Self {
        let root = root.as_ref().trim_end_matches('/');
        let token = token.as_ref();
        Self {
            client: reqwest::Client::new(),
            api_base: format!("{root}/bot{token}"),
            file_base: format!("{root}/file/bot{token}"),
        }
    }

    /// Call a Bot API method with a JSON payload
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        payload: &impl Serialize,
    ) -> Result<T, TransportError> {
        let response = self
            .client
            .post(format!("{}/{}", self.api_base, method))
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        Self::unwrap_response(
            response
                .json()
                .await
                .map_err(|e| TransportError::ParseError(e.to_string()))?,
        )
    }

    fn unwrap_response<T>(response: ApiResponse<T>) -> Result<T, TransportError> {
        if response.ok {
            response
                .result
                .ok_or_else(|| TransportError::ParseError("missing result field".to_string()))
        } else {
            Err(TransportError::Api(
                response
                    .description
                    .unwrap_or_else(|| "unknown API error".to_string()),
            ))
        }
    }

    /// Long-poll for the next batch of updates.
    ///
    /// Suspends for up to `timeout_secs` on the server side; an empty batch
    /// is a normal outcome.
    pub async fn next_updates(
        &self,
        offset: i64,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TransportError> {
        self.call(
            "getUpdates",
            &json!({
                "offset": offset,
                "timeout": timeout_secs,
                "allowed_updates": ["message"],
            }),
        )
        .await
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<MessageRef, TransportError> {
        let message: Message = self
            .call("sendMessage", &json!({"chat_id": chat_id, "text": text}))
            .await?;
        Ok(MessageRef {
            chat_id,
            message_id: message.message_id,
        })
    }

    async fn edit_text(&self, message: &MessageRef, text: &str) -> Result<(), TransportError> {
        // editMessageText returns either the edited Message or `true`;
        // neither shape matters here.
        let _: serde_json::Value = self
            .call(
                "editMessageText",
                &json!({
                    "chat_id": message.chat_id,
                    "message_id": message.message_id,
                    "text": text,
                }),
            )
            .await?;
        Ok(())
    }

    async fn delete_message(&self, message: &MessageRef) -> Result<(), TransportError> {
        let _: bool = self
            .call(
                "deleteMessage",
                &json!({
                    "chat_id": message.chat_id,
                    "message_id": message.message_id,
                }),
            )
            .await?;
        Ok(())
    }

    async fn send_audio(
        &self,
        chat_id: i64,
        audio: &Path,
        caption: &str,
        performer: Option<&str>,
        title: Option<&str>,
    ) -> Result<(), TransportError> {
        let bytes = tokio::fs::read(audio)
            .await
            .map_err(|e| TransportError::Io(e.to_string()))?;

        let file_name = audio
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.mp3".to_string());

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("audio/mpeg")
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        let mut form = reqwest::multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .text("caption", caption.to_string())
            .part("audio", part);

        if let Some(performer) = performer {
            form = form.text("performer", performer.to_string());
        }
        if let Some(title) = title {
            form = form.text("title", title.to_string());
        }

        let response = self
            .client
            .post(format!("{}/sendAudio", self.api_base))
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        let _: Message = Self::unwrap_response(
            response
                .json()
                .await
                .map_err(|e| TransportError::ParseError(e.to_string()))?,
        )?;
        Ok(())
    }

    async fn download(
        &self,
        attachment: &AttachmentRef,
        dest: &Path,
    ) -> Result<(), TransportError> {
        let file: File = self
            .call("getFile", &json!({"file_id": attachment.as_str()}))
            .await?;

        let file_path = file
            .file_path
            .ok_or_else(|| TransportError::DownloadFailed("no file path returned".to_string()))?;

        let response = self
            .client
            .get(format!("{}/{}", self.file_base, file_path))
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TransportError::DownloadFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::DownloadFailed(e.to_string()))?;

        debug!(bytes = bytes.len(), dest = %dest.display(), "attachment downloaded");

        tokio::fs::write(dest, &bytes)
            .await
            .map_err(|e| TransportError::Io(e.to_string()))
    }
}
