//! Inbound voice request value objects

use std::fmt;

/// Transport-assigned reference to a binary attachment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttachmentRef(String);

impl AttachmentRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttachmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One inbound voice event.
///
/// Created when a voice message arrives, discarded when the pipeline
/// terminates. Never reused across events.
#[derive(Debug, Clone)]
pub struct VoiceRequest {
    pub chat_id: i64,
    pub sender_id: i64,
    pub attachment: AttachmentRef,
}

impl VoiceRequest {
    pub fn new(chat_id: i64, sender_id: i64, attachment: AttachmentRef) -> Self {
        Self {
            chat_id,
            sender_id,
            attachment,
        }
    }

    /// Unique, filesystem-safe token for deriving artifact names.
    ///
    /// Alphanumerics and `_` pass through; every other character is escaped
    /// as `-` followed by the hex of each of its UTF-8 bytes. The escape is
    /// injective, so distinct attachment references always yield distinct
    /// tokens.
    pub fn token(&self) -> String {
        use std::fmt::Write;

        let mut token = String::with_capacity(self.attachment.as_str().len());
        for c in self.attachment.as_str().chars() {
            if c.is_ascii_alphanumeric() || c == '_' {
                token.push(c);
            } else {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    let _ = write!(token, "-{byte:02x}");
                }
            }
        }
        token
    }
}
