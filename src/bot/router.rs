//! Inbound update router

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::access::AccessGate;
use crate::application::ports::{
    AudioNormalizer, Messenger, SpeechRecognizer, SpeechSynthesizer, Translator,
};
use crate::application::relay::VoiceRelay;
use crate::domain::request::{AttachmentRef, VoiceRequest};
use crate::infrastructure::telegram::api::Message;

use super::messages;

/// Classifies inbound messages and applies the access gate before any
/// pipeline work happens.
pub struct Router<M, N, R, T, S>
where
    M: Messenger,
    N: AudioNormalizer,
    R: SpeechRecognizer,
    T: Translator,
    S: SpeechSynthesizer,
{
    gate: AccessGate,
    transport: Arc<M>,
    relay: Arc<VoiceRelay<M, N, R, T, S>>,
}

impl<M, N, R, T, S> Router<M, N, R, T, S>
where
    M: Messenger,
    N: AudioNormalizer,
    R: SpeechRecognizer,
    T: Translator,
    S: SpeechSynthesizer,
{
    pub fn new(gate: AccessGate, transport: Arc<M>, relay: Arc<VoiceRelay<M, N, R, T, S>>) -> Self {
        Self {
            gate,
            transport,
            relay,
        }
    }

    /// Handle one inbound message.
    ///
    /// The gate runs independently on every event; a non-operator voice
    /// message is dropped without a reply, non-operator text gets the fixed
    /// refusal.
    pub async fn route(&self, message: Message) {
        let Some(sender_id) = message.from.as_ref().map(|user| user.id) else {
            return;
        };
        let chat_id = message.chat.id;
        let authorized = self.gate.is_operator(sender_id);

        if let Some(attachment_id) = message.attachment_id() {
            if !authorized {
                info!(sender_id, "voice message from non-operator dropped");
                return;
            }

            let request =
                VoiceRequest::new(chat_id, sender_id, AttachmentRef::new(attachment_id));
            let outcome = self.relay.handle_voice(&request).await;
            info!(sender_id, ?outcome, "voice request finished");
            return;
        }

        if message.text.as_deref() == Some(messages::START_COMMAND) {
            let reply = if authorized {
                messages::WELCOME
            } else {
                messages::REFUSAL
            };
            if let Err(e) = self.transport.send_text(chat_id, reply).await {
                warn!(error = %e, "greeting reply failed");
            }
            return;
        }

        if !authorized {
            if let Err(e) = self.transport.send_text(chat_id, messages::REFUSAL).await {
                warn!(error = %e, "refusal reply failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MessageRef, NormalizeError, RecognitionOutcome, SynthesisError, TransportError,
    };
    use crate::domain::language::{LangTag, LanguagePair};
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct SpyTransport {
        texts: Mutex<Vec<String>>,
        downloads: AtomicUsize,
    }

    #[async_trait]
    impl Messenger for SpyTransport {
        async fn send_text(&self, chat_id: i64, text: &str) -> Result<MessageRef, TransportError> {
            self.texts.lock().unwrap().push(text.to_string());
            Ok(MessageRef {
                chat_id,
                message_id: 1,
            })
        }

        async fn edit_text(&self, _message: &MessageRef, _text: &str) -> Result<(), TransportError> {
            Ok(())
        }

        async fn delete_message(&self, _message: &MessageRef) -> Result<(), TransportError> {
            Ok(())
        }

        async fn send_audio(
            &self,
            _chat_id: i64,
            _audio: &Path,
            _caption: &str,
            _performer: Option<&str>,
            _title: Option<&str>,
        ) -> Result<(), TransportError> {
            Ok(())
        }

        async fn download(
            &self,
            _attachment: &AttachmentRef,
            dest: &Path,
        ) -> Result<(), TransportError> {
            self.downloads.fetch_add(1, Ordering::SeqCst);
            tokio::fs::write(dest, b"ogg")
                .await
                .map_err(|e| TransportError::Io(e.to_string()))
        }
    }

    struct PassNormalizer;

    #[async_trait]
    impl AudioNormalizer for PassNormalizer {
        async fn normalize(&self, _input: &Path, output: &Path) -> Result<(), NormalizeError> {
            tokio::fs::write(output, b"wav")
                .await
                .map_err(|e| NormalizeError::DecodeFailed(e.to_string()))
        }
    }

    struct StubRecognizer;

    #[async_trait]
    impl SpeechRecognizer for StubRecognizer {
        async fn transcribe(&self, _audio: &Path, _language: &LangTag) -> RecognitionOutcome {
            RecognitionOutcome::Transcript("salom".to_string())
        }
    }

    struct StubTranslator;

    #[async_trait]
    impl Translator for StubTranslator {
        async fn translate(&self, _text: &str, _target: &LangTag) -> Option<String> {
            Some("hello".to_string())
        }
    }

    struct StubSynthesizer;

    #[async_trait]
    impl SpeechSynthesizer for StubSynthesizer {
        async fn synthesize(&self, _text: &str, output: &Path) -> Result<(), SynthesisError> {
            tokio::fs::write(output, b"mp3")
                .await
                .map_err(|e| SynthesisError::WriteFailed(e.to_string()))
        }

        fn label(&self) -> &str {
            "StubTTS"
        }
    }

    fn router(
        transport: Arc<SpyTransport>,
        work_dir: PathBuf,
    ) -> Router<SpyTransport, PassNormalizer, StubRecognizer, StubTranslator, StubSynthesizer> {
        let relay = Arc::new(VoiceRelay::new(
            Arc::clone(&transport),
            PassNormalizer,
            StubRecognizer,
            StubTranslator,
            StubSynthesizer,
            LanguagePair::default(),
            work_dir,
        ));
        Router::new(AccessGate::new("42"), transport, relay)
    }

    fn voice_message(sender_id: i64) -> Message {
        serde_json::from_value(serde_json::json!({
            "message_id": 1,
            "from": {"id": sender_id},
            "chat": {"id": sender_id},
            "voice": {"file_id": "file-1"}
        }))
        .unwrap()
    }

    fn text_message(sender_id: i64, text: &str) -> Message {
        serde_json::from_value(serde_json::json!({
            "message_id": 1,
            "from": {"id": sender_id},
            "chat": {"id": sender_id},
            "text": text
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn non_operator_voice_never_reaches_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let transport = Arc::new(SpyTransport::default());
        let router = router(Arc::clone(&transport), dir.path().to_path_buf());

        router.route(voice_message(999)).await;

        assert_eq!(transport.downloads.load(Ordering::SeqCst), 0);
        assert!(transport.texts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn operator_voice_runs_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let transport = Arc::new(SpyTransport::default());
        let router = router(Arc::clone(&transport), dir.path().to_path_buf());

        router.route(voice_message(42)).await;

        assert_eq!(transport.downloads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn operator_start_gets_welcome() {
        let dir = tempfile::tempdir().unwrap();
        let transport = Arc::new(SpyTransport::default());
        let router = router(Arc::clone(&transport), dir.path().to_path_buf());

        router.route(text_message(42, "/start")).await;

        assert_eq!(
            transport.texts.lock().unwrap().as_slice(),
            [messages::WELCOME.to_string()]
        );
    }

    #[tokio::test]
    async fn stranger_start_gets_refusal() {
        let dir = tempfile::tempdir().unwrap();
        let transport = Arc::new(SpyTransport::default());
        let router = router(Arc::clone(&transport), dir.path().to_path_buf());

        router.route(text_message(7, "/start")).await;

        assert_eq!(
            transport.texts.lock().unwrap().as_slice(),
            [messages::REFUSAL.to_string()]
        );
    }

    #[tokio::test]
    async fn stranger_text_gets_refusal() {
        let dir = tempfile::tempdir().unwrap();
        let transport = Arc::new(SpyTransport::default());
        let router = router(Arc::clone(&transport), dir.path().to_path_buf());

        router.route(text_message(7, "hi there")).await;

        assert_eq!(
            transport.texts.lock().unwrap().as_slice(),
            [messages::REFUSAL.to_string()]
        );
    }

    #[tokio::test]
    async fn operator_plain_text_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let transport = Arc::new(SpyTransport::default());
        let router = router(Arc::clone(&transport), dir.path().to_path_buf());

        router.route(text_message(42, "hi there")).await;

        assert!(transport.texts.lock().unwrap().is_empty());
    }
}
