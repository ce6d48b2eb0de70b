//! Receive loop and configuration assembly

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::application::ports::{
    AudioNormalizer, ConfigStore, SpeechRecognizer, SpeechSynthesizer, Translator,
};
use crate::domain::config::RelayConfig;
use crate::infrastructure::telegram::TelegramClient;
use crate::infrastructure::XdgConfigStore;

use super::router::Router;

/// Server-side long-poll timeout
const POLL_TIMEOUT_SECS: u64 = 30;

/// Back-off after a failed getUpdates call
const POLL_RETRY: Duration = Duration::from_secs(5);

/// Load and merge configuration: defaults < config file < environment
pub async fn load_config() -> RelayConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        warn!(error = %e, "config file ignored");
        RelayConfig::empty()
    });

    let env_config = RelayConfig {
        bot_token: env_var("BOT_TOKEN"),
        operator_id: env_var("OPERATOR_ID"),
        synth_backend: env_var("SYNTH_BACKEND"),
        elevenlabs_api_key: env_var("ELEVENLABS_API_KEY"),
        elevenlabs_voice_id: env_var("ELEVENLABS_VOICE_ID"),
        source_lang: env_var("SOURCE_LANG"),
        target_lang: env_var("TARGET_LANG"),
        work_dir: env_var("RELAY_WORK_DIR"),
    };

    RelayConfig::defaults().merge(file_config).merge(env_config)
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Run the unbounded receive loop.
///
/// Each update is dispatched to its own task, so one slow pipeline run never
/// delays polling or other in-flight requests. Transport errors back off and
/// poll again; the loop itself never terminates.
pub async fn run<N, R, T, S>(
    client: Arc<TelegramClient>,
    router: Arc<Router<TelegramClient, N, R, T, S>>,
) where
    N: AudioNormalizer + 'static,
    R: SpeechRecognizer + 'static,
    T: Translator + 'static,
    S: SpeechSynthesizer + 'static,
{
    info!("receive loop started");
    let mut offset = 0i64;

    loop {
        match client.next_updates(offset, POLL_TIMEOUT_SECS).await {
            Ok(updates) => {
                for update in updates {
                    offset = offset.max(update.update_id + 1);
                    let Some(message) = update.message else {
                        continue;
                    };
                    let router = Arc::clone(&router);
                    tokio::spawn(async move {
                        router.route(message).await;
                    });
                }
            }
            Err(e) => {
                warn!(error = %e, "getUpdates failed, backing off");
                tokio::time::sleep(POLL_RETRY).await;
            }
        }
    }
}
