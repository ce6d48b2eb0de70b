//! VoiceRelay entry point

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use voice_relay::application::access::AccessGate;
use voice_relay::application::relay::VoiceRelay;
use voice_relay::bot::{self, Router};
use voice_relay::infrastructure::{
    create_synthesizer, FfmpegNormalizer, GoogleSpeechRecognizer, GoogleTranslator, TelegramClient,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = bot::load_config().await;

    // The only reasons to exit nonzero: unrecoverable startup misconfiguration
    let Some(bot_token) = config.bot_token.clone() else {
        error!("Missing bot credential. Set BOT_TOKEN.");
        return ExitCode::FAILURE;
    };
    let Some(operator_id) = config.operator_id.clone() else {
        error!("Missing operator identity. Set OPERATOR_ID.");
        return ExitCode::FAILURE;
    };
    let synthesizer = match create_synthesizer(&config) {
        Ok(synthesizer) => synthesizer,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let languages = config.language_pair();
    info!(
        source = %languages.source,
        target = %languages.target,
        backend = synthesizer.label(),
        "starting voice relay"
    );

    let client = Arc::new(TelegramClient::new(&bot_token));
    let relay = Arc::new(VoiceRelay::new(
        Arc::clone(&client),
        FfmpegNormalizer::new(),
        GoogleSpeechRecognizer::new(),
        GoogleTranslator::new(),
        synthesizer,
        languages,
        config.work_dir_or_default(),
    ));
    let router = Arc::new(Router::new(
        AccessGate::new(operator_id),
        Arc::clone(&client),
        relay,
    ));

    tokio::select! {
        _ = bot::run(client, router) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down");
        }
    }

    ExitCode::SUCCESS
}
