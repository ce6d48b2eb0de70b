//! Fixed user-facing texts outside the pipeline

/// Reply to the operator's /start command
pub const WELCOME: &str = "Hello! ✅ Send me a voice message and I will \
reply with a spoken translation.";

/// Reply to anyone who is not the operator
pub const REFUSAL: &str = "Sorry, this bot is for personal use only.";

/// The greeting command
pub const START_COMMAND: &str = "/start";
