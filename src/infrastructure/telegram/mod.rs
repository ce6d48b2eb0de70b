//! Telegram Bot API transport adapter

pub mod api;
pub mod client;

pub use client::TelegramClient;
