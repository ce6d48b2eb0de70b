//! VoiceRelay - personal voice-translation relay over Telegram
//!
//! Receives a voice message from a single authorized operator, runs it
//! through a staged pipeline (normalize, transcribe, translate, synthesize)
//! and sends the result back as a spoken audio reply.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (languages, requests, artifact sets) and errors
//! - **Application**: Port interfaces (traits), the access gate, and the
//!   pipeline orchestrator
//! - **Infrastructure**: Adapter implementations (Telegram Bot API, FFmpeg,
//!   Google speech/translate, gTTS, ElevenLabs)
//! - **Bot**: Update routing and the long-poll receive loop

pub mod application;
pub mod bot;
pub mod domain;
pub mod infrastructure;
