//! Audio format adapters

pub mod ffmpeg;

pub use ffmpeg::FfmpegNormalizer;
