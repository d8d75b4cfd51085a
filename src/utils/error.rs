//! Error handling for audioclip

use thiserror::Error;

/// Main error type for audioclip
#[derive(Debug, Error)]
pub enum AudioclipError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("ffmpeg not found. Please install ffmpeg")]
    FfmpegNotFound,

    #[error("Failed to extract stream info: {0}")]
    ExtractionError(String),

    #[error("No audio-only stream available for this video")]
    NoAudioStream,

    #[error("Download failed: {0}")]
    DownloadError(String),

    #[error("Transcode failed: {0}")]
    TranscodeError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
