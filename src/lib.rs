//! Audioclip library

pub mod app;
pub mod downloader;
pub mod extractor;
pub mod trimmer;
pub mod utils;

// Re-export main types for easier use
pub use downloader::DownloadEngine;
pub use extractor::{Format, MediaExtractor, VideoInfo, YtDlpExtractor};
pub use trimmer::Trimmer;
pub use utils::AudioclipError;
