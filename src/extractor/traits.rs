use crate::extractor::models::VideoInfo;
use anyhow::Result;
use async_trait::async_trait;

/// Core trait for stream metadata resolution
///
/// This trait isolates the pipeline from the specific extraction mechanism,
/// so tests can substitute a stub for the yt-dlp child process.
#[async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Resolves the available streams for a video URL
    async fn extract_info(&self, url: &str) -> Result<VideoInfo>;

    /// Resolves the direct download URL for a specific format
    async fn resolve_direct_url(&self, url: &str, format_id: &str) -> Result<String>;
}
