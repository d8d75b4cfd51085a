//! yt-dlp wrapper for stream metadata extraction
//!
//! Resolving the available streams for a remote video means invoking yt-dlp
//! as a child process and reading the JSON document it prints. Nothing is
//! downloaded at this stage.

use crate::extractor::models::VideoInfo;
use crate::extractor::traits::MediaExtractor;
use crate::utils::binaries::find_tool;
use crate::utils::error::AudioclipError;
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info};

/// Common yt-dlp installation paths checked after PATH
const YTDLP_COMMON_PATHS: &[&str] = &[
    // macOS Homebrew (Apple Silicon)
    "/opt/homebrew/bin/yt-dlp",
    // macOS Homebrew (Intel)
    "/usr/local/bin/yt-dlp",
    // System
    "/usr/bin/yt-dlp",
    // Python.org installation
    "/Library/Frameworks/Python.framework/Versions/Current/bin/yt-dlp",
    // pip user install
    "~/.local/bin/yt-dlp",
];

/// Stream metadata extractor backed by the yt-dlp binary
pub struct YtDlpExtractor {
    ytdlp_path: PathBuf,
}

impl YtDlpExtractor {
    /// Initialize the extractor and verify yt-dlp availability
    pub fn new() -> Result<Self> {
        let ytdlp_path = match find_tool("yt-dlp", YTDLP_COMMON_PATHS) {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                path
            }
            None => {
                error!("yt-dlp not found anywhere!");
                return Err(AudioclipError::YtDlpNotFound.into());
            }
        };

        Ok(Self { ytdlp_path })
    }

    /// Get the path to yt-dlp being used
    pub fn ytdlp_path(&self) -> &PathBuf {
        &self.ytdlp_path
    }
}

#[async_trait]
impl MediaExtractor for YtDlpExtractor {
    /// Resolve stream information without downloading
    /// Uses: yt-dlp --dump-json --no-download
    async fn extract_info(&self, url: &str) -> Result<VideoInfo> {
        debug!("Extracting stream info for URL: {}", url);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .arg("--dump-json")
            .arg("--no-download")
            .arg("--no-warnings")
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp extraction failed: {}", error_msg);
            return Err(AudioclipError::ExtractionError(error_msg.to_string()).into());
        }

        let json_str = String::from_utf8(output.stdout)?;
        let video_info: VideoInfo = serde_json::from_str(&json_str)?;

        Ok(video_info)
    }

    /// Resolve the direct download URL for a specific format
    /// Uses: yt-dlp -f <format_id> -g
    async fn resolve_direct_url(&self, url: &str, format_id: &str) -> Result<String> {
        debug!("Resolving direct URL for format {} from {}", format_id, url);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .arg("-f")
            .arg(format_id)
            .arg("-g")
            .arg("--no-warnings")
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            error!("Failed to resolve direct URL: {}", error_msg);
            return Err(AudioclipError::ExtractionError(error_msg.to_string()).into());
        }

        let url_str = String::from_utf8(output.stdout)?.trim().to_string();
        Ok(url_str)
    }
}
