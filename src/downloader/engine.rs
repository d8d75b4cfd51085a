//! Sequential streaming download engine

use crate::utils::error::AudioclipError;
use anyhow::Result;
use futures::StreamExt;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Streaming HTTP download engine
///
/// Downloads exactly one stream at a time: the response body is streamed to
/// disk chunk by chunk and the call blocks until the file is fully written.
pub struct DownloadEngine {
    client: Client,
}

impl DownloadEngine {
    /// Create a new download engine
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36")
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }

    /// Download a URL to a local file, returning the bytes written
    ///
    /// Any pre-existing file at `output_path` is truncated. A zero-byte
    /// response body is treated as a failed download.
    pub async fn download(&self, url: &str, output_path: &Path) -> Result<u64> {
        debug!("Downloading {} to {}", url, output_path.display());

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(
                AudioclipError::DownloadError(format!("HTTP error: {}", response.status())).into(),
            );
        }

        let mut file = File::create(output_path).await?;
        let mut downloaded = 0u64;

        // Stream response to file
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;
        }

        // Ensure file is flushed
        file.flush().await?;

        if downloaded == 0 {
            return Err(
                AudioclipError::DownloadError("server returned an empty body".to_string()).into(),
            );
        }

        info!(
            "Downloaded {} bytes to {}",
            downloaded,
            output_path.display()
        );

        Ok(downloaded)
    }
}
