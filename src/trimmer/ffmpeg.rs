//! ffmpeg wrapper for time-bounded transcoding
//!
//! The trim is delegated entirely to ffmpeg: the read limit is passed as an
//! input option and the output codec follows from the output file extension.

use crate::utils::binaries::find_tool;
use crate::utils::error::AudioclipError;
use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info};

/// Common ffmpeg installation paths checked after PATH
const FFMPEG_COMMON_PATHS: &[&str] = &[
    // macOS Homebrew (Apple Silicon)
    "/opt/homebrew/bin/ffmpeg",
    // macOS Homebrew (Intel)
    "/usr/local/bin/ffmpeg",
    // System
    "/usr/bin/ffmpeg",
    // User local
    "~/.local/bin/ffmpeg",
];

/// Time-bounded transcoder backed by the ffmpeg binary
pub struct Trimmer {
    ffmpeg_path: PathBuf,
}

impl Trimmer {
    /// Initialize the trimmer and verify ffmpeg availability
    pub fn new() -> Result<Self> {
        let ffmpeg_path = match find_tool("ffmpeg", FFMPEG_COMMON_PATHS) {
            Some(path) => {
                info!("Found ffmpeg at: {}", path.display());
                path
            }
            None => {
                error!("ffmpeg not found anywhere!");
                return Err(AudioclipError::FfmpegNotFound.into());
            }
        };

        Ok(Self { ffmpeg_path })
    }

    /// Use a specific transcoder binary instead of discovering one
    pub fn with_binary(path: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg_path: path.into(),
        }
    }

    /// Get the path to ffmpeg being used
    pub fn ffmpeg_path(&self) -> &PathBuf {
        &self.ffmpeg_path
    }

    /// Transcode the leading `limit` of `input` into `output`
    ///
    /// An input shorter than the limit is transcoded whole; no padding is
    /// added. Any pre-existing file at `output` is overwritten.
    pub async fn trim(&self, input: &Path, limit: Duration, output: &Path) -> Result<()> {
        if !input.exists() {
            return Err(AudioclipError::TranscodeError(format!(
                "input file not found: {}",
                input.display()
            ))
            .into());
        }

        debug!(
            "Trimming {} to first {}s as {}",
            input.display(),
            limit.as_secs(),
            output.display()
        );

        let result = AsyncCommand::new(&self.ffmpeg_path)
            .args(trim_args(input, limit, output))
            .output()
            .await?;

        if !result.status.success() {
            let error_msg = String::from_utf8_lossy(&result.stderr);
            error!("ffmpeg transcode failed: {}", error_msg);
            return Err(AudioclipError::TranscodeError(error_msg.to_string()).into());
        }

        info!("Wrote trimmed audio to {}", output.display());
        Ok(())
    }
}

/// Build the ffmpeg argument list for a time-bounded transcode
///
/// `-t` is placed before `-i`, so ffmpeg stops reading the source at the
/// limit instead of trimming after a full decode.
fn trim_args(input: &Path, limit: Duration, output: &Path) -> Vec<OsString> {
    vec![
        OsString::from("-y"),
        OsString::from("-t"),
        OsString::from(limit.as_secs().to_string()),
        OsString::from("-i"),
        input.as_os_str().to_os_string(),
        output.as_os_str().to_os_string(),
    ]
}
