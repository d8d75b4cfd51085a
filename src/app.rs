//! Pipeline assembly and the fixed constants that drive it

use crate::downloader::DownloadEngine;
use crate::extractor::{select_audio_stream, MediaExtractor, YtDlpExtractor};
use crate::trimmer::Trimmer;
use crate::utils::error::AudioclipError;
use anyhow::Result;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// The video whose audio track is fetched
pub const VIDEO_URL: &str = "https://www.youtube.com/watch?v=5_4KRUx2iKY";

/// Where the raw audio stream is downloaded
pub const AUDIO_FILE: &str = "audio.mp4";

/// How much of the audio to keep
pub const CLIP_LIMIT: Duration = Duration::from_secs(90);

/// Where the trimmed clip is written
pub const OUTPUT_FILE: &str = "audio_90s.mp3";

/// Run the whole pipeline against the fixed URL and paths
pub async fn run() -> Result<()> {
    let extractor = YtDlpExtractor::new()?;
    let engine = DownloadEngine::new()?;
    let trimmer = Trimmer::new()?;

    run_pipeline(
        &extractor,
        &engine,
        &trimmer,
        VIDEO_URL,
        Path::new(AUDIO_FILE),
        CLIP_LIMIT,
        Path::new(OUTPUT_FILE),
    )
    .await?;

    println!(
        "Saved first {}s of audio to {}",
        CLIP_LIMIT.as_secs(),
        OUTPUT_FILE
    );

    Ok(())
}

/// Fetch stream metadata, download the first audio-only stream, trim it
///
/// The three stages run once each, in order; the first failure aborts the
/// rest of the pipeline.
pub async fn run_pipeline(
    extractor: &dyn MediaExtractor,
    engine: &DownloadEngine,
    trimmer: &Trimmer,
    url: &str,
    audio_file: &Path,
    limit: Duration,
    output_file: &Path,
) -> Result<()> {
    let video_info = extractor.extract_info(url).await?;
    info!("Resolved streams for: {}", video_info.title);

    let audio_format =
        select_audio_stream(&video_info.formats).ok_or(AudioclipError::NoAudioStream)?;
    info!(
        "Selected audio stream {} ({})",
        audio_format.format_id, audio_format.ext
    );

    // Format entries usually carry a direct URL; resolve one when absent
    let download_url = if audio_format.url.is_empty() {
        extractor
            .resolve_direct_url(&video_info.url, &audio_format.format_id)
            .await?
    } else {
        audio_format.url.clone()
    };

    engine.download(&download_url, audio_file).await?;

    trimmer.trim(audio_file, limit, output_file).await?;

    Ok(())
}
