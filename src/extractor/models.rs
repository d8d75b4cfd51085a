//! Data structures for the yt-dlp stream listing

use serde::{Deserialize, Serialize};

/// Video information as reported by `yt-dlp --dump-json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    #[serde(alias = "webpage_url")]
    pub url: String,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub formats: Vec<Format>,
}

/// A single downloadable format variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Format {
    pub format_id: String,
    #[serde(default)]
    pub ext: String,
    #[serde(default)]
    pub url: String,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    #[serde(default)]
    pub filesize: Option<u64>,
    pub abr: Option<f32>,  // Audio bitrate
}

impl Format {
    /// True when the format carries an audio track and no video track.
    ///
    /// yt-dlp reports an absent track as the literal string "none".
    pub fn is_audio_only(&self) -> bool {
        let no_video = matches!(self.vcodec.as_deref(), None | Some("none"));
        let has_audio = matches!(self.acodec.as_deref(), Some(codec) if codec != "none");
        no_video && has_audio
    }
}

/// Select the first audio-only format, in listing order
pub fn select_audio_stream(formats: &[Format]) -> Option<&Format> {
    formats.iter().find(|f| f.is_audio_only())
}
