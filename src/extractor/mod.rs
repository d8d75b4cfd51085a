pub mod models;
pub mod traits;
pub mod ytdlp;

pub use models::{select_audio_stream, Format, VideoInfo};
pub use traits::MediaExtractor;
pub use ytdlp::YtDlpExtractor;
