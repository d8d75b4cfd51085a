//! audioclip - one-shot YouTube audio clipper
//!
//! Downloads the audio track of a fixed YouTube video and trims it to the
//! first 90 seconds with ffmpeg. There are no flags and no configuration;
//! behavior is determined entirely by the constants in `app`.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    audioclip::app::run().await
}
