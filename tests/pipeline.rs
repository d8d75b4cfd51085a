//! Integration tests covering the fetch -> download -> trim pipeline without
//! hitting the network or a real transcoder.

use anyhow::Result;
use async_trait::async_trait;
use audioclip::app::run_pipeline;
use audioclip::extractor::{Format, MediaExtractor, VideoInfo};
use audioclip::{DownloadEngine, Trimmer};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn audio_format(url: &str) -> Format {
    Format {
        format_id: "140".to_string(),
        ext: "m4a".to_string(),
        url: url.to_string(),
        vcodec: Some("none".to_string()),
        acodec: Some("mp4a.40.2".to_string()),
        filesize: Some(1_024),
        abr: Some(129.478),
    }
}

fn video_only_format() -> Format {
    Format {
        format_id: "137".to_string(),
        ext: "mp4".to_string(),
        url: "https://cdn.example/137".to_string(),
        vcodec: Some("avc1.640028".to_string()),
        acodec: Some("none".to_string()),
        filesize: Some(10_240),
        abr: None,
    }
}

/// Extractor stub that hands back a fixed stream listing
struct StubExtractor {
    formats: Vec<Format>,
    direct_url: Option<String>,
}

#[async_trait]
impl MediaExtractor for StubExtractor {
    async fn extract_info(&self, url: &str) -> Result<VideoInfo> {
        Ok(VideoInfo {
            id: "vid123".to_string(),
            title: "Sample Video".to_string(),
            url: url.to_string(),
            duration: Some(213),
            formats: self.formats.clone(),
        })
    }

    async fn resolve_direct_url(&self, _url: &str, format_id: &str) -> Result<String> {
        self.direct_url
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no direct url for format {}", format_id))
    }
}

/// Serve the same canned HTTP response for every connection
async fn serve_stream(body: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;

            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = socket.write_all(header.as_bytes()).await;
            let _ = socket.write_all(body).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/audio", addr)
}

/// Write an executable stand-in for ffmpeg into `dir`
///
/// argv: -y -t <secs> -i <input> <output>. The script records that it ran,
/// then copies the input to the output.
#[cfg(unix)]
fn stub_transcoder(dir: &Path) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let marker = dir.join("transcoder-ran");
    let path = dir.join("ffmpeg-stub");
    let script = format!("#!/bin/sh\ntouch \"{}\"\ncp \"$5\" \"$6\"\n", marker.display());
    std::fs::write(&path, script).expect("write stub");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod stub");
    (path, marker)
}

#[cfg(unix)]
#[tokio::test]
async fn pipeline_downloads_and_trims_audio_stream() {
    let temp = TempDir::new().expect("temp dir");
    let url = serve_stream(b"stream-bytes").await;

    let extractor = StubExtractor {
        formats: vec![video_only_format(), audio_format(&url)],
        direct_url: None,
    };
    let engine = DownloadEngine::new().expect("engine");
    let (stub, marker) = stub_transcoder(temp.path());
    let trimmer = Trimmer::with_binary(stub);

    let audio_file = temp.path().join("audio.mp4");
    let output_file = temp.path().join("audio_90s.mp3");

    run_pipeline(
        &extractor,
        &engine,
        &trimmer,
        "https://www.youtube.com/watch?v=vid123",
        &audio_file,
        Duration::from_secs(90),
        &output_file,
    )
    .await
    .expect("pipeline");

    assert_eq!(std::fs::read(&audio_file).expect("audio file"), b"stream-bytes");
    assert!(marker.exists(), "transcoder should have run");
    assert_eq!(
        std::fs::read(&output_file).expect("output file"),
        b"stream-bytes"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn no_audio_stream_fails_before_trim() {
    let temp = TempDir::new().expect("temp dir");

    let extractor = StubExtractor {
        formats: vec![video_only_format()],
        direct_url: None,
    };
    let engine = DownloadEngine::new().expect("engine");
    let (stub, marker) = stub_transcoder(temp.path());
    let trimmer = Trimmer::with_binary(stub);

    let audio_file = temp.path().join("audio.mp4");
    let output_file = temp.path().join("audio_90s.mp3");

    let err = run_pipeline(
        &extractor,
        &engine,
        &trimmer,
        "https://www.youtube.com/watch?v=vid123",
        &audio_file,
        Duration::from_secs(90),
        &output_file,
    )
    .await
    .expect_err("pipeline must fail");

    assert!(err.to_string().contains("No audio-only stream"));
    assert!(!audio_file.exists(), "nothing should have been downloaded");
    assert!(!marker.exists(), "trim step must not run");
    assert!(!output_file.exists());
}

#[cfg(unix)]
#[tokio::test]
async fn empty_format_url_falls_back_to_direct_url_resolution() {
    let temp = TempDir::new().expect("temp dir");
    let url = serve_stream(b"resolved-bytes").await;

    let extractor = StubExtractor {
        formats: vec![audio_format("")],
        direct_url: Some(url),
    };
    let engine = DownloadEngine::new().expect("engine");
    let (stub, _marker) = stub_transcoder(temp.path());
    let trimmer = Trimmer::with_binary(stub);

    let audio_file = temp.path().join("audio.mp4");
    let output_file = temp.path().join("audio_90s.mp3");

    run_pipeline(
        &extractor,
        &engine,
        &trimmer,
        "https://www.youtube.com/watch?v=vid123",
        &audio_file,
        Duration::from_secs(90),
        &output_file,
    )
    .await
    .expect("pipeline");

    assert_eq!(
        std::fs::read(&output_file).expect("output file"),
        b"resolved-bytes"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn rerunning_pipeline_overwrites_both_outputs() {
    let temp = TempDir::new().expect("temp dir");
    let url = serve_stream(b"stream-bytes").await;

    let extractor = StubExtractor {
        formats: vec![audio_format(&url)],
        direct_url: None,
    };
    let engine = DownloadEngine::new().expect("engine");
    let (stub, _marker) = stub_transcoder(temp.path());
    let trimmer = Trimmer::with_binary(stub);

    let audio_file = temp.path().join("audio.mp4");
    let output_file = temp.path().join("audio_90s.mp3");

    // Seed both paths with stale content longer than the fresh payload
    std::fs::write(&audio_file, b"stale-audio-from-a-previous-run").expect("seed audio");
    std::fs::write(&output_file, b"stale-clip-from-a-previous-run").expect("seed clip");

    for _ in 0..2 {
        run_pipeline(
            &extractor,
            &engine,
            &trimmer,
            "https://www.youtube.com/watch?v=vid123",
            &audio_file,
            Duration::from_secs(90),
            &output_file,
        )
        .await
        .expect("pipeline");

        assert_eq!(std::fs::read(&audio_file).expect("audio file"), b"stream-bytes");
        assert_eq!(
            std::fs::read(&output_file).expect("output file"),
            b"stream-bytes"
        );
    }
}
