//! External tool discovery
//!
//! The pipeline shells out to yt-dlp for stream resolution and to ffmpeg for
//! the trim. Both are located the same way before any work starts: system
//! PATH first, then a caller-supplied list of well-known install locations.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Find an external tool by name.
///
/// `common_paths` entries may start with `~/`, which is expanded to the
/// user's home directory.
pub fn find_tool(name: &str, common_paths: &[&str]) -> Option<PathBuf> {
    if let Some(path) = find_in_path(name) {
        debug!("Using {} from PATH: {:?}", name, path);
        return Some(path);
    }

    if let Some(path) = find_in_common_paths(common_paths) {
        debug!("Using {} from common path: {:?}", name, path);
        return Some(path);
    }

    warn!("{} not found in PATH or common install locations", name);
    None
}

/// Find a tool in the system PATH
fn find_in_path(name: &str) -> Option<PathBuf> {
    // Try the which crate first
    if let Ok(path) = which::which(name) {
        if path.exists() {
            return Some(path);
        }
    }

    // Fallback: shell `which` command
    let output = Command::new("which").arg(name).output().ok()?;

    if output.status.success() {
        let path_str = String::from_utf8_lossy(&output.stdout);
        let path = PathBuf::from(path_str.trim());
        if path.exists() {
            return Some(path);
        }
    }

    None
}

/// Check a list of well-known install locations
fn find_in_common_paths(common_paths: &[&str]) -> Option<PathBuf> {
    for path_str in common_paths {
        // Expand ~ to home directory
        let expanded = match path_str.strip_prefix("~/") {
            Some(rest) => match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => continue,
            },
            None => PathBuf::from(*path_str),
        };

        if expanded.exists() && is_executable(&expanded) {
            return Some(expanded);
        }
    }

    None
}

/// Check if a file is executable
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.exists()
}
