use std::ffi::OsString;
use std::path::{Path, PathBuf};

use leakcheck_common::error::ProbeError;
use leakcheck_common::models::system::WebRtcStatus;
use leakcheck_common::ports::outbound::system_repository::WebRtcProbe;
use tracing::debug;

/// Browser executables that ship a WebRTC stack.
const WEBRTC_BROWSERS: &[&str] = &[
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
    "firefox",
    "brave",
    "brave-browser",
    "msedge",
    "microsoft-edge",
    "opera",
];

/// Looks for WebRTC-capable browsers on the executable search path.
pub struct PathWebRtcProbe {
    search_path: Option<OsString>,
}

impl PathWebRtcProbe {
    pub fn from_env() -> Self {
        Self {
            search_path: std::env::var_os("PATH"),
        }
    }

    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl WebRtcProbe for PathWebRtcProbe {
    fn probe(&self) -> Result<WebRtcStatus, ProbeError> {
        let Some(search_path) = &self.search_path else {
            return Ok(WebRtcStatus::default());
        };
        let dirs: Vec<PathBuf> = std::env::split_paths(search_path).collect();

        let detected: Vec<String> = WEBRTC_BROWSERS
            .iter()
            .filter(|name| dirs.iter().any(|dir| is_executable_in(dir, name)))
            .map(|name| name.to_string())
            .collect();

        debug!("WebRTC-capable programs on PATH: {detected:?}");
        Ok(WebRtcStatus {
            available: !detected.is_empty(),
            detected,
        })
    }
}

fn is_executable_in(dir: &Path, name: &str) -> bool {
    dir.join(name).is_file() || dir.join(format!("{name}.exe")).is_file()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
