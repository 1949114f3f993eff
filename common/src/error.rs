//! # Probe Errors
//!
//! Every network-touching operation in leakcheck returns a [`ProbeError`] instead of aborting the
//! run. The error carries a coarse [`ErrorKind`] used for classification and a detail string for
//! logs.

use std::fmt;

use thiserror::Error;

/// Maximum number of characters of an unknown error shown to the user.
const UNKNOWN_DETAIL_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Timeout,
    Unreachable,
    Io,
    InvalidResponse,
    InvalidInput,
    PermissionDenied,
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Timeout => "timeout",
            ErrorKind::Unreachable => "unreachable",
            ErrorKind::Io => "io",
            ErrorKind::InvalidResponse => "invalid response",
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::PermissionDenied => "permission denied",
            ErrorKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("deadline of {0} ms expired")]
    Timeout(u64),
    #[error("unreachable: {0}")]
    Unreachable(String),
    #[error("stream failure: {0}")]
    Io(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("{0}")]
    Unknown(String),
}

impl ProbeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProbeError::Timeout(_) => ErrorKind::Timeout,
            ProbeError::Unreachable(_) => ErrorKind::Unreachable,
            ProbeError::Io(_) => ErrorKind::Io,
            ProbeError::InvalidResponse(_) => ErrorKind::InvalidResponse,
            ProbeError::InvalidInput(_) => ErrorKind::InvalidInput,
            ProbeError::PermissionDenied(_) => ErrorKind::PermissionDenied,
            ProbeError::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// Short message suitable for the presentation layer.
    pub fn user_message(&self) -> String {
        match self {
            ProbeError::Timeout(_) => "Timeout - check your internet connection".to_string(),
            ProbeError::Unreachable(_) => "No internet connection".to_string(),
            ProbeError::Io(detail) => format!("Connection error: {detail}"),
            ProbeError::InvalidResponse(_) => "Invalid response from service".to_string(),
            ProbeError::InvalidInput(detail) => format!("Invalid input: {detail}"),
            ProbeError::PermissionDenied(_) => {
                "Permission error - check app permissions".to_string()
            }
            ProbeError::Unknown(detail) => {
                let truncated: String = detail.chars().take(UNKNOWN_DETAIL_LIMIT).collect();
                if truncated.is_empty() {
                    "Error: unknown error".to_string()
                } else {
                    format!("Error: {truncated}")
                }
            }
        }
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => ProbeError::PermissionDenied(err.to_string()),
            std::io::ErrorKind::TimedOut => ProbeError::Timeout(0),
            std::io::ErrorKind::ConnectionRefused
            | std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::ConnectionAborted
            | std::io::ErrorKind::NotConnected
            | std::io::ErrorKind::AddrNotAvailable => ProbeError::Unreachable(err.to_string()),
            _ => ProbeError::Io(err.to_string()),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
