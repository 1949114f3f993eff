use std::error::Error as StdError;
use std::time::Duration;

use async_trait::async_trait;
use leakcheck_common::error::ProbeError;
use leakcheck_common::ports::outbound::fetcher::Fetcher;
use tokio::time::timeout;
use tracing::debug;

const USER_AGENT: &str = concat!("leakcheck/", env!("CARGO_PKG_VERSION"));

/// [`Fetcher`] backed by a shared `reqwest` client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProbeError::Unknown(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, deadline: Duration) -> Result<String, ProbeError> {
        let deadline_ms = deadline.as_millis() as u64;

        let request = async {
            let response = self
                .client
                .get(url)
                .timeout(deadline)
                .send()
                .await
                .map_err(|e| map_reqwest_error(e, deadline_ms))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ProbeError::InvalidResponse(format!("{url} answered {status}")));
            }

            let body = response
                .text()
                .await
                .map_err(|e| map_reqwest_error(e, deadline_ms))?;

            if body.trim().is_empty() {
                return Err(ProbeError::InvalidResponse(format!("{url} sent an empty body")));
            }
            Ok::<String, ProbeError>(body)
        };

        match timeout(deadline, request).await {
            Ok(result) => {
                if let Err(e) = &result {
                    debug!("GET {url} failed: {e}");
                }
                result
            }
            Err(_elapsed) => {
                debug!("GET {url} exceeded {deadline_ms} ms");
                Err(ProbeError::Timeout(deadline_ms))
            }
        }
    }
}

/// Sorts a `reqwest` failure into the probe error kinds.
pub fn map_reqwest_error(err: reqwest::Error, deadline_ms: u64) -> ProbeError {
    if err.is_timeout() {
        return ProbeError::Timeout(deadline_ms);
    }
    if let Some(io) = find_io_error(&err) {
        if io.kind() == std::io::ErrorKind::PermissionDenied {
            return ProbeError::PermissionDenied(io.to_string());
        }
    }

    let detail = err.to_string();
    if err.is_builder() {
        ProbeError::InvalidInput(detail)
    } else if err.is_connect() || err.is_request() {
        ProbeError::Unreachable(detail)
    } else if err.is_body() || err.is_decode() {
        ProbeError::Io(detail)
    } else if err.is_redirect() || err.is_status() {
        ProbeError::InvalidResponse(detail)
    } else {
        ProbeError::Unknown(detail)
    }
}

fn find_io_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a std::io::Error> {
    let mut source = err.source();
    while let Some(inner) = source {
        if let Some(io) = inner.downcast_ref::<std::io::Error>() {
            return Some(io);
        }
        source = inner.source();
    }
    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
