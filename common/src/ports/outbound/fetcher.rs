use std::time::Duration;

use async_trait::async_trait;

use crate::error::ProbeError;

/// Fetches the body text of a URL with a deadline.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Performs one HTTP GET.
    ///
    /// Both connecting and reading the body must finish within `timeout`, otherwise the call
    /// returns [`ProbeError::Timeout`]. An empty body is a [`ProbeError::InvalidResponse`].
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, ProbeError>;
}
