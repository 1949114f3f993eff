use std::net::Ipv4Addr;
use std::sync::Arc;

use leakcheck_common::error::ProbeError;
use leakcheck_common::models::probe::ProbeTarget;
use leakcheck_common::network::ip;
use leakcheck_common::ports::outbound::fetcher::Fetcher;
use tokio::time::timeout;
use tracing::debug;

/// Longest slice of a rejected body quoted in an error.
const BODY_EXCERPT_LIMIT: usize = 40;

/// Looks up the public IPv4 address through one IP-echo service.
#[derive(Clone)]
pub struct PublicIpResolver {
    fetcher: Arc<dyn Fetcher>,
    target: ProbeTarget,
}

impl PublicIpResolver {
    pub fn new(fetcher: Arc<dyn Fetcher>, target: ProbeTarget) -> Self {
        Self { fetcher, target }
    }

    pub async fn resolve_public_ip(&self) -> Result<Ipv4Addr, ProbeError> {
        probe_target(self.fetcher.as_ref(), &self.target).await
    }
}

/// Fetches `target` and parses the trimmed body as an IPv4 literal.
///
/// The deadline is enforced here as well as inside the fetcher, so a fetcher that ignores its
/// timeout argument still cannot stall the caller.
pub async fn probe_target(fetcher: &dyn Fetcher, target: &ProbeTarget) -> Result<Ipv4Addr, ProbeError> {
    debug!("Probing {} at {}", target.service_name, target.url);

    let deadline = target.timeout();
    let body = match timeout(deadline, fetcher.fetch(&target.url, deadline)).await {
        Ok(result) => result?,
        Err(_elapsed) => return Err(ProbeError::Timeout(target.timeout_ms)),
    };

    ip::parse_echo_body(&body).ok_or_else(|| {
        let excerpt: String = body.trim().chars().take(BODY_EXCERPT_LIMIT).collect();
        ProbeError::InvalidResponse(format!("{} returned '{excerpt}'", target.service_name))
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
