use std::time::Duration;

use crate::models::probe::ProbeTarget;

/// Deadline for the canonical public IP lookup.
pub const CANONICAL_TIMEOUT_MS: u64 = 10_000;
/// Deadline for each consistency probe.
pub const CONSISTENCY_TIMEOUT_MS: u64 = 5_000;
/// Deadline for the geo-IP request.
pub const GEO_TIMEOUT_MS: u64 = 10_000;
/// More than this many exposed addresses is flagged as a likely leak.
pub const DNS_LEAK_THRESHOLD: usize = 4;

pub const DEFAULT_GEO_ENDPOINT: &str = "http://ip-api.com/json/";

#[derive(Debug, Clone)]
pub struct Config {
    /// Suppresses the start-up banner.
    pub no_banner: bool,
    /// 0 prints everything, 1 drops headers, 2 prints only verdict lines.
    pub quiet: u8,
    /// Service used by the single IP resolver.
    pub canonical_target: ProbeTarget,
    /// Services queried concurrently by the consistency checker.
    pub consistency_targets: Vec<ProbeTarget>,
    /// Base URL of the geo-IP service. The IP is appended to it.
    pub geo_endpoint: String,
    pub geo_timeout: Duration,
    pub dns_leak_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            canonical_target: ProbeTarget::new("IPify", "https://api.ipify.org", CANONICAL_TIMEOUT_MS),
            consistency_targets: default_consistency_targets(CONSISTENCY_TIMEOUT_MS),
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            geo_timeout: Duration::from_millis(GEO_TIMEOUT_MS),
            dns_leak_threshold: DNS_LEAK_THRESHOLD,
        }
    }
}

impl Config {
    /// Rebuilds the consistency targets with a different per-target deadline.
    pub fn with_consistency_timeout(mut self, timeout_ms: u64) -> Self {
        self.consistency_targets = default_consistency_targets(timeout_ms);
        self
    }

    pub fn with_geo_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.geo_endpoint = endpoint.into();
        self
    }
}

pub fn default_consistency_targets(timeout_ms: u64) -> Vec<ProbeTarget> {
    vec![
        ProbeTarget::new("IPify", "https://api.ipify.org", timeout_ms),
        ProbeTarget::new("ICanHazIP", "https://icanhazip.com", timeout_ms),
        ProbeTarget::new("AWS", "https://checkip.amazonaws.com", timeout_ms),
        ProbeTarget::new("IfConfig", "https://ifconfig.me/ip", timeout_ms),
    ]
}
