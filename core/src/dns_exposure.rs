//! # DNS Exposure Heuristic
//!
//! Counts the externally visible IPv4 addresses of this device. A device carrying many of them is
//! more likely to send DNS queries outside a tunnel. This does not inspect DNS traffic or the
//! configured resolvers.

use std::collections::HashSet;

use leakcheck_common::error::ProbeError;
use leakcheck_common::models::interface::InterfaceAddress;
use leakcheck_common::models::report::DnsExposure;
use leakcheck_common::ports::outbound::system_repository::InterfaceSource;
use tracing::debug;

pub fn check_dns_exposure(source: &dyn InterfaceSource, threshold: usize) -> Result<DnsExposure, ProbeError> {
    let addresses = source.addresses()?;
    let exposure = assess_exposure(addresses, threshold);
    debug!(
        "DNS exposure: {} exposed address(es), threshold {threshold}",
        exposure.addresses.len()
    );
    Ok(exposure)
}

/// Keeps up, non-loopback IPv4 addresses, deduplicated by address.
///
/// `likely_leak` is set when strictly more than `threshold` addresses remain. The first occurrence
/// of each address keeps its position.
pub fn assess_exposure(addresses: Vec<InterfaceAddress>, threshold: usize) -> DnsExposure {
    let mut seen = HashSet::new();
    let exposed: Vec<InterfaceAddress> = addresses
        .into_iter()
        .filter(InterfaceAddress::is_exposed_ipv4)
        .filter(|a| seen.insert(a.address.clone()))
        .collect();

    DnsExposure {
        likely_leak: exposed.len() > threshold,
        addresses: exposed,
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
