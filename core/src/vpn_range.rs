//! # VPN Range Classifier
//!
//! Flags public IPs that fall in ranges commonly handed out behind a VPN or carrier NAT.
//!
//! This is a static prefix rule and nothing more. It is not a lookup in a VPN exit-node database,
//! so a commercial VPN exit with an ordinary public address is never flagged. The `100.` prefix
//! matches all of `100.0.0.0/8`, which is wider than the `100.64.0.0/10` CGNAT block.

use leakcheck_common::models::report::VpnRangeVerdict;

const VPN_OR_NAT_PREFIXES: &[&str] = &[
    "10.", "172.16.", "172.17.", "172.18.", "172.19.", "172.20.", "172.21.", "172.22.", "172.23.",
    "172.24.", "172.25.", "172.26.", "172.27.", "172.28.", "172.29.", "172.30.", "172.31.",
    "192.168.", "100.",
];

/// True when `ip` starts with one of the private or CGNAT prefixes.
pub fn classify_vpn_range(ip: &str) -> bool {
    VPN_OR_NAT_PREFIXES.iter().any(|prefix| ip.starts_with(prefix))
}

pub fn vpn_range_verdict(ip: &str) -> VpnRangeVerdict {
    VpnRangeVerdict {
        ip: ip.to_string(),
        is_common_vpn_or_nat_range: classify_vpn_range(ip),
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
