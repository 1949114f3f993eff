//! # Check Reports
//!
//! The values handed to the presentation sink at the end of a run. Every sub-check carries its own
//! [`CheckResult`] so that one failure never hides the others.

use std::net::Ipv4Addr;

use thiserror::Error;

use crate::error::ProbeError;
use crate::models::geo::GeoRecord;
use crate::models::interface::InterfaceAddress;
use crate::models::system::{ConnectivitySnapshot, TimeSnapshot, WebRtcStatus};
use crate::models::verdict::ConsistencyVerdict;

pub type CheckResult<T> = Result<T, ProbeError>;

/// Whether a public IP lies in a private or CGNAT range.
///
/// This is a prefix heuristic only. It is not a lookup in any VPN exit-node database, and a `true`
/// value merely says the address is private or carrier-grade NAT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VpnRangeVerdict {
    pub ip: String,
    pub is_common_vpn_or_nat_range: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsExposure {
    pub addresses: Vec<InterfaceAddress>,
    pub likely_leak: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAddresses {
    pub addresses: Vec<InterfaceAddress>,
    pub interface_count: usize,
}

#[derive(Debug, Clone)]
pub struct BasicReport {
    pub connectivity: CheckResult<ConnectivitySnapshot>,
    pub public_ip: CheckResult<Ipv4Addr>,
    pub consistency: CheckResult<ConsistencyVerdict>,
    pub dns_exposure: CheckResult<DnsExposure>,
    pub local_addresses: CheckResult<LocalAddresses>,
}

#[derive(Debug, Clone)]
pub struct AdvancedReport {
    pub webrtc: CheckResult<WebRtcStatus>,
    pub geolocation: CheckResult<GeoRecord>,
    pub time: CheckResult<TimeSnapshot>,
    pub vpn_range: CheckResult<VpnRangeVerdict>,
}

/// A failure of a whole run, as opposed to a single sub-check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("the session was closed before the run finished")]
    Cancelled,
}

impl RunError {
    pub fn user_message(&self) -> String {
        match self {
            RunError::Cancelled => "Check cancelled".to_string(),
        }
    }
}
