use std::net::Ipv4Addr;
use std::time::Duration;

use crate::error::ProbeError;

/// A single "what is my IP" service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProbeTarget {
    pub service_name: String,
    pub url: String,
    pub timeout_ms: u64,
}

impl ProbeTarget {
    pub fn new(service_name: impl Into<String>, url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            service_name: service_name.into(),
            url: url.into(),
            timeout_ms,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Result of probing one [`ProbeTarget`]. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub target: ProbeTarget,
    result: Result<Ipv4Addr, ProbeError>,
}

impl ProbeOutcome {
    pub fn success(target: ProbeTarget, value: Ipv4Addr) -> Self {
        Self {
            target,
            result: Ok(value),
        }
    }

    pub fn failure(target: ProbeTarget, error: ProbeError) -> Self {
        Self {
            target,
            result: Err(error),
        }
    }

    pub fn from_result(target: ProbeTarget, result: Result<Ipv4Addr, ProbeError>) -> Self {
        Self { target, result }
    }

    pub fn value(&self) -> Option<Ipv4Addr> {
        self.result.as_ref().ok().copied()
    }

    pub fn error(&self) -> Option<&ProbeError> {
        self.result.as_ref().err()
    }

    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}
