use std::collections::BTreeSet;

use crate::error::ProbeError;
use crate::models::interface::InterfaceAddress;
use crate::models::system::{ConnectivitySnapshot, TimeSnapshot, WebRtcStatus};

/// Enumerates the addresses of local network interfaces.
pub trait InterfaceSource: Send + Sync {
    /// Every address of every interface, loopback and down interfaces included.
    fn addresses(&self) -> Result<Vec<InterfaceAddress>, ProbeError>;

    /// Number of up, non-loopback interfaces.
    ///
    /// The default counts the interfaces named in [`Self::addresses`]. Sources that can see the
    /// interface table should override it so interfaces without an address are counted too.
    fn active_interface_count(&self) -> Result<usize, ProbeError> {
        let addresses = self.addresses()?;
        let names: BTreeSet<&str> = addresses
            .iter()
            .filter(|a| a.is_up && !a.is_loopback)
            .map(|a| a.interface_name.as_str())
            .collect();
        Ok(names.len())
    }
}

/// Reports the transport and capability flags of the active network.
pub trait ConnectivityProvider: Send + Sync {
    /// The returned `validated` flag is what the provider knows locally; the orchestrator
    /// replaces it with the outcome of the public IP lookup.
    fn snapshot(&self) -> Result<ConnectivitySnapshot, ProbeError>;
}

/// Reads the device time zone and locale.
pub trait LocaleSource: Send + Sync {
    fn snapshot(&self) -> Result<TimeSnapshot, ProbeError>;
}

/// Static check for WebRTC support on the device. Never touches the network.
pub trait WebRtcProbe: Send + Sync {
    fn probe(&self) -> Result<WebRtcStatus, ProbeError>;
}
