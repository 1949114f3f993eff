use pnet::datalink::NetworkInterface;

use leakcheck_common::error::ProbeError;
use leakcheck_common::models::interface::InterfaceAddress;
use leakcheck_common::models::system::{ConnectivitySnapshot, Transport};
use leakcheck_common::network::interface;
use leakcheck_common::ports::outbound::system_repository::{ConnectivityProvider, InterfaceSource};

/// Interface table and connectivity flags of the local host, read through `pnet`.
pub struct SystemRepo;

impl InterfaceSource for SystemRepo {
    fn addresses(&self) -> Result<Vec<InterfaceAddress>, ProbeError> {
        Ok(interface::enumerate_addresses())
    }

    fn active_interface_count(&self) -> Result<usize, ProbeError> {
        Ok(interface::count_active_interfaces(&pnet::datalink::interfaces()))
    }
}

impl ConnectivityProvider for SystemRepo {
    fn snapshot(&self) -> Result<ConnectivitySnapshot, ProbeError> {
        let interfaces = pnet::datalink::interfaces();
        Ok(snapshot_from_interfaces(
            &interfaces,
            interface::is_wireless,
            interface::is_physical,
        ))
    }
}

/// Derives the capability flags from an interface table.
///
/// `validated` stays false here; only a successful public IP lookup can set it.
pub fn snapshot_from_interfaces(
    interfaces: &[NetworkInterface],
    is_wireless: impl Fn(&NetworkInterface) -> bool,
    is_physical: impl Fn(&NetworkInterface) -> bool,
) -> ConnectivitySnapshot {
    let transport = interface::classify_transport(interfaces, is_wireless, is_physical);

    ConnectivitySnapshot {
        vpn_active: interface::has_active_tunnel(interfaces),
        transport,
        has_internet: interface::has_routable_ipv4(interfaces),
        validated: false,
        unmetered: transport != Transport::Cellular,
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
