use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;
#[cfg(target_os = "macos")]
pub use macos_impl::{is_physical, is_wireless};
#[cfg(target_os = "linux")]
pub use linux_impl::{is_physical, is_wireless};
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub use fallback_impl::{is_physical, is_wireless};

use crate::models::interface::InterfaceAddress;
use crate::models::system::Transport;
use crate::network::ip;
use crate::utils::interface::NetworkInterfaceExtension;

/// Lists every address of every interface known to the OS.
pub fn enumerate_addresses() -> Vec<InterfaceAddress> {
    flatten_addresses(&pnet::datalink::interfaces())
}

pub fn flatten_addresses(interfaces: &[NetworkInterface]) -> Vec<InterfaceAddress> {
    interfaces
        .iter()
        .flat_map(|i| i.to_interface_addresses())
        .collect()
}

/// Up, non-loopback interfaces, whether or not they carry an address.
pub fn count_active_interfaces(interfaces: &[NetworkInterface]) -> usize {
    interfaces.iter().filter(|i| i.is_active()).count()
}

/// True when an active interface carries an IPv4 address that can reach beyond the link.
pub fn has_routable_ipv4(interfaces: &[NetworkInterface]) -> bool {
    interfaces
        .iter()
        .filter(|i| i.is_active())
        .flat_map(|i| i.ips.iter())
        .any(|net| match net {
            IpNetwork::V4(v4) => ip::is_routable_v4(&v4.ip()),
            IpNetwork::V6(_) => false,
        })
}

pub fn has_active_tunnel(interfaces: &[NetworkInterface]) -> bool {
    interfaces.iter().any(|i| i.is_active() && i.is_tunnel())
}

/// Picks the transport of the active network.
///
/// Non-tunnel interfaces win in the order WiFi, cellular, ethernet. Only when nothing but a
/// tunnel is active is the transport reported as VPN.
pub fn classify_transport(
    interfaces: &[NetworkInterface],
    is_wireless: impl Fn(&NetworkInterface) -> bool,
    is_physical: impl Fn(&NetworkInterface) -> bool,
) -> Transport {
    let carriers: Vec<&NetworkInterface> = interfaces
        .iter()
        .filter(|i| i.is_active() && !i.is_tunnel() && !i.get_ipv4_nets().is_empty())
        .collect();

    if carriers.iter().any(|i| is_wireless(i)) {
        return Transport::Wifi;
    }
    if carriers.iter().any(|i| i.is_cellular()) {
        return Transport::Cellular;
    }
    if carriers.iter().any(|i| is_physical(i)) {
        return Transport::Ethernet;
    }
    if has_active_tunnel(interfaces) {
        return Transport::Vpn;
    }
    Transport::Unknown
}

#[cfg(target_os = "linux")]
mod linux_impl {
    use super::*;
    use std::path::Path;

    pub fn is_physical(interface: &NetworkInterface) -> bool {
        Path::new(&format!("/sys/class/net/{}/device", interface.name)).exists()
    }

    pub fn is_wireless(interface: &NetworkInterface) -> bool {
        Path::new(&format!("/sys/class/net/{}/wireless", interface.name)).exists()
    }
}

#[cfg(target_os = "macos")]
mod macos_impl {
    use super::*;
    use std::collections::HashSet;
    use std::process::Command;
    use std::sync::OnceLock;

    struct HardwareInfo {
        physical_devices: HashSet<String>,
        wireless_devices: HashSet<String>,
    }

    /// Runs `networksetup` once on first access.
    fn get_hardware_info() -> &'static HardwareInfo {
        static HARDWARE_INFO: OnceLock<HardwareInfo> = OnceLock::new();

        HARDWARE_INFO.get_or_init(|| {
            let mut physical = HashSet::new();
            let mut wireless = HashSet::new();

            if let Ok(output) = Command::new("networksetup").arg("-listallhardwareports").output() {
                let stdout = String::from_utf8_lossy(&output.stdout);
                for line in stdout.lines() {
                    if let Some(device) = line.strip_prefix("Device: ") {
                        physical.insert(device.trim().to_string());
                    }
                }
            }

            for device in &physical {
                let is_wifi = Command::new("networksetup")
                    .arg("-getairportnetwork")
                    .arg(device)
                    .output()
                    .map(|out| out.status.success())
                    .unwrap_or(false);

                if is_wifi {
                    wireless.insert(device.clone());
                }
            }

            HardwareInfo {
                physical_devices: physical,
                wireless_devices: wireless,
            }
        })
    }

    pub fn is_physical(interface: &NetworkInterface) -> bool {
        get_hardware_info().physical_devices.contains(&interface.name)
    }

    pub fn is_wireless(interface: &NetworkInterface) -> bool {
        get_hardware_info().wireless_devices.contains(&interface.name)
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
mod fallback_impl {
    use super::*;

    pub fn is_physical(interface: &NetworkInterface) -> bool {
        interface.mac.is_some() && !interface.is_tunnel()
    }

    pub fn is_wireless(interface: &NetworkInterface) -> bool {
        interface.name.starts_with("wl") || interface.name.starts_with("wi")
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
