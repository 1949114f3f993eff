use pnet::datalink::NetworkInterface;

use pnet::ipnetwork::{IpNetwork, Ipv4Network};

use crate::models::interface::InterfaceAddress;

const TUNNEL_PREFIXES: &[&str] = &["tun", "tap", "wg", "ppp", "utun", "ipsec"];
const CELLULAR_PREFIXES: &[&str] = &["wwan", "rmnet", "ccmni"];

pub trait NetworkInterfaceExtension {
    fn get_ipv4_nets(&self) -> Vec<Ipv4Network>;
    fn to_interface_addresses(&self) -> Vec<InterfaceAddress>;
    /// Tunnel devices created by VPN clients.
    fn is_tunnel(&self) -> bool;
    fn is_cellular(&self) -> bool;
    /// Up and not loopback.
    fn is_active(&self) -> bool;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn get_ipv4_nets(&self) -> Vec<Ipv4Network> {
        self.ips
            .iter()
            .filter_map(|ip| {
                if let IpNetwork::V4(ipv4) = ip {
                    Some(*ipv4)
                } else {
                    None
                }
            })
            .collect()
    }

    fn to_interface_addresses(&self) -> Vec<InterfaceAddress> {
        self.ips
            .iter()
            .map(|net| {
                let ip = net.ip();
                InterfaceAddress::new(
                    self.name.clone(),
                    ip.to_string(),
                    self.is_loopback() || ip.is_loopback(),
                    self.is_up(),
                )
            })
            .collect()
    }

    fn is_tunnel(&self) -> bool {
        TUNNEL_PREFIXES.iter().any(|prefix| self.name.starts_with(prefix))
            || (self.is_up() && self.is_point_to_point() && !self.is_cellular())
    }

    fn is_cellular(&self) -> bool {
        CELLULAR_PREFIXES.iter().any(|prefix| self.name.starts_with(prefix))
    }

    fn is_active(&self) -> bool {
        self.is_up() && !self.is_loopback()
    }
}
