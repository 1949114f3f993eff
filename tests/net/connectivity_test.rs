mod util;

use leakcheck_common::models::system::Transport;
use leakcheck_common::network::interface::{count_active_interfaces, flatten_addresses};
use leakcheck_core::dns_exposure::assess_exposure;
use leakcheck_core::local_addresses::summarize;
use leakcheck_core::system::snapshot_from_interfaces;
use pnet::datalink::{MacAddr, NetworkInterface};
use util::{ni, v4, v6, DOWN_FLAGS, ETHERNET_FLAGS, LOOPBACK_FLAGS, TUNNEL_FLAGS};

/*************************************************************
                    Connectivity snapshot
**************************************************************/

#[test]
fn wired_host_under_wireguard_is_vpn_active_ethernet() {
    let snapshot = snapshot_from_interfaces(&[lo(), enp9s0(), wg0()], wireless, physical);
    assert!(snapshot.vpn_active);
    assert_eq!(snapshot.transport, Transport::Ethernet);
    assert!(snapshot.has_internet);
    assert!(snapshot.unmetered);
}

#[test]
fn wifi_host_without_tunnel_is_not_vpn_active() {
    let snapshot = snapshot_from_interfaces(&[lo(), wlan0(), docker0()], wireless, physical);
    assert!(!snapshot.vpn_active);
    assert_eq!(snapshot.transport, Transport::Wifi);
}

#[test]
fn tunnel_only_host_reports_vpn_transport() {
    let snapshot = snapshot_from_interfaces(&[lo(), tun0()], wireless, physical);
    assert_eq!(snapshot.transport, Transport::Vpn);
    assert!(snapshot.vpn_active);
}

#[test]
fn down_interfaces_do_not_count() {
    let snapshot = snapshot_from_interfaces(&[lo(), eth1_down()], wireless, physical);
    assert!(!snapshot.has_internet);
    assert_eq!(snapshot.transport, Transport::Unknown);
}

/*************************************************************
                   Address based heuristics
**************************************************************/

#[test]
fn full_table_exposes_only_up_ipv4_addresses() {
    let addresses = flatten_addresses(&iface_all());
    let exposure = assess_exposure(addresses.clone(), 4);
    let shown: Vec<&str> = exposure.addresses.iter().map(|a| a.address.as_str()).collect();

    assert_eq!(shown, vec!["192.168.1.20", "10.8.0.6", "192.168.0.12", "172.17.0.1", "10.64.0.2"]);
    assert!(exposure.likely_leak);

    let local = summarize(addresses, count_active_interfaces(&iface_all()));
    assert_eq!(local.interface_count, 5);
    assert_eq!(local.addresses.len(), 5);
}

#[test]
fn addressless_bridge_counts_as_an_interface() {
    let mut table = iface_all();
    table.push(ni("br0", 8, mac(5), &[], ETHERNET_FLAGS));

    let local = summarize(flatten_addresses(&table), count_active_interfaces(&table));

    assert_eq!(local.interface_count, 6);
    assert_eq!(local.addresses.len(), 5);
}

#[test]
fn exposure_is_stable_across_enumerations() {
    let first = assess_exposure(flatten_addresses(&iface_all()), 4);
    let second = assess_exposure(flatten_addresses(&iface_all()), 4);
    assert_eq!(first, second);
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

fn wireless(interface: &NetworkInterface) -> bool {
    interface.name.starts_with("wlan")
}

fn physical(interface: &NetworkInterface) -> bool {
    interface.name.starts_with("enp") || interface.name.starts_with("eth") || wireless(interface)
}

fn iface_all() -> Vec<NetworkInterface> {
    vec![lo(), enp9s0(), tun0(), wlan0(), docker0(), eth1_down(), wg0()]
}

fn mac(last: u8) -> Option<MacAddr> {
    Some(MacAddr::new(0x52, 0x54, 0x00, 0x12, 0x34, last))
}

fn lo() -> NetworkInterface {
    ni("lo", 1, Some(MacAddr::new(0, 0, 0, 0, 0, 0)), &[v4(127, 0, 0, 1, 8), v6("::1", 128)], LOOPBACK_FLAGS)
}

fn enp9s0() -> NetworkInterface {
    ni("enp9s0", 2, mac(1), &[v4(192, 168, 1, 20, 24), v6("fe80::5054:ff:fe12:3401", 64)], ETHERNET_FLAGS)
}

fn tun0() -> NetworkInterface {
    ni("tun0", 3, None, &[v4(10, 8, 0, 6, 24)], TUNNEL_FLAGS)
}

fn wlan0() -> NetworkInterface {
    ni("wlan0", 4, mac(2), &[v4(192, 168, 0, 12, 24)], ETHERNET_FLAGS)
}

fn docker0() -> NetworkInterface {
    ni("docker0", 5, mac(3), &[v4(172, 17, 0, 1, 16)], ETHERNET_FLAGS)
}

fn eth1_down() -> NetworkInterface {
    ni("eth1", 6, mac(4), &[v4(10, 0, 0, 5, 24)], DOWN_FLAGS)
}

fn wg0() -> NetworkInterface {
    ni("wg0", 7, None, &[v4(10, 64, 0, 2, 32)], TUNNEL_FLAGS)
}
