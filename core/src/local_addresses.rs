use leakcheck_common::error::ProbeError;
use leakcheck_common::models::interface::InterfaceAddress;
use leakcheck_common::models::report::LocalAddresses;
use leakcheck_common::ports::outbound::system_repository::InterfaceSource;

/// Lists the up, non-loopback IPv4 addresses and counts the interfaces that are up.
pub fn list_local_addresses(source: &dyn InterfaceSource) -> Result<LocalAddresses, ProbeError> {
    let interface_count = source.active_interface_count()?;
    Ok(summarize(source.addresses()?, interface_count))
}

pub fn summarize(all: Vec<InterfaceAddress>, interface_count: usize) -> LocalAddresses {
    let addresses = all.into_iter().filter(InterfaceAddress::is_exposed_ipv4).collect();

    LocalAddresses {
        addresses,
        interface_count,
    }
}
