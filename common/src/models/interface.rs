/// One address bound to a local network interface.
///
/// Enumerated fresh on every call; there is no identity across enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceAddress {
    pub interface_name: String,
    pub address: String,
    pub is_loopback: bool,
    pub is_up: bool,
}

impl InterfaceAddress {
    pub fn new(
        interface_name: impl Into<String>,
        address: impl Into<String>,
        is_loopback: bool,
        is_up: bool,
    ) -> Self {
        Self {
            interface_name: interface_name.into(),
            address: address.into(),
            is_loopback,
            is_up,
        }
    }

    /// An address that is up, not loopback, and written in dotted notation.
    pub fn is_exposed_ipv4(&self) -> bool {
        self.is_up && !self.is_loopback && self.address.contains('.')
    }
}
