use std::fmt;

/// The transport carrying the active network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Wifi,
    Cellular,
    Ethernet,
    Vpn,
    Unknown,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transport::Wifi => "WiFi",
            Transport::Cellular => "Cellular",
            Transport::Ethernet => "Ethernet",
            Transport::Vpn => "VPN",
            Transport::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Capability flags of the active network at the time of a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivitySnapshot {
    pub vpn_active: bool,
    pub transport: Transport,
    pub has_internet: bool,
    /// The network was validated by a successful public IP lookup in the same run.
    pub validated: bool,
    pub unmetered: bool,
}

/// Time zone and locale of the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSnapshot {
    pub timezone_id: String,
    /// Local wall clock as `HH:MM:SS`.
    pub time: String,
    /// Local date as `dd/mm/yyyy`.
    pub date: String,
    pub language: String,
    pub country: String,
    /// Offset from UTC in whole hours, truncated toward zero.
    pub utc_offset_hours: i32,
}

/// Result of the static WebRTC capability check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebRtcStatus {
    pub available: bool,
    /// WebRTC-capable programs found on this device.
    pub detected: Vec<String>,
}
