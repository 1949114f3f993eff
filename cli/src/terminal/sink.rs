use std::net::Ipv4Addr;

use colored::*;
use leakcheck_common::error::ProbeError;
use leakcheck_common::models::geo::GeoRecord;
use leakcheck_common::models::report::{
    AdvancedReport, BasicReport, CheckResult, DnsExposure, LocalAddresses, RunError, VpnRangeVerdict,
};
use leakcheck_common::models::system::{ConnectivitySnapshot, TimeSnapshot, WebRtcStatus};
use leakcheck_common::models::verdict::{Classification, ConsistencyVerdict};
use leakcheck_common::ports::outbound::ui::ReportSink;

use crate::terminal::{colors, print, spinner};

/// DNS exposure lists at most this many addresses.
const DNS_LISTED_ADDRESSES: usize = 5;

const BASIC_KEYS: &[&str] = &["VPN status", "Public IP", "Consistency", "Responded", "DNS", "Interfaces"];
const ADVANCED_KEYS: &[&str] = &["WebRTC", "Country", "City", "ISP", "IP", "Time zone", "UTC offset", "VPN range"];

const WEBRTC_SCOPE_NOTE: &str = "Note: limited check, only browsers on PATH are looked for.";
const WEBRTC_BROWSER_NOTE: &str = "WebRTC leaks are most common in browsers.";
const VPN_RANGE_NOTE: &str = "Prefix heuristic only, not a VPN exit-node lookup.";

/// Prints reports to the terminal.
///
/// `quiet` follows the `-q` count: 1 drops headers, 2 keeps only the verdict lines.
pub struct TerminalSink {
    quiet: u8,
}

impl TerminalSink {
    pub fn new(quiet: u8) -> Self {
        Self { quiet }
    }

    fn verbose_details(&self) -> bool {
        self.quiet < 2
    }

    fn header(&self, title: &str) {
        print::header(title, self.quiet);
    }

    fn connectivity(&self, connectivity: &CheckResult<ConnectivitySnapshot>) {
        self.header("network");
        match connectivity {
            Ok(snapshot) => {
                print::aligned_line("VPN status", vpn_status(snapshot.vpn_active));
                if self.verbose_details() {
                    print::as_tree_one_level(vec![
                        ("Type".to_string(), snapshot.transport.to_string().color(colors::ACCENT)),
                        ("Internet".to_string(), yes_no(snapshot.has_internet, "available", "unavailable")),
                        ("Validated".to_string(), yes_no(snapshot.validated, "yes", "no")),
                        ("Unmetered".to_string(), yes_no(snapshot.unmetered, "yes", "no")),
                    ]);
                }
            }
            Err(e) => print::aligned_line("VPN status", failure(e)),
        }
    }

    fn public_ip(&self, public_ip: &CheckResult<Ipv4Addr>) {
        match public_ip {
            Ok(ip) => print::aligned_line("Public IP", ip.to_string().color(colors::IPV4_ADDR)),
            Err(e) => print::aligned_line("Public IP", failure(e)),
        }
    }

    fn local_addresses(&self, local: &CheckResult<LocalAddresses>) {
        if !self.verbose_details() {
            return;
        }
        self.header("local addresses");
        match local {
            Ok(local) if local.addresses.is_empty() => print::print_status("no local IP found"),
            Ok(local) => {
                print::as_tree_one_level(
                    local
                        .addresses
                        .iter()
                        .map(|a| (a.interface_name.clone(), a.address.color(colors::IPV4_ADDR)))
                        .collect(),
                );
                print::aligned_line(
                    "Interfaces",
                    format!(
                        "{} address(es) on {} interface(s)",
                        local.addresses.len(),
                        local.interface_count
                    ),
                );
            }
            Err(e) => print::aligned_line("Interfaces", failure(e)),
        }
    }

    fn consistency(&self, consistency: &CheckResult<ConsistencyVerdict>) {
        self.header("ip consistency");
        let verdict = match consistency {
            Ok(verdict) => verdict,
            Err(e) => {
                print::aligned_line("Consistency", failure(e));
                return;
            }
        };

        print::aligned_line("Consistency", consistency_label(verdict));
        print::aligned_line(
            "Responded",
            format!("{}/{}", verdict.responded_count, verdict.total_count),
        );

        if self.verbose_details() {
            print::as_tree_one_level(
                verdict
                    .outcomes
                    .iter()
                    .map(|outcome| {
                        let value = match (outcome.value(), outcome.error()) {
                            (Some(ip), _) => ip.to_string().color(colors::IPV4_ADDR),
                            (None, Some(e)) => failure(e),
                            (None, None) => "no answer".color(colors::SEPARATOR),
                        };
                        (outcome.target.service_name.clone(), value)
                    })
                    .collect(),
            );
        }
    }

    fn dns_exposure(&self, dns: &CheckResult<DnsExposure>) {
        self.header("dns exposure");
        let exposure = match dns {
            Ok(exposure) => exposure,
            Err(e) => {
                print::aligned_line("DNS", failure(e));
                return;
            }
        };

        print::aligned_line("DNS", dns_label(exposure));
        if self.verbose_details() {
            print::print_status(format!("{} exposed address(es) found", exposure.addresses.len()));
            print::as_tree_one_level(
                exposure
                    .addresses
                    .iter()
                    .take(DNS_LISTED_ADDRESSES)
                    .map(|a| (a.interface_name.clone(), a.address.color(colors::IPV4_ADDR)))
                    .collect(),
            );
        }
    }

    fn webrtc(&self, webrtc: &CheckResult<WebRtcStatus>) {
        self.header("webrtc");
        match webrtc {
            Ok(status) => {
                print::aligned_line("WebRTC", webrtc_label(status));
                if self.verbose_details() {
                    for (idx, program) in status.detected.iter().enumerate() {
                        print::tree_head(idx + 1, program);
                    }
                }
                for note in webrtc_notes(self.quiet) {
                    print::print_status(*note);
                }
            }
            Err(e) => print::aligned_line("WebRTC", failure(e)),
        }
    }

    fn geolocation(&self, geo: &CheckResult<GeoRecord>) {
        self.header("geolocation");
        match geo {
            Ok(record) => {
                print::aligned_line("Country", format!("{} ({})", record.country, record.country_code));
                print::aligned_line("City", record.city.as_str());
                print::aligned_line("ISP", record.isp.as_str());
                print::aligned_line("IP", record.ip.color(colors::IPV4_ADDR));
            }
            Err(e) => print::aligned_line("Country", failure(e)),
        }
    }

    fn time(&self, time: &CheckResult<TimeSnapshot>) {
        if !self.verbose_details() {
            return;
        }
        self.header("time and locale");
        match time {
            Ok(snapshot) => {
                print::aligned_line("Time zone", snapshot.timezone_id.as_str());
                print::as_tree_one_level(vec![
                    ("Time".to_string(), snapshot.time.as_str().normal()),
                    ("Date".to_string(), snapshot.date.as_str().normal()),
                    ("Language".to_string(), snapshot.language.as_str().normal()),
                    ("Country".to_string(), snapshot.country.as_str().normal()),
                ]);
                print::aligned_line("UTC offset", format!("{}h", snapshot.utc_offset_hours));
            }
            Err(e) => print::aligned_line("Time zone", failure(e)),
        }
    }

    fn vpn_range(&self, vpn_range: &CheckResult<VpnRangeVerdict>) {
        self.header("vpn range");
        match vpn_range {
            Ok(verdict) => {
                print::aligned_line("VPN range", vpn_range_label(verdict));
                if self.verbose_details() {
                    let range = if verdict.is_common_vpn_or_nat_range { "private/VPN" } else { "public" };
                    print::as_tree_one_level(vec![
                        ("IP".to_string(), verdict.ip.color(colors::IPV4_ADDR)),
                        ("Range".to_string(), range.normal()),
                    ]);
                }
                print::print_status(VPN_RANGE_NOTE);
            }
            Err(e) => print::aligned_line("VPN range", failure(e)),
        }
    }
}

impl ReportSink for TerminalSink {
    fn loading(&self, active: bool) {
        if active {
            spinner::start("Running checks...");
        } else {
            spinner::stop();
        }
    }

    fn basic_report(&self, report: &BasicReport) {
        print::set_key_width(BASIC_KEYS);
        self.connectivity(&report.connectivity);
        self.public_ip(&report.public_ip);
        self.local_addresses(&report.local_addresses);
        self.consistency(&report.consistency);
        self.dns_exposure(&report.dns_exposure);
    }

    fn advanced_report(&self, report: &AdvancedReport) {
        print::set_key_width(ADVANCED_KEYS);
        self.webrtc(&report.webrtc);
        self.geolocation(&report.geolocation);
        self.time(&report.time);
        self.vpn_range(&report.vpn_range);
    }

    fn notify(&self, message: &str) {
        print::centerln(&message.color(colors::SAFE).bold().to_string());
    }

    fn run_failed(&self, error: &RunError) {
        print::print_status(error.user_message().color(colors::DANGER).bold().to_string());
    }
}

fn failure(error: &ProbeError) -> ColoredString {
    error.user_message().color(colors::DANGER)
}

fn yes_no(value: bool, yes: &str, no: &str) -> ColoredString {
    if value {
        yes.color(colors::SAFE)
    } else {
        no.color(colors::CAUTION)
    }
}

pub fn vpn_status(vpn_active: bool) -> ColoredString {
    if vpn_active {
        "connected".color(colors::SAFE)
    } else {
        "disconnected".color(colors::DANGER)
    }
}

pub fn classification_color(classification: Classification) -> Color {
    match classification {
        Classification::Consistent => colors::SAFE,
        Classification::MinorInconsistency => colors::CAUTION,
        Classification::Inconsistent | Classification::AllFailed => colors::DANGER,
    }
}

pub fn consistency_label(verdict: &ConsistencyVerdict) -> ColoredString {
    format!(
        "{} ({} distinct IP(s))",
        verdict.classification, verdict.distinct_value_count
    )
    .color(classification_color(verdict.classification))
}

pub fn dns_label(exposure: &DnsExposure) -> ColoredString {
    if exposure.likely_leak {
        "possible leak".color(colors::CAUTION)
    } else {
        "probably safe".color(colors::SAFE)
    }
}

pub fn webrtc_label(status: &WebRtcStatus) -> ColoredString {
    if status.available {
        "available (may leak in browsers)".color(colors::CAUTION)
    } else {
        "not detected".color(colors::SAFE)
    }
}

/// The limitation notes printed under the WebRTC verdict. The scope note survives every `-q` level.
pub fn webrtc_notes(quiet: u8) -> &'static [&'static str] {
    if quiet < 2 {
        &[WEBRTC_SCOPE_NOTE, WEBRTC_BROWSER_NOTE]
    } else {
        &[WEBRTC_SCOPE_NOTE]
    }
}

pub fn vpn_range_label(verdict: &VpnRangeVerdict) -> ColoredString {
    if verdict.is_common_vpn_or_nat_range {
        "IP in a common VPN/NAT range".color(colors::CAUTION)
    } else {
        "IP not identified as VPN".color(colors::SAFE)
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
