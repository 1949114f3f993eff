use std::net::Ipv4Addr;
use std::str::FromStr;

/// Parses a strict IPv4 dotted-quad literal.
///
/// Exactly four decimal octets in `0..=255`, without leading zeros or surrounding whitespace.
pub fn parse_ipv4_literal(text: &str) -> Option<Ipv4Addr> {
    Ipv4Addr::from_str(text).ok()
}

/// Trims an IP-echo response body and parses it as an IPv4 literal.
pub fn parse_echo_body(body: &str) -> Option<Ipv4Addr> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_ipv4_literal(trimmed)
}

/// An IPv4 address usable for reaching the internet: not loopback, link-local or unspecified.
pub fn is_routable_v4(ip: &Ipv4Addr) -> bool {
    !ip.is_loopback() && !ip.is_link_local() && !ip.is_unspecified()
}
