//! # Geolocation Lookup
//!
//! Resolves a public IPv4 address to a [`GeoRecord`] through an ip-api.com style JSON service.
//! A body that is not valid JSON is still scanned for `"key":"value"` pairs, and a missing field
//! is an empty string rather than an error.

use std::sync::Arc;
use std::time::Duration;

use leakcheck_common::error::ProbeError;
use leakcheck_common::models::geo::GeoRecord;
use leakcheck_common::network::ip;
use leakcheck_common::ports::outbound::fetcher::Fetcher;
use serde::Deserialize;
use tokio::time::timeout;
use tracing::{debug, warn};

#[derive(Debug, Default, Deserialize)]
struct GeoPayload {
    status: Option<String>,
    message: Option<String>,
    country: Option<String>,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
    city: Option<String>,
    isp: Option<String>,
}

#[derive(Clone)]
pub struct GeoLocator {
    fetcher: Arc<dyn Fetcher>,
    endpoint: String,
    deadline: Duration,
}

impl GeoLocator {
    /// `endpoint` is a base URL; the IP is appended to it verbatim.
    pub fn new(fetcher: Arc<dyn Fetcher>, endpoint: impl Into<String>, deadline: Duration) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.into(),
            deadline,
        }
    }

    pub async fn lookup_geo(&self, ip_text: &str) -> Result<GeoRecord, ProbeError> {
        let address = ip::parse_ipv4_literal(ip_text)
            .ok_or_else(|| ProbeError::InvalidInput(format!("'{ip_text}' is not an IPv4 address")))?;

        let url = format!("{}{address}", self.endpoint);
        debug!("Looking up geolocation at {url}");

        let body = match timeout(self.deadline, self.fetcher.fetch(&url, self.deadline)).await {
            Ok(result) => result?,
            Err(_elapsed) => return Err(ProbeError::Timeout(self.deadline.as_millis() as u64)),
        };

        Ok(parse_geo_payload(&address.to_string(), &body))
    }
}

/// Builds a record from a geo-IP body, JSON first and a plain scan when that fails.
pub fn parse_geo_payload(ip: &str, body: &str) -> GeoRecord {
    let payload = match serde_json::from_str::<GeoPayload>(body) {
        Ok(payload) => payload,
        Err(e) => {
            debug!("Geo body is not the expected JSON ({e}), scanning for fields");
            GeoPayload {
                country: scan_string_field(body, "country"),
                country_code: scan_string_field(body, "countryCode"),
                city: scan_string_field(body, "city"),
                isp: scan_string_field(body, "isp"),
                ..GeoPayload::default()
            }
        }
    };

    if payload.status.as_deref() == Some("fail") {
        warn!(
            "Geo service refused the lookup: {}",
            payload.message.as_deref().unwrap_or("no reason given")
        );
    }

    GeoRecord {
        ip: ip.to_string(),
        country: payload.country.unwrap_or_default(),
        country_code: payload.country_code.unwrap_or_default(),
        city: payload.city.unwrap_or_default(),
        isp: payload.isp.unwrap_or_default(),
    }
}

/// Finds the first `"key": "value"` pair in `text` and returns the unescaped value.
///
/// Occurrences of `"key"` that are not followed by a colon and a quoted string are skipped, so a
/// value that happens to equal a key name does not confuse the scan.
pub fn scan_string_field(text: &str, key: &str) -> Option<String> {
    let needle = format!("\"{key}\"");

    for (start, _) in text.match_indices(&needle) {
        let rest = text[start + needle.len()..].trim_start();
        let Some(rest) = rest.strip_prefix(':') else {
            continue;
        };
        let Some(rest) = rest.trim_start().strip_prefix('"') else {
            continue;
        };
        if let Some(value) = read_quoted(rest) {
            return Some(value);
        }
    }
    None
}

/// Reads up to the closing quote, honouring backslash escapes.
fn read_quoted(text: &str) -> Option<String> {
    let mut value = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Some(value),
            '\\' => match chars.next()? {
                'n' => value.push('\n'),
                't' => value.push('\t'),
                other => value.push(other),
            },
            other => value.push(other),
        }
    }
    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
