use std::path::Path;

use chrono::{DateTime, FixedOffset, Local};
use leakcheck_common::error::ProbeError;
use leakcheck_common::models::system::TimeSnapshot;
use leakcheck_common::ports::outbound::system_repository::LocaleSource;

const LOCALE_VARIABLES: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];
const UNKNOWN_ZONE: &str = "Unknown";

/// [`LocaleSource`] reading the host clock, the `TZ` variable and the zoneinfo files.
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn snapshot(&self) -> Result<TimeSnapshot, ProbeError> {
        let (language, country) = locale_from_env(|key| std::env::var(key).ok());
        Ok(build_snapshot(
            Local::now().fixed_offset(),
            detect_timezone_id(),
            language,
            country,
        ))
    }
}

pub fn build_snapshot(
    now: DateTime<FixedOffset>,
    timezone_id: String,
    language: String,
    country: String,
) -> TimeSnapshot {
    TimeSnapshot {
        timezone_id,
        time: now.format("%H:%M:%S").to_string(),
        date: now.format("%d/%m/%Y").to_string(),
        language,
        country,
        utc_offset_hours: now.offset().local_minus_utc() / 3600,
    }
}

/// First non-empty locale variable, split into language and country.
pub fn locale_from_env(lookup: impl Fn(&str) -> Option<String>) -> (String, String) {
    LOCALE_VARIABLES
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
        .map(|value| parse_locale(&value))
        .unwrap_or_default()
}

/// Splits a POSIX locale such as `pt_BR.UTF-8@euro` into `("pt", "BR")`.
pub fn parse_locale(raw: &str) -> (String, String) {
    let base = raw
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default();

    match base.split_once(['_', '-']) {
        Some((language, country)) => (language.to_string(), country.to_string()),
        None => (base.to_string(), String::new()),
    }
}

fn detect_timezone_id() -> String {
    if let Some(zone) = std::env::var("TZ").ok().and_then(|tz| zone_from_tz_variable(&tz)) {
        return zone;
    }
    if let Ok(contents) = std::fs::read_to_string("/etc/timezone") {
        let zone = contents.trim();
        if !zone.is_empty() {
            return zone.to_string();
        }
    }
    std::fs::read_link("/etc/localtime")
        .ok()
        .and_then(|target| zone_from_localtime_link(&target))
        .unwrap_or_else(|| UNKNOWN_ZONE.to_string())
}

/// `TZ` may carry a leading colon, as in `:Europe/Berlin`.
pub fn zone_from_tz_variable(tz: &str) -> Option<String> {
    let zone = tz.trim().trim_start_matches(':');
    (!zone.is_empty()).then(|| zone.to_string())
}

/// Extracts `Area/City` from a link such as `/usr/share/zoneinfo/Area/City`.
pub fn zone_from_localtime_link(target: &Path) -> Option<String> {
    let text = target.to_str()?;
    let (_, zone) = text.split_once("zoneinfo/")?;
    (!zone.is_empty()).then(|| zone.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
