use regex::Regex;
use std::{net::IpAddr, sync::LazyLock};

use super::{
    error::{AddressParseError, ZoneError},
    reverse::{canonical, parse, reverse_ip},
};

pub const IPV4_ARPA_ZONE: &str = "in-addr.arpa";
pub const IPV6_ARPA_ZONE: &str = "ip6.arpa";

const MAX_ZONE_LENGTH: usize = 253;

static ZONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // Labels of 1-63 alnum/underscore/hyphen chars, no hyphen at either end
    Regex::new(
        r"^[a-z0-9_](?:[a-z0-9_-]{0,61}[a-z0-9_])?(?:\.[a-z0-9_](?:[a-z0-9_-]{0,61}[a-z0-9_])?)*$",
    )
    .expect("Failed to create zone regex")
});

/// Normalizes a DNSBL zone: trims whitespace, strips one leading and one
/// trailing dot and lowercases it.
pub fn validate_zone(zone: &str) -> Result<String, ZoneError> {
    let trimmed = zone.trim();
    let trimmed = trimmed.strip_prefix('.').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let normalized = trimmed.to_lowercase();

    if normalized.len() > MAX_ZONE_LENGTH || !ZONE_REGEX.is_match(&normalized) {
        return Err(ZoneError::InvalidZone(zone.to_string()));
    }

    Ok(normalized)
}

/// Builds the full DNSBL query name for `address` under `zone`,
/// e.g. `4.3.2.1.zen.spamhaus.org`.
pub fn dnsbl_name(address: &str, zone: &str) -> Result<String, ZoneError> {
    let zone = validate_zone(zone)?;
    let ip = parse(address)?;
    Ok(join(&reverse_ip(ip), &zone))
}

/// Builds the PTR query name for `address` under `in-addr.arpa` or `ip6.arpa`.
pub fn ptr_name(address: &str) -> Result<String, AddressParseError> {
    parse(address).map(ptr_name_ip)
}

pub fn ptr_name_ip(ip: IpAddr) -> String {
    let zone = if canonical(ip).is_ipv4() {
        IPV4_ARPA_ZONE
    } else {
        IPV6_ARPA_ZONE
    };
    join(&reverse_ip(ip), zone)
}

fn join(labels: &str, zone: &str) -> String {
    format!("{labels}.{zone}")
}
