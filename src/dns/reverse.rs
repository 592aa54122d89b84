use std::net::IpAddr;

use super::error::AddressParseError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Returns the reversed labels of `address` suitable for a DNSBL lookup,
/// without any zone suffix.
///
/// IPv4 (and IPv4-mapped IPv6) addresses yield four reversed decimal octets,
/// all other IPv6 addresses yield 32 reversed hex nibbles.
///
/// ```
/// assert_eq!(reverseaddr::reverse("1.2.3.4").unwrap(), "4.3.2.1");
/// assert!(reverseaddr::reverse("not-an-ip").is_err());
/// ```
pub fn reverse(address: &str) -> Result<String, AddressParseError> {
    parse(address).map(reverse_ip)
}

/// Same as [`reverse`] for an address that is already parsed.
pub fn reverse_ip(ip: IpAddr) -> String {
    match canonical(ip) {
        IpAddr::V4(ipv4) => ipv4
            .octets()
            .iter()
            .rev()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("."),
        IpAddr::V6(ipv6) => {
            let octets = ipv6.octets();
            let mut reversed = String::with_capacity(octets.len() * 4);
            for byte in octets.iter().rev() {
                reversed.push(char::from(HEX_DIGITS[usize::from(byte & 0xF)]));
                reversed.push('.');
                reversed.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
                reversed.push('.');
            }
            reversed.truncate(reversed.trim_end_matches('.').len());
            reversed
        }
    }
}

/// Parses `address`, folding IPv4-mapped IPv6 addresses down to IPv4.
pub(crate) fn parse(address: &str) -> Result<IpAddr, AddressParseError> {
    address
        .parse::<IpAddr>()
        .map(canonical)
        .map_err(|_| AddressParseError::new(address))
}

// Only `::ffff:a.b.c.d` counts as IPv4, `::a.b.c.d` stays IPv6.
pub(crate) const fn canonical(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(ipv6) => match ipv6.to_ipv4_mapped() {
            Some(ipv4) => IpAddr::V4(ipv4),
            None => ip,
        },
        IpAddr::V4(_) => ip,
    }
}
