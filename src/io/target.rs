use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use thiserror::Error;

// Upper bound on addresses a single CIDR block or range may expand to
const MAX_EXPANSION_BITS: u8 = 16;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TargetError {
    #[error("Invalid CIDR prefix: {0}")]
    InvalidPrefix(String),
    #[error("CIDR prefix out of range for IPv4: {0}")]
    PrefixOutOfRangeV4(String),
    #[error("CIDR prefix out of range for IPv6: {0}")]
    PrefixOutOfRangeV6(String),
    #[error("Target expands to too many addresses (max {max}): {0}", max = 1u32 << MAX_EXPANSION_BITS)]
    TooManyAddresses(String),
    #[error("IP range must consist of the same IP version: {0}")]
    MixedRange(String),
    #[error("Start IP is greater than end IP in range: {0}")]
    StartIpGreaterThanEndIp(String),
    #[error("Target list contains no addresses: '{0}'")]
    EmptyList(String),
}

/// Expands a target into the address strings it covers.
///
/// Accepts a single address, a CIDR block (`10.0.0.0/30`), an inclusive range
/// (`10.0.0.1-10.0.0.9`) or a comma-separated list of any of these. Anything
/// that is not recognisably a block or range is passed through untouched so
/// the reverser can report it.
pub fn expand_target(target: &str) -> Result<Vec<String>, TargetError> {
    let target = target.trim();

    if target.contains(',') {
        let mut expanded = Vec::new();
        for item in target.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            expanded.extend(expand_target(item)?);
        }
        if expanded.is_empty() {
            return Err(TargetError::EmptyList(target.to_string()));
        }
        return Ok(expanded);
    }

    if let Some((ip_str, prefix_str)) = target.split_once('/')
        && let Ok(ip) = ip_str.trim().parse::<IpAddr>()
    {
        return expand_cidr(target, ip, prefix_str.trim());
    }

    if let Some((start, end)) = target.split_once('-')
        && let (Ok(start_ip), Ok(end_ip)) =
            (start.trim().parse::<IpAddr>(), end.trim().parse::<IpAddr>())
    {
        return expand_range(target, start_ip, end_ip);
    }

    Ok(vec![target.to_string()])
}

fn expand_cidr(target: &str, ip: IpAddr, prefix_str: &str) -> Result<Vec<String>, TargetError> {
    let prefix: u8 = prefix_str
        .parse()
        .map_err(|_| TargetError::InvalidPrefix(target.to_string()))?;

    match ip {
        IpAddr::V4(ipv4) => {
            if prefix > 32 {
                return Err(TargetError::PrefixOutOfRangeV4(target.to_string()));
            }
            let host_bits = 32 - prefix;
            if host_bits > MAX_EXPANSION_BITS {
                return Err(TargetError::TooManyAddresses(target.to_string()));
            }
            let mask = u32::MAX << host_bits;
            let network = u32::from(ipv4) & mask;
            Ok((0..1u32 << host_bits)
                .map(|i| Ipv4Addr::from(network + i).to_string())
                .collect())
        }
        IpAddr::V6(ipv6) => {
            if prefix > 128 {
                return Err(TargetError::PrefixOutOfRangeV6(target.to_string()));
            }
            let host_bits = 128 - prefix;
            if host_bits > MAX_EXPANSION_BITS {
                return Err(TargetError::TooManyAddresses(target.to_string()));
            }
            let mask = u128::MAX << host_bits;
            let network = u128::from(ipv6) & mask;
            Ok((0..1u128 << host_bits)
                .map(|i| Ipv6Addr::from(network + i).to_string())
                .collect())
        }
    }
}

fn expand_range(target: &str, start: IpAddr, end: IpAddr) -> Result<Vec<String>, TargetError> {
    match (start, end) {
        (IpAddr::V4(start_v4), IpAddr::V4(end_v4)) => {
            let (start_num, end_num) = (u32::from(start_v4), u32::from(end_v4));
            check_range_bounds(target, u128::from(start_num), u128::from(end_num))?;
            Ok((start_num..=end_num)
                .map(|num| Ipv4Addr::from(num).to_string())
                .collect())
        }
        (IpAddr::V6(start_v6), IpAddr::V6(end_v6)) => {
            let (start_num, end_num) = (u128::from(start_v6), u128::from(end_v6));
            check_range_bounds(target, start_num, end_num)?;
            Ok((start_num..=end_num)
                .map(|num| Ipv6Addr::from(num).to_string())
                .collect())
        }
        _ => Err(TargetError::MixedRange(target.to_string())),
    }
}

fn check_range_bounds(target: &str, start: u128, end: u128) -> Result<(), TargetError> {
    if start > end {
        return Err(TargetError::StartIpGreaterThanEndIp(target.to_string()));
    }
    if end - start >= 1u128 << MAX_EXPANSION_BITS {
        return Err(TargetError::TooManyAddresses(target.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_ipv4() {
        assert_eq!(expand_target("192.168.1.1").unwrap(), vec!["192.168.1.1"]);
    }

    #[test]
    fn single_ipv6_is_kept_verbatim() {
        assert_eq!(
            expand_target("2001:0db8:85a3:0000:0000:8a2e:0370:7334").unwrap(),
            vec!["2001:0db8:85a3:0000:0000:8a2e:0370:7334"]
        );
    }

    #[test]
    fn non_address_passes_through() {
        assert_eq!(expand_target("not-an-ip").unwrap(), vec!["not-an-ip"]);
        assert_eq!(expand_target("example.com/24").unwrap(), vec!["example.com/24"]);
    }

    #[test]
    fn cidr_ipv4() {
        assert_eq!(
            expand_target("192.168.1.0/30").unwrap(),
            vec!["192.168.1.0", "192.168.1.1", "192.168.1.2", "192.168.1.3"]
        );
    }

    #[test]
    fn cidr_ipv4_masks_host_bits() {
        assert_eq!(
            expand_target("10.0.0.5/31").unwrap(),
            vec!["10.0.0.4", "10.0.0.5"]
        );
        assert_eq!(expand_target("10.0.0.5/32").unwrap(), vec!["10.0.0.5"]);
    }

    #[test]
    fn cidr_ipv6() {
        assert_eq!(
            expand_target("2001:db8::/126").unwrap(),
            vec!["2001:db8::", "2001:db8::1", "2001:db8::2", "2001:db8::3"]
        );
    }

    #[test]
    fn cidr_errors() {
        assert!(matches!(
            expand_target("192.168.1.0/33"),
            Err(TargetError::PrefixOutOfRangeV4(_))
        ));
        assert!(matches!(
            expand_target("2001:db8::/129"),
            Err(TargetError::PrefixOutOfRangeV6(_))
        ));
        assert!(matches!(
            expand_target("10.0.0.0/abc"),
            Err(TargetError::InvalidPrefix(_))
        ));
        assert!(matches!(
            expand_target("10.0.0.0/8"),
            Err(TargetError::TooManyAddresses(_))
        ));
        assert!(matches!(
            expand_target("2001:db8::/64"),
            Err(TargetError::TooManyAddresses(_))
        ));
    }

    #[test]
    fn largest_allowed_cidr() {
        assert_eq!(expand_target("10.0.0.0/16").unwrap().len(), 65_536);
    }

    #[test]
    fn range_ipv4() {
        assert_eq!(
            expand_target("192.168.1.1 - 192.168.1.3").unwrap(),
            vec!["192.168.1.1", "192.168.1.2", "192.168.1.3"]
        );
        assert_eq!(expand_target("1.1.1.1-1.1.1.1").unwrap(), vec!["1.1.1.1"]);
    }

    #[test]
    fn range_ipv6() {
        assert_eq!(
            expand_target("::1-::3").unwrap(),
            vec!["::1", "::2", "::3"]
        );
    }

    #[test]
    fn range_errors() {
        assert_eq!(
            expand_target("192.168.1.10-192.168.1.5"),
            Err(TargetError::StartIpGreaterThanEndIp(
                "192.168.1.10-192.168.1.5".to_string()
            ))
        );
        assert!(matches!(
            expand_target("192.168.0.1-::1"),
            Err(TargetError::MixedRange(_))
        ));
        assert!(matches!(
            expand_target("10.0.0.0-10.1.0.0"),
            Err(TargetError::TooManyAddresses(_))
        ));
    }

    #[test]
    fn csv_list() {
        assert_eq!(
            expand_target("1.1.1.1 , 10.0.0.0/31,bogus,").unwrap(),
            vec!["1.1.1.1", "10.0.0.0", "10.0.0.1", "bogus"]
        );
    }

    #[test]
    fn separator_only_list_is_an_error() {
        assert_eq!(expand_target(","), Err(TargetError::EmptyList(",".to_string())));
        assert!(matches!(expand_target(" , , "), Err(TargetError::EmptyList(_))));
    }

    #[test]
    fn csv_list_propagates_errors() {
        assert!(expand_target("1.1.1.1,10.0.0.0/33").is_err());
    }
}
