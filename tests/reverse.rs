use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::thread;

use reverseaddr::{AddressParseError, ZoneError, dnsbl_name, ptr_name, reverse, reverse_ip};

#[test]
fn ipv4_octets_are_reversed() {
    for (a, b, c, d) in [(1, 2, 3, 4), (0, 0, 0, 0), (255, 0, 10, 1), (127, 0, 0, 2)] {
        let reversed = reverse(&format!("{a}.{b}.{c}.{d}")).unwrap();
        assert_eq!(reversed, format!("{d}.{c}.{b}.{a}"));
    }
}

#[test]
fn ipv6_nibbles_match_expanded_form() {
    let ip: Ipv6Addr = "2001:db8:85a3::8a2e:370:7334".parse().unwrap();
    let expanded: String = ip.segments().iter().map(|s| format!("{s:04x}")).collect();
    let expected = expanded
        .chars()
        .rev()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(".");

    assert_eq!(reverse(&ip.to_string()).unwrap(), expected);
    assert_eq!(reverse_ip(IpAddr::V6(ip)), expected);
}

#[test]
fn unrecognized_address_reports_input() {
    let err = reverse("not-an-ip").unwrap_err();
    assert_eq!(err, AddressParseError::new("not-an-ip"));
    assert!(err.to_string().contains(AddressParseError::MESSAGE));
    assert!(err.to_string().contains("not-an-ip"));
}

#[test]
fn reverse_has_no_zone_suffix() {
    assert!(!reverse("1.2.3.4").unwrap().ends_with("arpa"));
    assert!(!reverse("::1").unwrap().ends_with("arpa"));
}

#[test]
fn zone_helpers_compose_with_reverse() {
    let labels = reverse("192.0.2.99").unwrap();
    assert_eq!(
        dnsbl_name("192.0.2.99", "bl.spamcop.net").unwrap(),
        format!("{labels}.bl.spamcop.net")
    );
    assert_eq!(ptr_name("192.0.2.99").unwrap(), format!("{labels}.in-addr.arpa"));
    assert!(matches!(
        dnsbl_name("192.0.2.99", "bad zone"),
        Err(ZoneError::InvalidZone(_))
    ));
}

#[test]
fn safe_to_call_from_many_threads() {
    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            thread::spawn(move || {
                let ip = Ipv4Addr::new(10, 0, 0, i);
                reverse(&ip.to_string()).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("{i}.0.0.10"));
    }
}
