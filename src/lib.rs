//! Reverses IPv4 and IPv6 addresses into the dotted label form used for
//! DNS blocklist (DNSBL) lookups.
//!
//! [`reverse`] never appends a zone. Compose one with [`dnsbl_name`] or
//! [`ptr_name`] when needed.

pub mod dns;
pub mod io;
pub mod modes;

pub use dns::error::{AddressParseError, ZoneError};
pub use dns::reverse::{reverse, reverse_ip};
pub use dns::zone::{dnsbl_name, ptr_name, ptr_name_ip, validate_zone};
