use thiserror::Error;

/// Returned when a string cannot be parsed as an IPv4 or IPv6 address.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{}: {address}", Self::MESSAGE)]
pub struct AddressParseError {
    pub address: String,
}

impl AddressParseError {
    pub const MESSAGE: &'static str = "unrecognized address";

    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ZoneError {
    #[error(transparent)]
    Address(#[from] AddressParseError),
    #[error("Invalid zone: {0}")]
    InvalidZone(String),
}
