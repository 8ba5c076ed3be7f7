//! Recipient address parsing

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A `local@domain` recipient with exactly one `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recipient {
    address: String,
    at: usize,
}

impl Recipient {
    pub fn parse(address: &str) -> Result<Self, Error> {
        let mut positions = address.match_indices('@').map(|(idx, _)| idx);
        match (positions.next(), positions.next()) {
            (Some(at), None) => Ok(Self {
                address: address.to_string(),
                at,
            }),
            _ => Err(Error::MalformedRecipient {
                recipient: address.to_string(),
            }),
        }
    }

    /// Text before the `@`.
    pub fn local_part(&self) -> &str {
        &self.address[..self.at]
    }

    /// Text after the `@`; the key used for both resolution paths.
    pub fn domain(&self) -> &str {
        &self.address[self.at + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }
}

impl FromStr for Recipient {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}
