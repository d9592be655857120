//! Address Classifier
//!
//! Pure domain logic for validating dotted-quad IPv4 text and spotting
//! addresses that geolocation providers cannot locate.

use crate::domain::entities::Address;
use std::net::Ipv4Addr;

/// Address classifier service.
///
/// Private/reserved ranges recognized:
/// - 10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16 (RFC 1918)
/// - 127.0.0.0/8 (loopback)
/// - 169.254.0.0/16 (link-local)
pub struct AddressClassifier;

impl AddressClassifier {
    /// Check that `text` is four dot-separated decimal groups in 0-255.
    ///
    /// Groups are 1-3 ASCII digits; leading zeros are accepted (`010`),
    /// signs, whitespace, IPv6 and hostnames are not.
    pub fn validate_format(text: &str) -> bool {
        Self::parse_octets(text).is_some()
    }

    /// Check whether `text` falls in a private or reserved range.
    ///
    /// Always false for syntactically invalid input.
    pub fn classify_privacy(text: &str) -> bool {
        match Self::parse_octets(text) {
            Some(octets) => {
                let ip = Ipv4Addr::from(octets);
                ip.is_private() || ip.is_loopback() || ip.is_link_local()
            }
            None => false,
        }
    }

    /// Classify `text` into an immutable `Address`.
    pub fn classify(text: &str) -> Address {
        Address::from_parts(
            text.to_string(),
            Self::validate_format(text),
            Self::classify_privacy(text),
        )
    }

    fn parse_octets(text: &str) -> Option<[u8; 4]> {
        let mut octets = [0u8; 4];
        let mut groups = text.split('.');

        for slot in octets.iter_mut() {
            let group = groups.next()?;
            if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            // At most three digits, so u16 cannot overflow
            let value: u16 = group.parse().ok()?;
            *slot = u8::try_from(value).ok()?;
        }

        if groups.next().is_some() {
            return None;
        }
        Some(octets)
    }
}
