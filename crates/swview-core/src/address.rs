//! Conversion between textual IP literals and the agent's binary form.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::CoreError;
use crate::model::BinaryAddress;

/// Parse an IPv4 or IPv6 literal into a [`BinaryAddress`] with no interface.
///
/// IPv4 is tried first, so `"1.2.3.4"` always yields four bytes.
pub fn text_to_address(text: &str) -> Result<BinaryAddress, CoreError> {
    let ip: IpAddr = if let Ok(v4) = text.parse::<Ipv4Addr>() {
        v4.into()
    } else if let Ok(v6) = text.parse::<Ipv6Addr>() {
        v6.into()
    } else {
        return Err(CoreError::InvalidAddress {
            input: text.to_owned(),
        });
    };

    let addr = match ip {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    };
    Ok(BinaryAddress {
        addr,
        if_name: None,
    })
}

/// Render packed address bytes. Only 4- and 16-byte inputs are valid.
pub fn address_to_text(bytes: &[u8]) -> Result<String, CoreError> {
    if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
        return Ok(Ipv4Addr::from(octets).to_string());
    }
    if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
        return Ok(ipv6_to_text(octets));
    }
    Err(CoreError::InvalidAddress {
        input: format!("{bytes:?}"),
    })
}

/// IPv6 text, keeping the dotted tail of IPv4-compatible `::a.b.c.d`
/// addresses (not `::` or `::1`, whose seventh group is zero).
fn ipv6_to_text(octets: [u8; 16]) -> String {
    match octets {
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, a, b, c, d] if a != 0 || b != 0 => {
            format!("::{}", Ipv4Addr::new(a, b, c, d))
        }
        _ => Ipv6Addr::from(octets).to_string(),
    }
}
