//! Per-protocol value converters.
//!
//! Every converter is a pure pair of operations over one protocol's value:
//! `text_to_bytes` and `bytes_to_text`, inverses of each other up to
//! canonicalisation (e.g. leading zeros in decimal octets disappear on the
//! way back out). The codec dispatches on the converter tag carried by each
//! registry row and hands converters exactly the declared value width, so
//! they never see adjacent segments' bytes.

use crate::error::Error;
use crate::protocol::{Converter, Protocol};

pub(crate) fn text_to_bytes(protocol: &'static Protocol, text: &str) -> Result<Vec<u8>, Error> {
    match protocol.converter() {
        Converter::Ip4 => ip4::text_to_bytes(text).map(|octets| octets.to_vec()),
        Converter::Ip6 => ip6_text_to_bytes(text),
        Converter::Port => port_text_to_bytes(protocol, text),
        Converter::DnsName => name_text_to_bytes(protocol, text),
        Converter::None => {
            if text.is_empty() {
                Ok(Vec::new())
            } else {
                Err(invalid(protocol.name(), text))
            }
        }
    }
}

pub(crate) fn bytes_to_text(protocol: &'static Protocol, bytes: &[u8]) -> Result<String, Error> {
    match protocol.converter() {
        Converter::Ip4 => ip4::bytes_to_text(bytes),
        Converter::Ip6 => ip6_bytes_to_text(bytes),
        Converter::Port => port_bytes_to_text(protocol, bytes),
        Converter::DnsName => name_bytes_to_text(protocol, bytes),
        Converter::None => {
            if bytes.is_empty() {
                Ok(String::new())
            } else {
                Err(invalid(protocol.name(), &hex::encode(bytes)))
            }
        }
    }
}

fn invalid(protocol: &'static str, value: &str) -> Error {
    Error::InvalidFormat {
        protocol,
        value: value.to_string(),
    }
}

/// IPv4 converter: dotted-decimal text, 4 value bytes in network order.
pub mod ip4 {
    use super::invalid;
    use crate::error::Error;

    /// Parses a dotted-decimal IPv4 literal into its 4 network-order bytes.
    ///
    /// Exactly four decimal octets in 0..=255 joined by `.`, nothing else.
    /// Leading zeros are tolerated and normalised away by the inverse.
    pub fn text_to_bytes(text: &str) -> Result<[u8; 4], Error> {
        let mut octets = [0u8; 4];
        let mut parts = text.split('.');
        for slot in &mut octets {
            let part = parts.next().ok_or_else(|| invalid("ip4", text))?;
            if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("ip4", text));
            }
            let value: u16 = part.parse().map_err(|_| invalid("ip4", text))?;
            *slot = u8::try_from(value).map_err(|_| invalid("ip4", text))?;
        }
        if parts.next().is_some() {
            return Err(invalid("ip4", text));
        }
        Ok(octets)
    }

    /// Renders exactly 4 bytes as canonical dotted-decimal text.
    pub fn bytes_to_text(bytes: &[u8]) -> Result<String, Error> {
        let octets: [u8; 4] = bytes
            .try_into()
            .map_err(|_| invalid("ip4", &hex::encode(bytes)))?;
        let [a, b, c, d] = octets;
        Ok(format!("{a}.{b}.{c}.{d}"))
    }

    /// Converts a dotted-decimal literal to the lowercase hex of its bytes.
    #[deprecated(note = "use `hex::encode(text_to_bytes(..)?)` instead")]
    pub fn address_to_hex(text: &str) -> Result<String, Error> {
        Ok(hex::encode(text_to_bytes(text)?))
    }
}

fn ip6_text_to_bytes(text: &str) -> Result<Vec<u8>, Error> {
    let addr: std::net::Ipv6Addr = text.parse().map_err(|_| invalid("ip6", text))?;
    Ok(addr.octets().to_vec())
}

fn ip6_bytes_to_text(bytes: &[u8]) -> Result<String, Error> {
    let octets: [u8; 16] = bytes
        .try_into()
        .map_err(|_| invalid("ip6", &hex::encode(bytes)))?;
    Ok(std::net::Ipv6Addr::from(octets).to_string())
}

fn port_text_to_bytes(protocol: &'static Protocol, text: &str) -> Result<Vec<u8>, Error> {
    // `u16: FromStr` would also accept a leading `+`.
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(protocol.name(), text));
    }
    let port: u16 = text.parse().map_err(|_| invalid(protocol.name(), text))?;
    Ok(port.to_be_bytes().to_vec())
}

fn port_bytes_to_text(protocol: &'static Protocol, bytes: &[u8]) -> Result<String, Error> {
    let raw: [u8; 2] = bytes
        .try_into()
        .map_err(|_| invalid(protocol.name(), &hex::encode(bytes)))?;
    Ok(u16::from_be_bytes(raw).to_string())
}

fn name_text_to_bytes(protocol: &'static Protocol, text: &str) -> Result<Vec<u8>, Error> {
    if text.is_empty() || text.contains('/') {
        return Err(invalid(protocol.name(), text));
    }
    Ok(text.as_bytes().to_vec())
}

fn name_bytes_to_text(protocol: &'static Protocol, bytes: &[u8]) -> Result<String, Error> {
    let name =
        std::str::from_utf8(bytes).map_err(|_| invalid(protocol.name(), &hex::encode(bytes)))?;
    if name.is_empty() || name.contains('/') {
        return Err(invalid(protocol.name(), name));
    }
    Ok(name.to_string())
}
