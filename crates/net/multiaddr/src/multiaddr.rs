//! The multiaddress value type and its two codecs.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use tracing::trace;

use crate::bounded;
use crate::convert;
use crate::error::Error;
use crate::protocol::{Protocol, ValueKind};

/// One protocol/value pair inside a multiaddress.
///
/// Construction through [`Segment::new`] enforces the value invariant for the
/// protocol's [`ValueKind`] (exact width for fixed-width protocols, empty for
/// valueless ones, converter-valid content otherwise), so encoding and
/// display are total.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    protocol: &'static Protocol,
    value: Bytes,
}

impl Segment {
    /// Builds a segment, validating `value` against the protocol's layout
    /// and converter.
    pub fn new(protocol: &'static Protocol, value: impl Into<Bytes>) -> Result<Self, Error> {
        let value = value.into();
        match protocol.kind() {
            ValueKind::Fixed(width) => {
                if value.len() != width {
                    return Err(Error::InvalidFormat {
                        protocol: protocol.name(),
                        value: hex::encode(&value),
                    });
                }
            }
            ValueKind::NoValue => {
                if !value.is_empty() {
                    return Err(Error::InvalidFormat {
                        protocol: protocol.name(),
                        value: hex::encode(&value),
                    });
                }
            }
            ValueKind::LengthPrefixed => {}
        }
        if protocol.kind() != ValueKind::NoValue {
            convert::bytes_to_text(protocol, &value)?;
        }
        Ok(Self { protocol, value })
    }

    /// The protocol this segment belongs to.
    pub fn protocol(&self) -> &'static Protocol {
        self.protocol
    }

    /// The canonical value bytes (empty for valueless protocols).
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Text rendering of the value, `None` for valueless protocols.
    fn value_text(&self) -> Option<String> {
        match self.protocol.kind() {
            ValueKind::NoValue => None,
            // Construction validated the value, so conversion cannot fail;
            // should a segment ever carry out-of-contract bytes anyway, the
            // hex fallback keeps them visible instead of dropping the token.
            _ => Some(
                convert::bytes_to_text(self.protocol, &self.value)
                    .unwrap_or_else(|_| hex::encode(&self.value)),
            ),
        }
    }
}

/// A self-describing composed network address: an immutable ordered sequence
/// of [`Segment`]s, outer protocol layer first.
///
/// Equality and hashing are structural. The binary form is the concatenation
/// of `[varint code][varint length if variable][value bytes]` per segment;
/// the text form joins `/name[/value]` per segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Multiaddr {
    segments: Vec<Segment>,
}

impl Multiaddr {
    /// The empty address, the identity for layering.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The segments in outer-to-inner order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when the address has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Decodes the canonical binary form.
    ///
    /// Walks the buffer segment by segment: varint protocol code, registry
    /// lookup, value width from the registry (or a varint length prefix),
    /// then exactly that many value bytes. The buffer must be exhausted at a
    /// segment boundary.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut window = bytes;
        let mut segments = Vec::new();
        while !window.is_empty() {
            let code = read_varint(&mut window, "protocol code")?;
            let protocol =
                Protocol::by_code(code).ok_or(Error::UnknownProtocolCode(code))?;
            let width = match protocol.kind() {
                ValueKind::Fixed(width) => width as u64,
                ValueKind::LengthPrefixed => read_varint(&mut window, "length prefix")?,
                ValueKind::NoValue => 0,
            };
            if width > window.len() as u64 {
                return Err(Error::TruncatedInput {
                    protocol: protocol.name(),
                    needed: width,
                    remaining: window.len(),
                });
            }
            // The length check above makes this infallible; a failure here is
            // broken cursor accounting inside the codec itself.
            let value = bounded::claim(&mut window, width as usize)?;
            segments.push(Segment::new(protocol, Bytes::copy_from_slice(value))?);
        }
        trace!(segments = segments.len(), "decoded multiaddress from bytes");
        Ok(Self { segments })
    }

    /// Encodes the canonical binary form. Total: segment construction already
    /// guaranteed every value matches its protocol's layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        let mut buf = unsigned_varint::encode::u64_buffer();
        for segment in &self.segments {
            out.extend_from_slice(unsigned_varint::encode::u64(
                segment.protocol().code(),
                &mut buf,
            ));
            if segment.protocol().kind() == ValueKind::LengthPrefixed {
                out.extend_from_slice(unsigned_varint::encode::u64(
                    segment.value().len() as u64,
                    &mut buf,
                ));
            }
            out.extend_from_slice(segment.value());
        }
        out
    }
}

fn read_varint(window: &mut &[u8], field: &'static str) -> Result<u64, Error> {
    match unsigned_varint::decode::u64(window) {
        Ok((value, rest)) => {
            *window = rest;
            Ok(value)
        }
        Err(unsigned_varint::decode::Error::Insufficient) => Err(Error::UnexpectedEnd(field)),
        Err(source) => Err(Error::Varint { field, source }),
    }
}

impl FromStr for Multiaddr {
    type Err = Error;

    /// Decodes the `/`-delimited text form. The empty string decodes to the
    /// empty address; anything else must start with `/`.
    fn from_str(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Ok(Self::empty());
        }
        let rest = s
            .strip_prefix('/')
            .ok_or_else(|| Error::InvalidText(s.to_string()))?;
        let mut tokens = rest.split('/');
        let mut segments = Vec::new();
        while let Some(name) = tokens.next() {
            if name.is_empty() {
                return Err(Error::InvalidText(s.to_string()));
            }
            let protocol =
                Protocol::by_name(name).ok_or_else(|| Error::UnknownProtocolName(name.to_string()))?;
            let value = match protocol.kind() {
                ValueKind::NoValue => Bytes::new(),
                _ => {
                    let token = tokens
                        .next()
                        .ok_or_else(|| Error::InvalidText(s.to_string()))?;
                    Bytes::from(convert::text_to_bytes(protocol, token)?)
                }
            };
            segments.push(Segment::new(protocol, value)?);
        }
        trace!(segments = segments.len(), "decoded multiaddress from text");
        Ok(Self { segments })
    }
}

impl fmt::Display for Multiaddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment.protocol().name())?;
            if let Some(text) = segment.value_text() {
                write!(f, "/{text}")?;
            }
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for Multiaddr {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_bytes(bytes)
    }
}

impl FromIterator<Segment> for Multiaddr {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl From<Segment> for Multiaddr {
    fn from(segment: Segment) -> Self {
        Self {
            segments: vec![segment],
        }
    }
}

impl<'a> IntoIterator for &'a Multiaddr {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
