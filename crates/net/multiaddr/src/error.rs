use crate::bounded::BoundsError;

/// Errors produced while decoding or constructing a multiaddress.
///
/// Everything except [`Error::Bounds`] is a property of the input and is
/// expected when handling untrusted bytes or text. `Bounds` indicates the
/// codec's own cursor accounting went wrong and is never caused by malformed
/// input alone.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Binary decode read a protocol code absent from the registry.
    #[error("unknown protocol code {0}")]
    UnknownProtocolCode(u64),

    /// Text decode read a protocol name absent from the registry.
    #[error("unknown protocol name `{0}`")]
    UnknownProtocolName(String),

    /// A converter rejected its input value.
    #[error("invalid {protocol} value `{value}`")]
    InvalidFormat {
        /// Name of the protocol whose converter rejected the value.
        protocol: &'static str,
        /// The offending value, as text or lowercase hex for byte input.
        value: String,
    },

    /// Multiaddress text was structurally malformed, e.g. a missing leading
    /// `/`, an empty token, or a value-carrying protocol without a value.
    #[error("malformed multiaddress text `{0}`")]
    InvalidText(String),

    /// A segment declared more value bytes than remain in the buffer.
    #[error("{protocol} value needs {needed} bytes but only {remaining} remain")]
    TruncatedInput {
        /// Name of the protocol whose value was cut short.
        protocol: &'static str,
        /// Bytes the segment declared.
        needed: u64,
        /// Bytes actually remaining.
        remaining: usize,
    },

    /// The buffer was exhausted in the middle of a field instead of at a
    /// segment boundary.
    #[error("input ended inside a {0}")]
    UnexpectedEnd(&'static str),

    /// A varint field was malformed (overflow or non-minimal encoding).
    #[error("malformed varint in {field}: {source}")]
    Varint {
        /// Which field held the bad varint.
        field: &'static str,
        /// Underlying decode failure.
        source: unsigned_varint::decode::Error,
    },

    /// Internal window misuse; a codec bug, not malformed input.
    #[error(transparent)]
    Bounds(#[from] BoundsError),
}
