//! Static registry of address protocols.
//!
//! Each [`Protocol`] is an immutable descriptor: a numeric code (varint on
//! the wire), a canonical name, and the layout of its value. The table is
//! process-wide read-only state; code and name are each unique within it.

/// How a protocol's value is laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Exactly this many value bytes, no length prefix.
    Fixed(usize),
    /// A varint length prefix followed by that many value bytes.
    LengthPrefixed,
    /// No value bytes at all.
    NoValue,
}

/// Converter handling a protocol's value, selected per table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Converter {
    Ip4,
    Ip6,
    Port,
    DnsName,
    None,
}

/// Immutable descriptor of one registered protocol.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Protocol {
    code: u64,
    name: &'static str,
    kind: ValueKind,
    converter: Converter,
}

/// `/ip4/<dotted-decimal>` — IPv4 address, 4 value bytes.
pub static IP4: Protocol = Protocol {
    code: 4,
    name: "ip4",
    kind: ValueKind::Fixed(4),
    converter: Converter::Ip4,
};

/// `/tcp/<port>` — TCP port, 2 big-endian value bytes.
pub static TCP: Protocol = Protocol {
    code: 6,
    name: "tcp",
    kind: ValueKind::Fixed(2),
    converter: Converter::Port,
};

/// `/ip6/<rfc5952>` — IPv6 address, 16 value bytes.
pub static IP6: Protocol = Protocol {
    code: 41,
    name: "ip6",
    kind: ValueKind::Fixed(16),
    converter: Converter::Ip6,
};

/// `/dns/<name>` — host name resolving to either address family.
pub static DNS: Protocol = Protocol {
    code: 53,
    name: "dns",
    kind: ValueKind::LengthPrefixed,
    converter: Converter::DnsName,
};

/// `/dns4/<name>` — host name resolving to IPv4 only.
pub static DNS4: Protocol = Protocol {
    code: 54,
    name: "dns4",
    kind: ValueKind::LengthPrefixed,
    converter: Converter::DnsName,
};

/// `/dns6/<name>` — host name resolving to IPv6 only.
pub static DNS6: Protocol = Protocol {
    code: 55,
    name: "dns6",
    kind: ValueKind::LengthPrefixed,
    converter: Converter::DnsName,
};

/// `/udp/<port>` — UDP port, 2 big-endian value bytes.
pub static UDP: Protocol = Protocol {
    code: 273,
    name: "udp",
    kind: ValueKind::Fixed(2),
    converter: Converter::Port,
};

/// `/quic-v1` — QUIC transport layered on udp, no value.
pub static QUIC_V1: Protocol = Protocol {
    code: 461,
    name: "quic-v1",
    kind: ValueKind::NoValue,
    converter: Converter::None,
};

/// `/ws` — WebSocket layered on tcp, no value.
pub static WS: Protocol = Protocol {
    code: 477,
    name: "ws",
    kind: ValueKind::NoValue,
    converter: Converter::None,
};

/// `/wss` — WebSocket over TLS, no value.
pub static WSS: Protocol = Protocol {
    code: 478,
    name: "wss",
    kind: ValueKind::NoValue,
    converter: Converter::None,
};

static REGISTRY: &[&Protocol] = &[
    &IP4, &TCP, &IP6, &DNS, &DNS4, &DNS6, &UDP, &QUIC_V1, &WS, &WSS,
];

impl Protocol {
    /// Numeric code, varint-encoded in the binary form.
    pub fn code(&self) -> u64 {
        self.code
    }

    /// Canonical name used in the text form.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Wire layout of this protocol's value.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub(crate) fn converter(&self) -> Converter {
        self.converter
    }

    /// Looks up a protocol by numeric code.
    pub fn by_code(code: u64) -> Option<&'static Protocol> {
        REGISTRY.iter().copied().find(|p| p.code == code)
    }

    /// Looks up a protocol by canonical name.
    pub fn by_name(name: &str) -> Option<&'static Protocol> {
        REGISTRY.iter().copied().find(|p| p.name == name)
    }

    /// All registered protocols.
    pub fn all() -> &'static [&'static Protocol] {
        REGISTRY
    }
}
