//! Self-describing multiaddresses for Weft peer addressing.
//!
//! A [`Multiaddr`] is an ordered sequence of protocol/value segments encoding
//! a full transport stack, outer layer first: `/ip4/127.0.0.1/tcp/4001`. The
//! same address has a canonical binary form of concatenated
//! `[varint code][varint length if variable][value bytes]` tuples, consumed
//! by dialers and persisted in peer records.
//!
//! Decoding consults the static [`Protocol`] registry for each segment's
//! value layout and delegates value transcoding to the matching converter in
//! [`convert`]. Both forms round-trip: `from_bytes(to_bytes(m)) == m` and
//! `m.to_string().parse() == Ok(m)` for every decodable `m`.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod bounded;
pub mod convert;
mod error;
mod multiaddr;
pub mod protocol;

pub use error::Error;
pub use multiaddr::{Multiaddr, Segment};
pub use protocol::{Protocol, ValueKind};
