//! Asymmetric key and signature primitives for Weft peer identity.
//!
//! Wraps standard DER key encodings (PKCS#1 for private keys,
//! SubjectPublicKeyInfo for public keys) behind opaque buffer types and an
//! [`RsaProvider`] whose signatures are bit-compatible with the Go reference
//! implementation (RSA PKCS#1 v1.5 padding over SHA-256).
//!
//! A failed signature check is the `Ok(false)` outcome of
//! [`RsaProvider::verify`], not an error; errors are reserved for inputs
//! that cannot even be parsed into the expected structures. Callers rely on
//! that distinction to tell an authentication failure apart from corrupted
//! or mis-encoded material.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod error;
mod keys;
mod provider;

pub use error::{SigningError, VerificationError};
pub use keys::{PrivateKey, PublicKey, Signature};
pub use provider::RsaProvider;
