//! Opaque key and signature buffers.
//!
//! All three types are caller-supplied byte material in a standard encoding;
//! the provider borrows them for the duration of an operation and never
//! mutates them. Cloning is cheap ([`bytes::Bytes`] underneath).

use std::fmt;

use bytes::Bytes;

macro_rules! opaque_bytes {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name(Bytes);

        impl $name {
            /// The raw encoded bytes.
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<Bytes> for $name {
            fn from(bytes: Bytes) -> Self {
                Self(bytes)
            }
        }

        impl From<Vec<u8>> for $name {
            fn from(bytes: Vec<u8>) -> Self {
                Self(Bytes::from(bytes))
            }
        }

        impl From<&[u8]> for $name {
            fn from(bytes: &[u8]) -> Self {
                Self(Bytes::copy_from_slice(bytes))
            }
        }

        // Key and signature material stays out of logs; show the length only.
        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({} bytes)"), self.0.len())
            }
        }
    };
}

opaque_bytes! {
    /// DER-encoded PKCS#1 `RSAPrivateKey` material.
    PrivateKey
}

opaque_bytes! {
    /// DER-encoded SubjectPublicKeyInfo public key material.
    PublicKey
}

opaque_bytes! {
    /// Raw signature bytes, produced by a provider or received from a peer.
    Signature
}
