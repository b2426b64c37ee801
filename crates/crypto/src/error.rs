/// Errors from [`RsaProvider::sign`](crate::RsaProvider::sign).
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// The private key bytes are not a valid PKCS#1 DER document.
    #[error("malformed private key: {0}")]
    MalformedKey(#[source] rsa::pkcs1::Error),

    /// The underlying signature scheme failed.
    #[error("signing failed: {0}")]
    SigningFailure(#[source] rsa::signature::Error),
}

/// Errors from [`RsaProvider::verify`](crate::RsaProvider::verify).
///
/// A cryptographically non-matching signature is not an error; it is the
/// `Ok(false)` outcome. These variants mean the inputs could not be parsed
/// into the expected structures at all.
#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    /// The public key bytes are not a valid SubjectPublicKeyInfo document.
    #[error("malformed public key: {0}")]
    MalformedKey(#[source] rsa::pkcs8::spki::Error),

    /// The signature bytes cannot be interpreted by the scheme.
    #[error("malformed signature: {0}")]
    MalformedSignature(#[source] rsa::signature::Error),
}
