//! RSA sign/verify provider.

use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15;
use rsa::pkcs8::DecodePublicKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::error::{SigningError, VerificationError};
use crate::keys::{PrivateKey, PublicKey, Signature};

/// RSA signature provider: PKCS#1 v1.5 padding over SHA-256.
///
/// Signing is deterministic, so equal message and key always yield equal
/// signature bytes, matching the Go reference implementation exactly. Both
/// operations are pure and borrow their inputs; the provider itself is a
/// stateless unit value and can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct RsaProvider;

impl RsaProvider {
    /// Signs `message` with a PKCS#1 DER private key.
    pub fn sign(
        &self,
        message: &[u8],
        private_key: &PrivateKey,
    ) -> Result<Signature, SigningError> {
        let key = RsaPrivateKey::from_pkcs1_der(private_key.as_bytes())
            .map_err(SigningError::MalformedKey)?;
        let signing_key = pkcs1v15::SigningKey::<Sha256>::new(key);
        let signature = signing_key
            .try_sign(message)
            .map_err(SigningError::SigningFailure)?;
        Ok(Signature::from(signature.to_vec()))
    }

    /// Checks `signature` over `message` under a SubjectPublicKeyInfo DER
    /// public key.
    ///
    /// Returns `Ok(false)` for a structurally sound signature that simply
    /// does not match; errors are reserved for key or signature bytes that
    /// cannot be parsed at all.
    pub fn verify(
        &self,
        message: &[u8],
        signature: &Signature,
        public_key: &PublicKey,
    ) -> Result<bool, VerificationError> {
        let key = RsaPublicKey::from_public_key_der(public_key.as_bytes())
            .map_err(VerificationError::MalformedKey)?;
        let verifying_key = pkcs1v15::VerifyingKey::<Sha256>::new(key);
        let signature = pkcs1v15::Signature::try_from(signature.as_bytes())
            .map_err(VerificationError::MalformedSignature)?;
        Ok(verifying_key.verify(message, &signature).is_ok())
    }
}
