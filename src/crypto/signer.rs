//! Hashing and signing operations
//!
//! Free functions over a [`CryptoProvider`]: SHA-256 hex digests plus
//! HMAC-SHA256 signing and verification. Output is always lowercase hex.

use crate::crypto::CryptoProvider;
use crate::error::Result;

/// Compute the SHA-256 digest of `text` as 64 lowercase hex characters
///
/// Deterministic: the same input always yields the same output. Fails only
/// when the provider's digest capability does.
///
/// # Example
///
/// ```rust
/// use devkit_core::crypto::{signer, SystemCrypto};
///
/// let digest = tokio_test::block_on(signer::sha256_hex(&SystemCrypto::new(), ""));
/// assert_eq!(
///     digest.unwrap(),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub async fn sha256_hex(provider: &dyn CryptoProvider, text: &str) -> Result<String> {
    let digest = provider.sha256(text.as_bytes()).await?;
    Ok(hex::encode(digest))
}

/// Sign `message` with HMAC-SHA256 under `key`, returning a lowercase hex tag
pub async fn hmac_sha256_sign(
    provider: &dyn CryptoProvider,
    message: &str,
    key: &str,
) -> Result<String> {
    let tag = provider.hmac_sha256(key.as_bytes(), message.as_bytes()).await?;
    Ok(hex::encode(tag))
}

/// Verify a hex HMAC-SHA256 signature against `message` and `key`
///
/// The candidate signature is trimmed and compared case-insensitively, so
/// uppercase hex and surrounding whitespace still verify. The comparison is
/// a plain string equality, not a constant-time check.
pub async fn hmac_sha256_verify(
    provider: &dyn CryptoProvider,
    message: &str,
    key: &str,
    signature: &str,
) -> Result<bool> {
    let expected = hmac_sha256_sign(provider, message, key).await?;
    Ok(expected.eq_ignore_ascii_case(signature.trim()))
}
