//! # Hashing
//!
//! Two hash functions matter to this crate:
//!
//! - **SHA-256** produces transaction ids, signing digests and block hashes.
//!   It is also the default [`HashFunction`] behind the digest pipeline.
//! - **RIPEMD-160** only appears as the 4-byte checksum on textual public keys.
//!
//! The pipeline talks to its hash through the async [`HashFunction`] trait so
//! callers can route hashing elsewhere (a hardware module, a remote signer, a
//! test double). Any `Fn(&[u8]) -> Result<[u8; 32], HashError>` closure
//! already is one.

use async_trait::async_trait;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256 as Sha256Hasher};

use crate::error::HashError;

/// An asynchronous 32-byte hash over a byte string.
#[async_trait]
pub trait HashFunction: Send + Sync {
    /// Hashes `message`. Implementations must be deterministic.
    async fn hash(&self, message: &[u8]) -> Result<[u8; 32], HashError>;
}

/// SHA-256, the hash the network uses. Never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256;

#[async_trait]
impl HashFunction for Sha256 {
    async fn hash(&self, message: &[u8]) -> Result<[u8; 32], HashError> {
        Ok(sha256(message))
    }
}

#[async_trait]
impl<F> HashFunction for F
where
    F: Fn(&[u8]) -> Result<[u8; 32], HashError> + Send + Sync,
{
    async fn hash(&self, message: &[u8]) -> Result<[u8; 32], HashError> {
        self(message)
    }
}

/// Compute the SHA-256 hash of `data`.
///
/// ```
/// use hive_protocol::crypto::sha256;
///
/// assert_eq!(
///     hex::encode(sha256(b"abc")),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256Hasher::new();
    hasher.update(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Compute the RIPEMD-160 hash of `data`.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let hash = Ripemd160::digest(data);
    let mut output = [0u8; 20];
    output.copy_from_slice(&hash);
    output
}
