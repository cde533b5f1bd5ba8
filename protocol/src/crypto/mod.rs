//! # Cryptographic Primitives
//!
//! This crate never signs or verifies anything. It only needs enough
//! cryptography to reproduce the bytes the network hashes:
//!
//! - **SHA-256** for transaction ids, signing digests and block hashes, behind
//!   the pluggable [`HashFunction`] seam.
//! - **RIPEMD-160** for the checksum on textual public keys.
//! - **Base58** public key decoding into the raw bytes that go on the wire.

pub mod hash;
pub mod keys;

pub use hash::{ripemd160, sha256, HashFunction, Sha256};
pub use keys::PublicKey;
