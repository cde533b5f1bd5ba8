//! # Protocol Configuration & Constants
//!
//! Every magic number the codec depends on lives here. These values are
//! dictated by the Hive validating nodes, not by us: change one and every
//! digest this crate produces stops matching the chain.

// ---------------------------------------------------------------------------
// Network Identifiers
// ---------------------------------------------------------------------------

/// Mainnet chain id, hex-encoded. Prepended to the transaction payload before
/// hashing so that a signature for one network cannot be replayed on another.
pub const MAINNET_CHAIN_ID_HEX: &str =
    "beeab0de00000000000000000000000000000000000000000000000000000000";

/// Public testnet chain id, hex-encoded.
pub const TESTNET_CHAIN_ID_HEX: &str =
    "18dcf0a285365fc58b71f18b3d3fec954aa0c141c44e4e5cb4cf777b9eab274e";

/// Length of a chain id in bytes (a SHA-256 digest).
pub const CHAIN_ID_LENGTH: usize = 32;

/// Address prefix used by mainnet public keys (`STM...`). Inherited from the
/// chain's ancestry and never changed, for the obvious compatibility reasons.
pub const DEFAULT_ADDRESS_PREFIX: &str = "STM";

/// Length of the textual network prefix on an encoded public key.
pub const ADDRESS_PREFIX_LENGTH: usize = 3;

// ---------------------------------------------------------------------------
// Digest Parameters
// ---------------------------------------------------------------------------

/// Number of leading hash bytes that form a transaction id (40 hex chars).
pub const TXID_LENGTH: usize = 20;

/// Output length of the hash function the pipeline expects.
pub const DIGEST_LENGTH: usize = 32;

/// Expiration window the transaction builder uses when none is given.
pub const DEFAULT_EXPIRATION_SECS: u32 = 60;

/// Furthest in the future a node accepts a transaction's expiration.
pub const MAX_EXPIRATION_SECS: u32 = 3600;

// ---------------------------------------------------------------------------
// Key Parameters
// ---------------------------------------------------------------------------

/// Compressed secp256k1 point length. Public keys on the wire are exactly this.
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// Trailing RIPEMD-160 checksum bytes on a base58 public key.
pub const PUBLIC_KEY_CHECKSUM_LENGTH: usize = 4;

/// Compact recoverable secp256k1 signature length.
pub const SIGNATURE_LENGTH: usize = 65;

/// Length of a block id and of a transaction merkle root (RIPEMD-160).
pub const BLOCK_ID_LENGTH: usize = 20;

// ---------------------------------------------------------------------------
// Asset Parameters
// ---------------------------------------------------------------------------

/// Decimal places of the liquid currencies (HIVE, HBD and their testnet twins).
pub const HIVE_PRECISION: u8 = 3;

/// Decimal places of the staked-equity unit (VESTS).
pub const VESTS_PRECISION: u8 = 6;

/// Highest NAI available to user-created tokens; the native assets are
/// numbered just above it.
pub const SMT_MAX_NAI: u32 = 99_999_999;

/// Bits reserved below the NAI for precision (and the token-space flag).
pub const NAI_SHIFT: u32 = 5;

// ---------------------------------------------------------------------------
// Writer Parameters
// ---------------------------------------------------------------------------

/// Initial capacity of a fresh writer. Small on purpose: most payloads fit
/// after two or three doublings.
pub const DEFAULT_WRITER_CAPACITY: usize = 16;

/// Largest capacity a writer may be asked for while assertions are enabled.
pub const MAX_WRITER_CAPACITY: usize = i32::MAX as usize;

// ---------------------------------------------------------------------------
// Utility
// ---------------------------------------------------------------------------

/// Returns a friendly name for a chain id, mainly for logging.
/// Unknown networks get a shortened hex dump.
pub fn network_name(chain_id: &[u8]) -> String {
    let hex_id = hex::encode(chain_id);
    match hex_id.as_str() {
        MAINNET_CHAIN_ID_HEX => "mainnet".to_string(),
        TESTNET_CHAIN_ID_HEX => "testnet".to_string(),
        other => format!("unknown({})", &other[..other.len().min(8)]),
    }
}
