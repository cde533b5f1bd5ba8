//! # Digest Pipeline
//!
//! Turns a transaction or block into the values a signer and an explorer need.
//!
//! ```text
//!   encode            assemble                      hash
//! tx ──────> payload ──────────> chain_id ++ payload ─────> digest
//!               │                                      ┌──> tx_id (first 20 bytes, hex)
//!               └──────────────────────────────────────┘
//!
//! block header ──encode──> payload ──hash──> digest, hash (hex)
//! ```
//!
//! Each call owns its writer and borrows its input immutably, so any number
//! of digests can run concurrently against one pipeline. The hasher is the
//! only suspension point. For a transaction both hashes are issued together
//! and awaited with `try_join!`; the first failure aborts the call.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use futures::TryFutureExt;
use tracing::debug;

use crate::block::Block;
use crate::codec::BinaryWriter;
use crate::config::{network_name, CHAIN_ID_LENGTH, DIGEST_LENGTH, TXID_LENGTH};
use crate::crypto::{HashFunction, Sha256};
use crate::error::{Error, Result};
use crate::serializer;
use crate::transaction::Transaction;

// ---------------------------------------------------------------------------
// ChainId
// ---------------------------------------------------------------------------

/// The 32-byte network identifier mixed into every signing digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId([u8; CHAIN_ID_LENGTH]);

impl ChainId {
    /// Hive mainnet: `beeab0de` followed by 28 zero bytes.
    pub const MAINNET: ChainId = ChainId([
        0xbe, 0xea, 0xb0, 0xde, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0,
    ]);

    /// The public Hive testnet.
    pub const TESTNET: ChainId = ChainId([
        0x18, 0xdc, 0xf0, 0xa2, 0x85, 0x36, 0x5f, 0xc5, 0x8b, 0x71, 0xf1, 0x8b, 0x3d, 0x3f, 0xec,
        0x95, 0x4a, 0xa0, 0xc1, 0x41, 0xc4, 0x4e, 0x4e, 0x5c, 0xb4, 0xcf, 0x77, 0x7b, 0x9e, 0xab,
        0x27, 0x4e,
    ]);

    pub fn as_bytes(&self) -> &[u8; CHAIN_ID_LENGTH] {
        &self.0
    }
}

impl Default for ChainId {
    fn default() -> Self {
        Self::MAINNET
    }
}

impl From<[u8; CHAIN_ID_LENGTH]> for ChainId {
    fn from(bytes: [u8; CHAIN_ID_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for ChainId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        <[u8; CHAIN_ID_LENGTH]>::try_from(bytes).map(Self).map_err(|_| {
            Error::Validation(format!(
                "chain id must be {} bytes, got {}",
                CHAIN_ID_LENGTH,
                bytes.len()
            ))
        })
    }
}

impl FromStr for ChainId {
    type Err = Error;

    /// Parses a 64-character hex chain id. Upper and lower case are accepted.
    fn from_str(text: &str) -> Result<Self> {
        let bytes = hex::decode(text.trim())
            .map_err(|e| Error::Validation(format!("invalid chain id: {}", e)))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainId({})", network_name(&self.0))
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Everything needed to sign and track a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDigest {
    /// Hash of `chain_id ++ payload`. This is what gets signed.
    pub digest: [u8; DIGEST_LENGTH],
    /// First 20 bytes of the payload hash, as 40 lowercase hex characters.
    pub tx_id: String,
    /// The signing bytes: `chain_id ++ payload`.
    pub bin: Bytes,
}

/// Hash of a block header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDigest {
    pub digest: [u8; DIGEST_LENGTH],
    /// `digest` as lowercase hex.
    pub hash: String,
}

// ---------------------------------------------------------------------------
// DigestPipeline
// ---------------------------------------------------------------------------

/// Encodes, assembles and hashes. Defaults to mainnet and SHA-256.
///
/// ```
/// use hive_protocol::digest::{ChainId, DigestPipeline};
/// use hive_protocol::transaction::Transaction;
///
/// let tx = Transaction::from_json(
///     r#"{"ref_block_num": 1, "ref_block_prefix": 2,
///         "expiration": "2025-01-01T00:00:00", "operations": []}"#,
/// )
/// .unwrap();
/// let pipeline = DigestPipeline::new().with_chain_id(ChainId::TESTNET);
/// let result = futures::executor::block_on(pipeline.transaction(&tx)).unwrap();
/// assert_eq!(result.tx_id, tx.id().unwrap());
/// assert_eq!(&result.bin[..32], ChainId::TESTNET.as_bytes());
/// ```
#[derive(Clone, Default)]
pub struct DigestPipeline<H = Sha256> {
    chain_id: ChainId,
    hasher: H,
}

impl DigestPipeline {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: HashFunction> DigestPipeline<H> {
    /// Signs for a different network.
    pub fn with_chain_id(mut self, chain_id: ChainId) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Replaces the hash function. The output must still be 32 bytes.
    pub fn with_hasher<G: HashFunction>(self, hasher: G) -> DigestPipeline<G> {
        DigestPipeline {
            chain_id: self.chain_id,
            hasher,
        }
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    /// Computes the signing digest, transaction id and signing bytes.
    ///
    /// # Errors
    ///
    /// [`Error::Serialization`] if any field fails to encode, or
    /// [`Error::Hash`] if the hasher fails. Nothing is returned on failure.
    pub async fn transaction(&self, transaction: &Transaction) -> Result<TransactionDigest> {
        let mut writer = BinaryWriter::default();
        serializer::serialize_transaction(&mut writer, transaction)?;
        writer.flip();
        let payload = writer.into_bytes();
        debug!(
            network = %network_name(self.chain_id.as_bytes()),
            operations = transaction.operations.len(),
            payload_len = payload.len(),
            "encoded transaction"
        );

        let mut signing = Vec::with_capacity(CHAIN_ID_LENGTH + payload.len());
        signing.extend_from_slice(self.chain_id.as_bytes());
        signing.extend_from_slice(&payload);

        let (payload_hash, digest) = futures::try_join!(
            self.hasher.hash(&payload).map_err(Error::Hash),
            self.hasher.hash(&signing).map_err(Error::Hash),
        )?;

        let tx_id = hex::encode(&payload_hash[..TXID_LENGTH]);
        debug!(tx_id = %tx_id, "transaction digest computed");

        Ok(TransactionDigest {
            digest,
            tx_id,
            bin: Bytes::from(signing),
        })
    }

    /// Hashes the block header. The chain id is not part of a block hash.
    pub async fn block(&self, block: &Block) -> Result<BlockDigest> {
        let mut writer = BinaryWriter::default();
        serializer::serialize_block(&mut writer, &block.header)?;
        writer.flip();
        let payload = writer.into_bytes();
        debug!(
            block_num = block.block_num(),
            payload_len = payload.len(),
            "encoded block header"
        );

        let digest = self.hasher.hash(&payload).await.map_err(Error::Hash)?;
        let hash = hex::encode(digest);
        debug!(hash = %hash, "block digest computed");

        Ok(BlockDigest { digest, hash })
    }
}

impl<H> fmt::Debug for DigestPipeline<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestPipeline")
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}

/// [`DigestPipeline::transaction`] on mainnet with SHA-256.
pub async fn transaction_digest(transaction: &Transaction) -> Result<TransactionDigest> {
    DigestPipeline::new().transaction(transaction).await
}

/// [`DigestPipeline::block`] with SHA-256.
pub async fn block_digest(block: &Block) -> Result<BlockDigest> {
    DigestPipeline::new().block(block).await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
