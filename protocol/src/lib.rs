// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Hive Protocol: Canonical Encoding & Digests
//!
//! Byte-exact serialization of Hive transactions and block headers, and the
//! hashes derived from those bytes. A wallet or signer feeds in the same
//! transaction JSON the API speaks and gets back exactly what the validating
//! nodes compute: the transaction id, the chain-bound signing digest and the
//! signing bytes. One wrong byte and a signature is rejected, so every
//! encoder here is checked against vectors taken from the live chain.
//!
//! ## Architecture
//!
//! - **codec**: the growable little-endian [`BinaryWriter`](codec::BinaryWriter),
//!   varints and the [`Encode`](codec::Encode) trait every wire type implements.
//! - **types**: assets, timestamps, authorities and other shared structs.
//! - **crypto**: SHA-256/RIPEMD-160, the pluggable hash seam and public keys.
//! - **operation**: the append-only operation registry and every schema.
//! - **transaction** / **block**: the two signable documents.
//! - **serializer**: the boundary that turns any field failure into one error.
//! - **digest**: the async pipeline producing ids, digests and signing bytes.
//! - **config**: chain ids and every other constant the wire format fixes.
//!
//! ## Example
//!
//! ```
//! use hive_protocol::Transaction;
//!
//! let tx = Transaction::from_json(r#"{
//!     "ref_block_num": 52283,
//!     "ref_block_prefix": 3934909655,
//!     "expiration": "2025-09-27T15:28:10",
//!     "operations": [{
//!         "type": "claim_reward_balance_operation",
//!         "value": {
//!             "account": "techcoderx",
//!             "reward_hive": "0.000 HIVE",
//!             "reward_hbd": "0.000 HBD",
//!             "reward_vests": "14537.722209 VESTS"
//!         }
//!     }]
//! }"#).unwrap();
//! assert_eq!(tx.id().unwrap(), "d992be1237dad6a9643d1d1b0d09cca42cee83f9");
//! ```

pub mod block;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod digest;
pub mod error;
pub mod operation;
pub mod serializer;
pub mod transaction;
pub mod types;

pub use block::{Block, BlockHeader, BlockId};
pub use digest::{
    block_digest, transaction_digest, BlockDigest, ChainId, DigestPipeline, TransactionDigest,
};
pub use error::{Error, Result};
pub use operation::{Operation, OperationKind};
pub use transaction::{Transaction, TransactionBuilder};
pub use types::{Asset, AssetSymbol, TimePointSec};
