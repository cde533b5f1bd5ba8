//! # Blocks
//!
//! Only the header is ever encoded: the witness signs the header bytes and
//! the block hash is computed over them. Transactions are committed to
//! through `transaction_merkle_root`, not by inclusion.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{BinaryWriter, Encode, FixedBytes, Void};
use crate::config::{BLOCK_ID_LENGTH, SIGNATURE_LENGTH};
use crate::error::{Error, Result};
use crate::transaction::Transaction;
use crate::types::TimePointSec;
use crate::{encode_fields, serializer, static_variant};

/// A compact recoverable secp256k1 signature.
pub type Signature = FixedBytes<SIGNATURE_LENGTH>;

/// A RIPEMD-160 sized checksum (merkle roots).
pub type Checksum = FixedBytes<BLOCK_ID_LENGTH>;

/// A block id. The first four bytes are the block number, big-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub FixedBytes<BLOCK_ID_LENGTH>);

impl BlockId {
    pub fn from_hex(text: &str) -> Result<Self> {
        FixedBytes::from_hex(text).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_ID_LENGTH] {
        self.0.as_bytes()
    }

    /// Height of the block this id names.
    ///
    /// ```
    /// use hive_protocol::block::BlockId;
    ///
    /// let id = BlockId::from_hex("04c4b40011223344556677889900aabbccddeeff").unwrap();
    /// assert_eq!(id.block_num(), 80_000_000);
    /// ```
    pub fn block_num(&self) -> u32 {
        let bytes = self.as_bytes();
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Low 16 bits of the block number, as a transaction references it.
    pub fn ref_block_num(&self) -> u16 {
        (self.block_num() & 0xffff) as u16
    }

    /// Bytes 4..8 read little-endian, as a transaction references it.
    pub fn ref_block_prefix(&self) -> u32 {
        let bytes = self.as_bytes();
        u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]])
    }
}

impl FromStr for BlockId {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_hex(text)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Encode for BlockId {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        self.0.encode(writer)
    }
}

/// A software or hardfork version, packed as `major << 24 | minor << 16 | patch`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(pub u32);

impl Version {
    pub fn new(major: u8, minor: u8, patch: u16) -> Self {
        Self(u32::from(major) << 24 | u32::from(minor) << 16 | u32::from(patch))
    }

    pub fn major(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn minor(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn patch(self) -> u16 {
        self.0 as u16
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let invalid = || Error::Validation(format!("invalid version {:?}", text));
        let mut parts = text.split('.');
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        Ok(Self::new(
            major.parse().map_err(|_| invalid())?,
            minor.parse().map_err(|_| invalid())?,
            patch.parse().map_err(|_| invalid())?,
        ))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
    }
}

impl Encode for Version {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        self.0.encode(writer)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

/// A witness's vote for the next hardfork and when it should activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardforkVersionVote {
    pub hf_version: Version,
    pub hf_time: TimePointSec,
}

encode_fields!(HardforkVersionVote {
    hf_version,
    hf_time,
});

static_variant! {
    pub enum BlockHeaderExtension {
        0 => Void(Void) = "void_t",
        1 => Version(Version) = "version",
        2 => HardforkVersionVote(HardforkVersionVote) = "hardfork_version_vote",
    }
}

/// The signed portion of a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub previous: BlockId,
    pub timestamp: TimePointSec,
    pub witness: String,
    pub transaction_merkle_root: Checksum,
    #[serde(default)]
    pub extensions: Vec<BlockHeaderExtension>,
}

encode_fields!(BlockHeader {
    previous,
    timestamp,
    witness,
    transaction_merkle_root,
    extensions,
});

impl BlockHeader {
    /// Height of this block: one above its predecessor.
    pub fn block_num(&self) -> u32 {
        self.previous.block_num().wrapping_add(1)
    }

    /// The canonical header bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = BinaryWriter::default();
        serializer::serialize_block(&mut writer, self)?;
        writer.flip();
        Ok(writer.as_slice().to_vec())
    }
}

/// A header together with the witness signature over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedBlockHeader {
    #[serde(flatten)]
    pub header: BlockHeader,
    pub witness_signature: Signature,
}

encode_fields!(SignedBlockHeader {
    header,
    witness_signature,
});

/// A full block as returned by the block API. Fields beyond the header are
/// carried but never encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(flatten)]
    pub header: BlockHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness_signature: Option<Signature>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Parses the JSON block document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn block_num(&self) -> u32 {
        self.header.block_num()
    }
}

impl From<BlockHeader> for Block {
    fn from(header: BlockHeader) -> Self {
        Self {
            header,
            witness_signature: None,
            transactions: Vec::new(),
        }
    }
}
