//! The transaction model.

use serde::{Deserialize, Serialize};

use crate::codec::{BinaryWriter, HexBytes};
use crate::config::TXID_LENGTH;
use crate::crypto::sha256;
use crate::digest::ChainId;
use crate::encode_fields;
use crate::error::Result;
use crate::operation::Operation;
use crate::serializer;
use crate::types::{Extensions, TimePointSec};

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A Hive transaction.
///
/// # Canonical Byte Format
///
/// ```text
/// ref_block_num     u16
/// ref_block_prefix  u32
/// expiration        u32 (seconds since epoch)
/// operations        varint count, then each operation
/// extensions        varint count, then each extension
/// ```
///
/// `signatures` is carried for transport only and is never encoded, so the
/// id and signing digest are the same before and after signing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Low 16 bits of the reference block number.
    pub ref_block_num: u16,

    /// Bytes 4..8 of the reference block id, little-endian. Together with
    /// `ref_block_num` this pins the transaction to one fork.
    pub ref_block_prefix: u32,

    /// After this time the transaction can no longer be included.
    pub expiration: TimePointSec,

    pub operations: Vec<Operation>,

    #[serde(default)]
    pub extensions: Extensions,

    /// Compact signatures, hex in JSON.
    #[serde(default)]
    pub signatures: Vec<HexBytes>,
}

encode_fields!(Transaction {
    ref_block_num,
    ref_block_prefix,
    expiration,
    operations,
    extensions,
});

impl Transaction {
    /// Parses a transaction JSON document as wallets and the API produce it.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The canonical payload bytes (no chain id, no signatures).
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = BinaryWriter::default();
        serializer::serialize_transaction(&mut writer, self)?;
        writer.flip();
        Ok(writer.as_slice().to_vec())
    }

    /// The transaction id: the first 20 bytes of SHA-256 over the payload,
    /// as 40 hex characters.
    pub fn id(&self) -> Result<String> {
        let hash = sha256(&self.to_bytes()?);
        Ok(hex::encode(&hash[..TXID_LENGTH]))
    }

    /// SHA-256 over `chain_id ++ payload`: what a signer signs.
    pub fn signing_digest(&self, chain_id: &ChainId) -> Result<[u8; 32]> {
        let mut message = chain_id.as_bytes().to_vec();
        message.extend_from_slice(&self.to_bytes()?);
        Ok(sha256(&message))
    }

    /// Returns `true` if the transaction carries at least one signature.
    pub fn is_signed(&self) -> bool {
        !self.signatures.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claim() -> Transaction {
        serde_json::from_value(json!({
            "ref_block_num": 52283,
            "ref_block_prefix": 3934909655u32,
            "expiration": "2025-09-27T15:28:10",
            "operations": [{
                "type": "claim_reward_balance_operation",
                "value": {
                    "account": "techcoderx",
                    "reward_hive": {"nai": "@@000000021", "amount": "0", "precision": 3},
                    "reward_hbd": {"nai": "@@000000013", "amount": "0", "precision": 3},
                    "reward_vests": {"nai": "@@000000037", "amount": "14537722209", "precision": 6}
                }
            }],
            "extensions": [],
            "signatures": []
        }))
        .unwrap()
    }

    #[test]
    fn id_matches_the_chain() {
        assert_eq!(claim().id().unwrap(), "d992be1237dad6a9643d1d1b0d09cca42cee83f9");
    }

    #[test]
    fn signatures_do_not_change_bytes() {
        let unsigned = claim();
        let mut signed = claim();
        signed.signatures.push(HexBytes::from(vec![0x1f; 65]));
        assert!(signed.is_signed());
        assert_eq!(unsigned.to_bytes().unwrap(), signed.to_bytes().unwrap());
        assert_eq!(unsigned.id().unwrap(), signed.id().unwrap());
    }

    #[test]
    fn signing_digest_depends_on_chain() {
        let tx = claim();
        let mainnet = tx.signing_digest(&ChainId::MAINNET).unwrap();
        let testnet = tx.signing_digest(&ChainId::TESTNET).unwrap();
        assert_ne!(mainnet, testnet);
    }

    #[test]
    fn header_fields_lead_the_payload() {
        let bytes = claim().to_bytes().unwrap();
        assert_eq!(&bytes[..2], &52283u16.to_le_bytes());
        assert_eq!(&bytes[2..6], &3934909655u32.to_le_bytes());
        // one operation, id 39
        assert_eq!(&bytes[10..12], &[1, 39]);
        assert_eq!(*bytes.last().unwrap(), 0);
    }

    #[test]
    fn missing_optional_lists_default_to_empty() {
        let tx = Transaction::from_json(
            r#"{"ref_block_num": 1, "ref_block_prefix": 2, "expiration": "2020-01-01T00:00:00", "operations": []}"#,
        )
        .unwrap();
        assert!(tx.extensions.is_empty());
        assert!(!tx.is_signed());
        assert_eq!(tx.to_bytes().unwrap().len(), 2 + 4 + 4 + 1 + 1);
    }
}
