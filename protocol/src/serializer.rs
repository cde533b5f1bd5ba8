//! Serializer boundary.
//!
//! The two top-level encoders. Any field failure aborts the encode and comes
//! back as a single [`Error::Serialization`] naming what was being encoded;
//! whatever was already written to the writer must be discarded by the caller.

use crate::block::BlockHeader;
use crate::codec::{BinaryWriter, Encode};
use crate::error::{Error, Result, Target};
use crate::transaction::Transaction;

/// Writes the canonical transaction payload. Signatures are not part of it.
pub fn serialize_transaction(writer: &mut BinaryWriter, transaction: &Transaction) -> Result<()> {
    transaction
        .encode(writer)
        .map_err(|source| Error::serialization(Target::Transaction, source))
}

/// Writes the canonical block header payload.
pub fn serialize_block(writer: &mut BinaryWriter, header: &BlockHeader) -> Result<()> {
    header
        .encode(writer)
        .map_err(|source| Error::serialization(Target::Block, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{Operation, UnknownOperation};
    use crate::types::TimePointSec;

    #[test]
    fn field_failures_are_wrapped_once() {
        let tx = Transaction {
            ref_block_num: 1,
            ref_block_prefix: 2,
            expiration: TimePointSec::from_secs(3),
            operations: vec![Operation::Unknown(UnknownOperation {
                kind: "teleport_operation".into(),
                value: serde_json::Value::Null,
            })],
            extensions: Vec::new(),
            signatures: Vec::new(),
        };
        let mut writer = BinaryWriter::default();
        let err = serialize_transaction(&mut writer, &tx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unable to serialize transaction: unknown operation kind: teleport_operation"
        );
        assert!(matches!(
            err,
            Error::Serialization {
                target: Target::Transaction,
                ..
            }
        ));
    }
}
