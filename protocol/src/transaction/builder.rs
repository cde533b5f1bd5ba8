//! Transaction construction via the builder pattern.
//!
//! The [`TransactionBuilder`] pins the transaction to a reference block, sets
//! an expiration and collects operations. It does not sign; the result is an
//! unsigned [`Transaction`] whose id and signing digest are already final.

use chrono::Utc;

use super::types::Transaction;
use crate::block::BlockId;
use crate::config::{DEFAULT_EXPIRATION_SECS, MAX_EXPIRATION_SECS};
use crate::error::{Error, Result};
use crate::operation::Operation;
use crate::types::{FutureExtension, TimePointSec};

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for unsigned [`Transaction`] instances.
///
/// # Usage
///
/// ```
/// use hive_protocol::block::BlockId;
/// use hive_protocol::operation::VoteOperation;
/// use hive_protocol::transaction::TransactionBuilder;
///
/// let head = BlockId::from_hex("04c4b40011223344556677889900aabbccddeeff").unwrap();
/// let tx = TransactionBuilder::new()
///     .reference_block(&head)
///     .expires_in(30)
///     .operation(VoteOperation {
///         voter: "alice".into(),
///         author: "bob".into(),
///         permlink: "hello".into(),
///         weight: 10_000,
///     })
///     .build()
///     .unwrap();
/// assert_eq!(tx.ref_block_num, 46_080);
/// assert_eq!(tx.id().unwrap().len(), 40);
/// ```
///
/// Without an explicit expiration, `build()` uses the current UTC time plus
/// [`DEFAULT_EXPIRATION_SECS`].
#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder {
    ref_block_num: u16,
    ref_block_prefix: u32,
    expiration: Option<TimePointSec>,
    expires_in: Option<u32>,
    operations: Vec<Operation>,
    extensions: Vec<FutureExtension>,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// References the given block (normally the head or last irreversible one).
    pub fn reference_block(mut self, block_id: &BlockId) -> Self {
        self.ref_block_num = block_id.ref_block_num();
        self.ref_block_prefix = block_id.ref_block_prefix();
        self
    }

    /// Sets the raw reference fields directly.
    pub fn ref_block(mut self, ref_block_num: u16, ref_block_prefix: u32) -> Self {
        self.ref_block_num = ref_block_num;
        self.ref_block_prefix = ref_block_prefix;
        self
    }

    /// Sets an absolute expiration. Takes precedence over [`expires_in`](Self::expires_in).
    pub fn expiration(mut self, expiration: TimePointSec) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Expires `secs` seconds after `build()` is called.
    pub fn expires_in(mut self, secs: u32) -> Self {
        self.expires_in = Some(secs);
        self
    }

    pub fn operation(mut self, operation: impl Into<Operation>) -> Self {
        self.operations.push(operation.into());
        self
    }

    pub fn operations<I>(mut self, operations: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operation>,
    {
        self.operations.extend(operations.into_iter().map(Into::into));
        self
    }

    pub fn extension(mut self, extension: FutureExtension) -> Self {
        self.extensions.push(extension);
        self
    }

    /// Consumes the builder and produces an unsigned [`Transaction`].
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if the relative expiration exceeds
    /// [`MAX_EXPIRATION_SECS`], or [`Error::Range`] if the expiration falls
    /// outside the timestamp range.
    pub fn build(self) -> Result<Transaction> {
        let expiration = match self.expiration {
            Some(expiration) => expiration,
            None => {
                let secs = self.expires_in.unwrap_or(DEFAULT_EXPIRATION_SECS);
                if secs > MAX_EXPIRATION_SECS {
                    return Err(Error::Validation(format!(
                        "expiration of {}s exceeds the {}s maximum",
                        secs, MAX_EXPIRATION_SECS
                    )));
                }
                TimePointSec::from_datetime(Utc::now())?.saturating_add(secs)
            }
        };

        Ok(Transaction {
            ref_block_num: self.ref_block_num,
            ref_block_prefix: self.ref_block_prefix,
            expiration,
            operations: self.operations,
            extensions: self.extensions,
            signatures: Vec::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{DeleteCommentOperation, RecurrentTransferOperation};
    use crate::types::{Asset, AssetSymbol};

    fn delete(permlink: &str) -> DeleteCommentOperation {
        DeleteCommentOperation {
            author: "alice".into(),
            permlink: permlink.into(),
        }
    }

    fn sample_tx() -> Transaction {
        TransactionBuilder::new()
            .ref_block(23679, 291568045)
            .expiration("2025-11-20T07:59:08".parse().unwrap())
            .operation(delete("a"))
            .build()
            .unwrap()
    }

    #[test]
    fn builder_produces_deterministic_id() {
        assert_eq!(sample_tx().id().unwrap(), sample_tx().id().unwrap());
    }

    #[test]
    fn id_is_hex_encoded_40_chars() {
        let id = sample_tx().id().unwrap();
        assert_eq!(id.len(), 40);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_operations_different_id() {
        let other = TransactionBuilder::new()
            .ref_block(23679, 291568045)
            .expiration("2025-11-20T07:59:08".parse().unwrap())
            .operation(delete("b"))
            .build()
            .unwrap();
        assert_ne!(sample_tx().id().unwrap(), other.id().unwrap());
    }

    #[test]
    fn unsigned_transaction_has_no_signature() {
        assert!(!sample_tx().is_signed());
    }

    #[test]
    fn reference_block_from_id() {
        let head = BlockId::from_hex("04c4b40011223344556677889900aabbccddeeff").unwrap();
        let tx = TransactionBuilder::new()
            .reference_block(&head)
            .build()
            .unwrap();
        assert_eq!(tx.ref_block_num, 0xb400);
        assert_eq!(tx.ref_block_prefix, u32::from_le_bytes([0x11, 0x22, 0x33, 0x44]));
    }

    #[test]
    fn builder_uses_current_time_if_not_set() {
        let before = Utc::now().timestamp() as u32;
        let tx = TransactionBuilder::new().expires_in(120).build().unwrap();
        let after = Utc::now().timestamp() as u32;
        assert!(tx.expiration.secs() >= before + 120);
        assert!(tx.expiration.secs() <= after + 120);
    }

    #[test]
    fn expiration_window_is_capped() {
        let err = TransactionBuilder::new()
            .expires_in(MAX_EXPIRATION_SECS + 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn operations_accepts_mixed_iterables() {
        let ops: Vec<Operation> = vec![
            delete("x").into(),
            RecurrentTransferOperation {
                from: "a".into(),
                to: "b".into(),
                amount: Asset::from_scaled(1, AssetSymbol::Hive),
                memo: String::new(),
                recurrence: 24,
                executions: 2,
                extensions: Vec::new(),
            }
            .into(),
        ];
        let tx = TransactionBuilder::new()
            .expiration(TimePointSec::from_secs(1))
            .operations(ops)
            .build()
            .unwrap();
        assert_eq!(tx.operations.len(), 2);
        assert_eq!(tx.to_bytes().unwrap()[10], 2);
    }
}
