//! # Transaction Module
//!
//! The transaction model and its construction.
//!
//! ## Architecture
//!
//! ```text
//! types.rs    Transaction: fields, canonical bytes, id, signing digest
//! builder.rs  Fluent TransactionBuilder for constructing unsigned transactions
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build**: use [`TransactionBuilder`] (or parse wallet JSON with
//!    [`Transaction::from_json`]).
//! 2. **Digest**: run it through [`crate::digest::DigestPipeline`] to get the
//!    id, signing digest and signing bytes.
//! 3. **Sign**: an external signer signs the digest. Signatures are pushed
//!    onto `signatures` and do not change the id.

pub mod builder;
pub mod types;

pub use builder::TransactionBuilder;
pub use types::Transaction;
