//! # Canonical Binary Codec
//!
//! The bit-exact encoding the Hive nodes hash and sign. Nothing here knows
//! about operations or transactions; it provides the primitives those
//! layers are built from:
//!
//! - [`writer`]: the growable [`BinaryWriter`] every encoder writes into.
//! - [`varint`]: minimal LEB128 for lengths and variant indices.
//! - [`encode`]: the [`Encode`] trait and its impls for primitives and
//!   containers, plus the [`encode_fields!`](crate::encode_fields) schema macro.
//! - [`variant`]: tagged unions and the [`static_variant!`](crate::static_variant) macro.
//! - [`bytes`]: hex-serialized byte strings and fixed-size arrays.
//! - [`json`]: serde helpers for the chain's JSON quirks.

pub mod bytes;
pub mod encode;
pub mod json;
pub mod variant;
pub mod varint;
pub mod writer;

pub use self::bytes::{FixedBytes, HexBytes};
pub use encode::{encode_to_bytes, Encode};
pub use variant::Void;
pub use varint::{decode_varint32, encode_varint32};
pub use writer::{BinaryWriter, Endian};
