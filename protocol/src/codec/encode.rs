//! The [`Encode`] trait and its implementations for primitive and container
//! types.
//!
//! ## Wire rules
//!
//! - Fixed-width integers: little-endian, no padding.
//! - `bool`: one byte, `0` or `1`.
//! - Strings: varint UTF-8 byte length, then the bytes.
//! - `Vec<T>`: varint element count, then each element.
//! - `BTreeSet<T>` / `BTreeMap<K, V>`: varint count, then elements (or
//!   key/value pairs) in ascending key order. The chain stores these as sorted
//!   flat containers, so ordering is part of the format.
//! - `Option<T>`: one flag byte, then the value when present.
//!
//! Composite protocol types declare their layout with [`encode_fields!`]:
//! fields are written in declaration order with no framing between them.

use std::collections::{BTreeMap, BTreeSet};

use super::writer::BinaryWriter;
use crate::error::{Error, Result};

/// A value with a canonical binary form.
pub trait Encode {
    /// Appends the canonical bytes of `self` at the writer's cursor.
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()>;
}

/// Encodes `value` into a fresh writer and returns exactly the written bytes.
pub fn encode_to_bytes<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut writer = BinaryWriter::default();
    value.encode(&mut writer)?;
    writer.flip();
    Ok(writer.as_slice().to_vec())
}

/// Writes a collection length as a varint, failing if it exceeds `u32`.
pub(crate) fn encode_len(writer: &mut BinaryWriter, len: usize) -> Result<()> {
    let len = u32::try_from(len)
        .map_err(|_| Error::Range(format!("collection of {} elements is too long", len)))?;
    writer.write_varint32(len, None)?;
    Ok(())
}

/// Implements [`Encode`] for a struct by encoding the listed fields in order.
///
/// The field list *is* the schema: reordering it changes the wire format.
///
/// ```ignore
/// encode_fields!(TransferOperation { from, to, amount, memo });
/// ```
#[macro_export]
macro_rules! encode_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::codec::Encode for $ty {
            fn encode(
                &self,
                #[allow(unused_variables)] writer: &mut $crate::codec::BinaryWriter,
            ) -> $crate::error::Result<()> {
                $( $crate::codec::Encode::encode(&self.$field, writer)?; )*
                Ok(())
            }
        }
    };
}

macro_rules! impl_encode_int {
    ($($t:ty => $write:ident),* $(,)?) => {
        $(
            impl Encode for $t {
                fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
                    writer.$write(*self, None)?;
                    Ok(())
                }
            }
        )*
    };
}

impl_encode_int! {
    u8 => write_u8,
    i8 => write_i8,
    u16 => write_u16,
    i16 => write_i16,
    u32 => write_u32,
    i32 => write_i32,
    u64 => write_u64,
    i64 => write_i64,
}

impl Encode for bool {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        writer.write_bool(*self, None)?;
        Ok(())
    }
}

impl Encode for str {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        writer.write_vstring(self, None)?;
        Ok(())
    }
}

impl Encode for String {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        self.as_str().encode(writer)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        (**self).encode(writer)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        (**self).encode(writer)
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        encode_len(writer, self.len())?;
        for item in self {
            item.encode(writer)?;
        }
        Ok(())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        self.as_slice().encode(writer)
    }
}

impl<T: Encode> Encode for BTreeSet<T> {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        encode_len(writer, self.len())?;
        for item in self {
            item.encode(writer)?;
        }
        Ok(())
    }
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        encode_len(writer, self.len())?;
        for (key, value) in self {
            key.encode(writer)?;
            value.encode(writer)?;
        }
        Ok(())
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        match self {
            Some(value) => {
                writer.write_u8(1, None)?;
                value.encode(writer)
            }
            None => {
                writer.write_u8(0, None)?;
                Ok(())
            }
        }
    }
}
