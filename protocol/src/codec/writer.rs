//! Growable, position-tracked byte buffer.
//!
//! [`BinaryWriter`] is the sink every encoder writes into. It keeps the
//! write semantics the network's reference tooling has always had:
//!
//! - Writes take an optional absolute offset. Without one the write is
//!   *relative*: it lands at the cursor and advances it. Absolute writes never
//!   move the cursor but may still grow the backing store.
//! - When a write would run past the end, capacity becomes
//!   `max(capacity * 2, end)`; existing bytes are preserved and the new tail is
//!   zero-filled.
//! - [`BinaryWriter::flip`] turns the written region into the read window
//!   (`limit = offset; offset = 0`), after which the window is extracted with
//!   [`BinaryWriter::to_bytes`] or [`BinaryWriter::into_bytes`].
//!
//! `0 <= offset <= limit <= capacity` holds at every observable point.

use std::ops::Range;

use bytes::Bytes;
use tracing::trace;

use super::varint;
use crate::config::{DEFAULT_WRITER_CAPACITY, MAX_WRITER_CAPACITY};
use crate::error::{Error, Result};

/// Byte order of fixed-width integer writes. The protocol is little-endian
/// throughout; big-endian exists for completeness of the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

/// An owned, growable write buffer with a cursor and a valid-data bound.
#[derive(Debug, Clone)]
pub struct BinaryWriter {
    /// Backing storage. Its length is the capacity; unwritten bytes are zero.
    buffer: Vec<u8>,
    /// Write cursor (read cursor after [`flip`](Self::flip)).
    offset: usize,
    /// End of the valid window.
    limit: usize,
    /// Cursor saved by [`mark`](Self::mark).
    marked_offset: Option<usize>,
    endian: Endian,
    /// Skip offset and capacity assertions. Only for trusted callers.
    no_assert: bool,
}

macro_rules! fixed_width_writes {
    ($($(#[$doc:meta])* $name:ident => $t:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(&mut self, value: $t, offset: Option<usize>) -> Result<usize> {
                let bytes = match self.endian {
                    Endian::Little => value.to_le_bytes(),
                    Endian::Big => value.to_be_bytes(),
                };
                self.write_array(bytes, offset)
            }
        )*
    };
}

impl Default for BinaryWriter {
    fn default() -> Self {
        Self {
            buffer: vec![0; DEFAULT_WRITER_CAPACITY],
            offset: 0,
            limit: DEFAULT_WRITER_CAPACITY,
            marked_offset: None,
            endian: Endian::Little,
            no_assert: false,
        }
    }
}

impl BinaryWriter {
    /// Creates a writer with the given initial capacity and byte order.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if `capacity` exceeds [`MAX_WRITER_CAPACITY`].
    pub fn new(capacity: usize, endian: Endian) -> Result<Self> {
        Self::with_no_assert(capacity, endian, false)
    }

    /// Like [`new`](Self::new), optionally disabling assertions.
    pub fn with_no_assert(capacity: usize, endian: Endian, no_assert: bool) -> Result<Self> {
        if !no_assert {
            check_capacity(capacity)?;
        }
        Ok(Self {
            buffer: vec![0; capacity],
            offset: 0,
            limit: capacity,
            marked_offset: None,
            endian,
            no_assert,
        })
    }

    /// Current size of the backing store.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Current cursor.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// End of the valid window.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Bytes between the cursor and the limit.
    pub fn remaining(&self) -> usize {
        self.limit - self.offset
    }

    /// Byte order of this instance.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Whether assertions are currently bypassed.
    pub fn is_no_assert(&self) -> bool {
        self.no_assert
    }

    /// Enables (`true`) or disables (`false`) offset and capacity assertions.
    pub fn set_assert(&mut self, assert: bool) -> &mut Self {
        self.no_assert = !assert;
        self
    }

    /// Grows the backing store to at least `capacity` bytes. Never shrinks.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if `capacity` exceeds [`MAX_WRITER_CAPACITY`]
    /// while assertions are enabled.
    pub fn resize(&mut self, capacity: usize) -> Result<&mut Self> {
        if !self.no_assert {
            check_capacity(capacity)?;
        }
        if self.buffer.len() < capacity {
            trace!(from = self.buffer.len(), to = capacity, "writer grew");
            self.buffer.resize(capacity, 0);
        }
        Ok(self)
    }

    fixed_width_writes! {
        /// Writes an 8-bit unsigned integer.
        write_u8 => u8,
        /// Writes an 8-bit signed integer.
        write_i8 => i8,
        /// Writes a 16-bit unsigned integer.
        write_u16 => u16,
        /// Writes a 16-bit signed integer.
        write_i16 => i16,
        /// Writes a 32-bit unsigned integer.
        write_u32 => u32,
        /// Writes a 32-bit signed integer.
        write_i32 => i32,
        /// Writes a 64-bit unsigned integer.
        write_u64 => u64,
        /// Writes a 64-bit signed integer.
        write_i64 => i64,
    }

    /// Writes a boolean as a single `0`/`1` byte.
    pub fn write_bool(&mut self, value: bool, offset: Option<usize>) -> Result<usize> {
        self.write_u8(u8::from(value), offset)
    }

    /// Writes `value` as a minimal unsigned LEB128 varint and returns its size.
    pub fn write_varint32(&mut self, value: u32, offset: Option<usize>) -> Result<usize> {
        let size = varint::varint32_len(value);
        let start = self.prepare(offset, size)?;
        varint::encode_varint32_into(value, &mut self.buffer[start..start + size]);
        self.commit(offset, start + size);
        Ok(size)
    }

    /// Writes a string as its UTF-8 byte count (varint) followed by the bytes.
    ///
    /// The prefix counts encoded bytes, not characters.
    pub fn write_vstring(&mut self, value: &str, offset: Option<usize>) -> Result<usize> {
        let bytes = value.as_bytes();
        let len = u32::try_from(bytes.len())
            .map_err(|_| Error::Range(format!("string of {} bytes is too long", bytes.len())))?;
        let prefix = varint::varint32_len(len);
        let total = prefix + bytes.len();
        let start = self.prepare(offset, total)?;
        varint::encode_varint32_into(len, &mut self.buffer[start..start + prefix]);
        self.buffer[start + prefix..start + total].copy_from_slice(bytes);
        self.commit(offset, start + total);
        Ok(total)
    }

    /// Copies raw bytes into the buffer.
    pub fn write_bytes(&mut self, source: &[u8], offset: Option<usize>) -> Result<usize> {
        let start = self.prepare(offset, source.len())?;
        if source.is_empty() {
            return Ok(0);
        }
        self.buffer[start..start + source.len()].copy_from_slice(source);
        self.commit(offset, start + source.len());
        Ok(source.len())
    }

    /// Copies the valid window `[offset, limit)` of `source` into this buffer
    /// and advances `source`'s cursor past it, so appending the same source
    /// twice drains it.
    pub fn append(&mut self, source: &mut BinaryWriter, offset: Option<usize>) -> Result<usize> {
        let window = source.offset..source.limit;
        let length = window.len();
        let written = self.write_bytes(&source.buffer[window], offset)?;
        source.offset += length;
        Ok(written)
    }

    /// Switches from writing to reading: `limit = offset; offset = 0`.
    pub fn flip(&mut self) -> &mut Self {
        self.limit = self.offset;
        self.offset = 0;
        if self.marked_offset.is_some_and(|marked| marked > self.limit) {
            self.marked_offset = None;
        }
        self
    }

    /// Saves `offset` (or the cursor) for a later [`reset`](Self::reset).
    pub fn mark(&mut self, offset: Option<usize>) -> Result<&mut Self> {
        let offset = offset.unwrap_or(self.offset);
        if offset > self.limit {
            return Err(Error::Range(format!(
                "illegal offset: 0 <= {} <= {}",
                offset, self.limit
            )));
        }
        self.marked_offset = Some(offset);
        Ok(self)
    }

    /// Restores the marked cursor (clearing the mark), or rewinds to zero.
    pub fn reset(&mut self) -> &mut Self {
        self.offset = self.marked_offset.take().unwrap_or(0);
        self
    }

    /// A range-checked view of `[begin, end)` of the backing store.
    pub fn slice(&self, begin: usize, end: usize) -> Result<&[u8]> {
        if begin > end || end > self.buffer.len() {
            return Err(Error::Range(format!(
                "illegal range: 0 <= {} <= {} <= {}",
                begin,
                end,
                self.buffer.len()
            )));
        }
        Ok(&self.buffer[begin..end])
    }

    /// The valid window `[offset, limit)`.
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer[self.window()]
    }

    /// Copies the valid window out. Empty when `offset == limit`.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_slice())
    }

    /// Consumes the writer and returns the valid window without copying.
    pub fn into_bytes(self) -> Bytes {
        let window = self.window();
        Bytes::from(self.buffer).slice(window)
    }

    fn window(&self) -> Range<usize> {
        self.offset..self.limit
    }

    fn write_array<const N: usize>(&mut self, bytes: [u8; N], offset: Option<usize>) -> Result<usize> {
        let start = self.prepare(offset, N)?;
        self.buffer[start..start + N].copy_from_slice(&bytes);
        self.commit(offset, start + N);
        Ok(N)
    }

    /// Validates the target offset and grows the store so `size` bytes fit.
    /// Returns where the write starts.
    fn prepare(&mut self, offset: Option<usize>, size: usize) -> Result<usize> {
        let start = offset.unwrap_or(self.offset);
        let capacity = self.buffer.len();
        if !self.no_assert && start > capacity {
            return Err(Error::Range(format!(
                "illegal offset: 0 <= {} (+0) <= {}",
                start, capacity
            )));
        }
        let end = start
            .checked_add(size)
            .ok_or_else(|| Error::Range(format!("illegal offset: {} + {} overflows", start, size)))?;
        if end > capacity {
            let mut grown = capacity.saturating_mul(2).max(end);
            if grown > MAX_WRITER_CAPACITY && end <= MAX_WRITER_CAPACITY {
                grown = MAX_WRITER_CAPACITY;
            }
            self.resize(grown)?;
        }
        Ok(start)
    }

    /// Records a completed write ending at `end`.
    fn commit(&mut self, offset: Option<usize>, end: usize) {
        if end > self.limit {
            self.limit = end;
        }
        if offset.is_none() {
            self.offset = end;
        }
    }
}

fn check_capacity(capacity: usize) -> Result<()> {
    if capacity > MAX_WRITER_CAPACITY {
        return Err(Error::Validation(format!(
            "illegal capacity: 0 <= {} <= {}",
            capacity, MAX_WRITER_CAPACITY
        )));
    }
    Ok(())
}
