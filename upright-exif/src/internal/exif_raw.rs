mod decode;
mod lookup;

pub use upright_common::exif::{ByteOrder, Tag};
use upright_common::math::*;

use super::{Raw, Type};
use crate::error::{Error, Result, ResultExt};

/// Size of an IFD entry in bytes
pub const ENTRY_SIZE: usize = 12;
/// Minimum size of a TIFF header in bytes
pub const HEADER_SIZE: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct EntryRef {
    /// Position of the entry relative to the TIFF header
    pub position: usize,
    pub tag: Tag,
    pub data_type: Type,
    pub count: u32,
    /// Value or offset, still in the byte order of the data
    pub value_offset: [u8; 4],
    pub byte_order: ByteOrder,
}

impl EntryRef {
    /// Value of a SHORT entry with count 1
    ///
    /// Reads the first two bytes of the value field without checking type and
    /// count.
    pub fn short(&self) -> u16 {
        let [b0, b1, _, _] = self.value_offset;
        self.byte_order.u16([b0, b1])
    }

    pub fn is_single_short(&self) -> bool {
        self.data_type == Type::Short && self.count == 1
    }
}

/// Decoded TIFF header with access to the entries of the first IFD
#[derive(Debug, Clone, Copy)]
pub struct ExifRaw<'a> {
    pub raw: Raw<'a>,
    /// Offset of the first IFD relative to the TIFF header
    pub ifd_offset: usize,
    pub n_entries: u16,
}
