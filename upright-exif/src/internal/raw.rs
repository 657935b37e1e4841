use upright_common::exif::ByteOrder;
use upright_common::math::SafeAdd;

use crate::error::{Error, Result, ResultExt};

/// TIFF data with the byte order from its header
#[derive(Debug, Clone, Copy)]
pub struct Raw<'a> {
    pub byte_order: ByteOrder,
    pub data: &'a [u8],
}

impl<'a> Raw<'a> {
    pub fn read_exact<const N: usize>(&self, pos: usize) -> Result<[u8; N]> {
        let end = pos.safe_add(N)?;
        self.data
            .get(pos..end)
            .and_then(|x| <[u8; N]>::try_from(x).ok())
            .e(Error::Eof { pos, len: N })
    }

    pub fn read_u16(&self, pos: usize) -> Result<u16> {
        Ok(self.byte_order.u16(self.read_exact(pos)?))
    }

    pub fn read_u32(&self, pos: usize) -> Result<u32> {
        Ok(self.byte_order.u32(self.read_exact(pos)?))
    }
}
