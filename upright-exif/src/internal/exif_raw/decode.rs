use super::*;

impl<'a> super::ExifRaw<'a> {
    /// Decode header and locate the first IFD
    ///
    /// See 4.5.2 in v3.0 standard
    pub fn new(data: &'a [u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::HeaderEof(data.len()));
        }

        let byte_order = Self::read_byte_order(data)?;
        let raw = Raw { byte_order, data };

        Self::read_magic_42(raw)?;

        let ifd_offset_raw = raw.read_u32(4)?;
        let ifd_offset = ifd_offset_raw
            .usize()
            .e(Error::IfdOffsetInvalid(ifd_offset_raw))?;

        tracing::debug!("Reading number of entries in first IFD at byte {ifd_offset}");
        let n_entries = raw
            .read_u16(ifd_offset)
            .e(Error::IfdOffsetInvalid(ifd_offset_raw))?;
        tracing::debug!("First IFD has {n_entries} entries");

        Ok(Self {
            raw,
            ifd_offset,
            n_entries,
        })
    }

    pub fn read_byte_order(data: &[u8]) -> Result<ByteOrder> {
        let Some(&[b0, b1]) = data.get(..2) else {
            return Err(Error::HeaderEof(data.len()));
        };

        ByteOrder::from_marker([b0, b1]).e(Error::UnknownByteOrder([b0, b1]))
    }

    pub fn read_magic_42(raw: Raw) -> Result<()> {
        match raw.read_u16(2)? {
            42 => Ok(()),
            magic => Err(Error::MagicBytesWrong(magic)),
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.raw.byte_order
    }

    /// Read a single entry from the first IFD
    pub fn read_entry(&self, index: u16) -> Result<EntryRef> {
        let ifd_offset = self.ifd_offset;
        let n = usize::from(index);
        checked![n];
        let position = (n * ENTRY_SIZE + 2_usize + ifd_offset).check()?;

        let entry: [u8; ENTRY_SIZE] = self
            .raw
            .read_exact(position)
            .e(Error::EntryEof(index))?;
        let [t0, t1, d0, d1, c0, c1, c2, c3, v0, v1, v2, v3] = entry;
        let byte_order = self.byte_order();

        Ok(EntryRef {
            position,
            tag: Tag(byte_order.u16([t0, t1])),
            data_type: Type::from(byte_order.u16([d0, d1])),
            count: byte_order.u32([c0, c1, c2, c3]),
            value_offset: [v0, v1, v2, v3],
            byte_order,
        })
    }

    /// All entries of the first IFD in the order of appearance
    ///
    /// Yields an error and stops at the first entry that exceeds the data.
    pub fn entries(&self) -> impl Iterator<Item = Result<EntryRef>> + '_ {
        let mut failed = false;
        (0..self.n_entries).map_while(move |index| {
            if failed {
                return None;
            }
            let entry = self.read_entry(index);
            failed = entry.is_err();
            Some(entry)
        })
    }
}
