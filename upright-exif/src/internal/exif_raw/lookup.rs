use super::*;

impl super::ExifRaw<'_> {
    /// First entry in the first IFD with the given tag
    ///
    /// Entries after the match are not read. Later duplicates are ignored.
    pub fn lookup_entry(&self, tag: Tag) -> Result<Option<EntryRef>> {
        for entry in self.entries() {
            let entry = entry?;
            if entry.tag == tag {
                return Ok(Some(entry));
            }
        }

        Ok(None)
    }

    /// Value of a SHORT entry
    ///
    /// Entries with another type or count are read as SHORT as well since
    /// some writers don't follow the standard.
    pub fn lookup_short(&self, tag: Tag) -> Result<Option<u16>> {
        let Some(entry) = self.lookup_entry(tag)? else {
            return Ok(None);
        };

        if !entry.is_single_short() {
            tracing::debug!(
                "Entry {tag:?} has type {:?} and count {}, reading as SHORT",
                entry.data_type,
                entry.count
            );
        }

        Ok(Some(entry.short()))
    }
}
