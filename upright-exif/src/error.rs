use upright_common::math::MathError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("TIFF header needs 8 bytes, got {0}")]
    HeaderEof(usize),
    #[error("Unknown byte order {0:x?}")]
    UnknownByteOrder([u8; 2]),
    #[error("Magic bytes should be 42, got {0}")]
    MagicBytesWrong(u16),
    #[error("IFD offset {0} points outside of the data")]
    IfdOffsetInvalid(u32),
    #[error("IFD entry {0} exceeds the data")]
    EntryEof(u16),
    #[error("Reading {len} bytes at {pos} exceeds the data")]
    Eof { pos: usize, len: usize },
    #[error("Math: {0}")]
    Math(#[from] MathError),
}

pub(crate) trait ResultExt<T> {
    fn e(self, err: Error) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E> {
    fn e(self, err: Error) -> Result<T> {
        self.map_err(|_| err)
    }
}

impl<T> ResultExt<T> for Option<T> {
    fn e(self, err: Error) -> Result<T> {
        match self {
            Some(v) => Ok(v),
            None => Err(err),
        }
    }
}
