/// Tag id of an IFD entry
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Tag(pub u16);

impl Tag {
    /// Orientation of the stored pixels relative to the camera
    ///
    /// Stored as SHORT with count 1 in the primary IFD.
    pub const ORIENTATION: Self = Self(0x0112);
}

/// Byte order of a TIFF structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// `II`
    LittleEndian,
    /// `MM`
    BigEndian,
}

impl ByteOrder {
    /// Byte order from the first two bytes of a TIFF header
    ///
    /// ```
    /// # use upright_common::exif::ByteOrder;
    /// assert_eq!(ByteOrder::from_marker(*b"II"), Some(ByteOrder::LittleEndian));
    /// assert_eq!(ByteOrder::from_marker(*b"MM"), Some(ByteOrder::BigEndian));
    /// assert_eq!(ByteOrder::from_marker(*b"IM"), None);
    /// ```
    pub fn from_marker(marker: [u8; 2]) -> Option<Self> {
        match &marker {
            b"II" => Some(Self::LittleEndian),
            b"MM" => Some(Self::BigEndian),
            _ => None,
        }
    }

    pub fn u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::LittleEndian => u16::from_le_bytes(bytes),
            Self::BigEndian => u16::from_be_bytes(bytes),
        }
    }

    pub fn u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::LittleEndian => u32::from_le_bytes(bytes),
            Self::BigEndian => u32::from_be_bytes(bytes),
        }
    }
}
