mod error;

pub use error::Error;
use upright_common::prelude::*;

pub const EXIF_IDENTIFIER_STRING: &[u8] = b"Exif\0\0";

pub const MARKER_START: u8 = 0xFF;
pub const MAGIC_BYTES: &[u8] = &[MARKER_START, 0xD8];

/// Shortest APP1 segment that is inspected for Exif data, including the
/// length field
pub const APP1_MIN_LENGTH: usize = 8;

#[derive(Clone, Copy, Debug)]
pub struct Segment<'a> {
    marker: Marker,
    pos: usize,
    data: &'a [u8],
}

impl<'a> Segment<'a> {
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Position of the length field, directly after the marker
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn data_pos(&self) -> usize {
        if self.marker.is_terminal() {
            self.pos
        } else {
            self.pos.saturating_add(2)
        }
    }

    /// Segment payload without marker and length field
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// APP1 segment that starts with [`EXIF_IDENTIFIER_STRING`]
    pub fn is_exif(&self) -> bool {
        self.marker == Marker::APP1
            && self.data.len() >= APP1_MIN_LENGTH
            && self.data.starts_with(EXIF_IDENTIFIER_STRING)
    }
}

/// Borrowed view of JPEG data
#[derive(Clone, Copy, Debug)]
pub struct Jpeg<'a> {
    data: &'a [u8],
}

impl<'a> Jpeg<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        if Self::is_filetype(data) {
            Ok(Self { data })
        } else {
            Err(Error::NoSoiMarker)
        }
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Iterate segments in their order of appearance
    ///
    /// Iteration ends after the start of scan or end of image marker, when
    /// too few bytes for another marker are left, or after the first error.
    pub fn segments(&self) -> Segments<'a> {
        Segments {
            data: self.data,
            pos: MAGIC_BYTES.len(),
            done: false,
        }
    }

    /// First APP1 segment with Exif data
    ///
    /// Segments behind a malformed segment are not reachable and the error is
    /// returned instead.
    pub fn exif(&self) -> Result<Option<Segment<'a>>, Error> {
        for segment in self.segments() {
            let segment = segment?;
            if segment.is_exif() {
                return Ok(Some(segment));
            }
        }

        Ok(None)
    }

    /// Exif data of the first Exif segment, starting with the TIFF header
    pub fn exif_data(&self) -> Result<Option<&'a [u8]>, Error> {
        Ok(self
            .exif()?
            .and_then(|x| x.data().get(EXIF_IDENTIFIER_STRING.len()..)))
    }
}

impl ImageFormat for Jpeg<'_> {
    fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(MAGIC_BYTES)
    }
}

/// Iterator over segments, see [`Jpeg::segments`]
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    data: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> Segments<'a> {
    fn next_segment(&mut self) -> Result<Option<Segment<'a>>, Error> {
        loop {
            let header_end = self.pos.safe_add(4)?;
            // Marker and length field have to be available, even for markers
            // that don't have a length field
            let Some(&[start, marker, length_0, length_1]) = self.data.get(self.pos..header_end)
            else {
                tracing::debug!("No complete marker left at byte {}", self.pos);
                return Ok(None);
            };

            if start != MARKER_START {
                self.pos = self.pos.safe_add(1)?;
                continue;
            }

            let marker = Marker::from(marker);
            let pos = self.pos.safe_add(2)?;

            if marker.is_terminal() {
                tracing::debug!("Reached {marker:?} at byte {}", self.pos);
                self.pos = pos;
                return Ok(Some(Segment {
                    marker,
                    pos,
                    data: &[],
                }));
            }

            let length = usize::from(u16::from_be_bytes([length_0, length_1]));
            let minimum = marker.min_length();
            if length < minimum {
                return Err(Error::SegmentTooShort {
                    marker,
                    pos,
                    length,
                    minimum,
                });
            }

            let end = pos.safe_add(length)?;
            let data = self
                .data
                .get(header_end..end)
                .ok_or(Error::SegmentOverrun {
                    marker,
                    pos,
                    length,
                })?;

            tracing::debug!("Segment {marker:?} at byte {pos} with length {length}");
            self.pos = end;

            return Ok(Some(Segment { marker, pos, data }));
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<Segment<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.next_segment();
        if !matches!(&result, Ok(Some(segment)) if !segment.marker.is_terminal()) {
            self.done = true;
        }

        result.transpose()
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

upright_common::utils::convertible_enum!(
    #[repr(u8)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Marker {
        SOF0 = 0xC0,
        SOF1 = 0xC1,
        SOF2 = 0xC2,
        /// Define Huffman table
        DHT = 0xC4,
        /// Start of image
        SOI = 0xD8,
        /// End of image
        EOI = 0xD9,
        /// Start of scan
        SOS = 0xDA,
        DQT = 0xDB,
        /// Define restart interval
        DRI = 0xDD,
        /// JFIF
        APP0 = 0xE0,
        /// Exif, XMP
        APP1 = 0xE1,
        /// ICC color profile
        APP2 = 0xE2,
        APP3 = 0xE3,
        APP4 = 0xE4,
        APP5 = 0xE5,
        APP6 = 0xE6,
        APP7 = 0xE7,
        APP8 = 0xE8,
        APP9 = 0xE9,
        APP10 = 0xEA,
        APP11 = 0xEB,
        APP12 = 0xEC,
        /// IPTC
        APP13 = 0xED,
        /// Adobe
        APP14 = 0xEE,
        APP15 = 0xEF,
        /// Comment
        COM = 0xFE,
    }
);

impl Marker {
    /// No metadata segments follow this marker
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::SOS | Self::EOI)
    }

    /// Smallest accepted value of the length field
    pub fn min_length(self) -> usize {
        match self {
            Self::APP1 => APP1_MIN_LENGTH,
            _ => 2,
        }
    }
}
