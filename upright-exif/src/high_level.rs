use upright_common::exif::Tag;
use upright_common::orientation::Orientation;

use crate::error::Result;
use crate::internal::*;

#[derive(Debug, Clone, Copy)]
pub struct Exif<'a> {
    decoder: ExifRaw<'a>,
}

impl<'a> Exif<'a> {
    /// Exif data starting with the TIFF header
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let decoder = ExifRaw::new(data)?;

        Ok(Self { decoder })
    }

    pub fn raw(&self) -> &ExifRaw<'a> {
        &self.decoder
    }

    /// Image orientation
    ///
    /// Rotation and mirroring that have to be applied to show the image
    /// correctly. Missing, unreadable, or invalid values give
    /// [`Orientation::Id`].
    pub fn orientation(&self) -> Orientation {
        match self.decoder.lookup_short(Tag::ORIENTATION) {
            Ok(Some(code)) => {
                let orientation = Orientation::try_from(code);
                if let Err(err) = &orientation {
                    tracing::info!("Ignoring orientation: {err}");
                }
                orientation.unwrap_or_default()
            }
            Ok(None) => Orientation::Id,
            Err(err) => {
                tracing::info!("Failed to look up orientation: {err}");
                Orientation::Id
            }
        }
    }
}
