use upright_common::orientation::Orientation;
use upright_exif::Exif;
use upright_jpeg::Jpeg;

use crate::Error;

/// Orientation stored in the Exif data of a JPEG image
///
/// Never fails. Data that are not JPEG, have no Exif segment, or are
/// malformed give [`Orientation::Id`]. Only the first Exif segment is
/// considered.
pub fn scan(data: &[u8]) -> Orientation {
    match exif_orientation(data) {
        Ok(orientation) => orientation,
        Err(err) => {
            tracing::debug!("No orientation available: {err}");
            Orientation::Id
        }
    }
}

/// Exif orientation code in the range 1 to 8, see [`scan`]
pub fn scan_code(data: &[u8]) -> u16 {
    scan(data).exif_code()
}

fn exif_orientation(data: &[u8]) -> Result<Orientation, Error> {
    let jpeg = Jpeg::new(data)?;

    let Some(exif_data) = jpeg.exif_data()? else {
        tracing::debug!("No Exif segment found");
        return Ok(Orientation::Id);
    };

    Ok(Exif::new(exif_data)?.orientation())
}
