use image::metadata::Orientation as ImageOrientation;
use image::DynamicImage;
use upright_common::orientation::Orientation;

use crate::Error;

/// Apply the correction for `orientation` to a decoded image
///
/// The pixel format of the image is kept.
pub fn correct(mut image: DynamicImage, orientation: Orientation) -> DynamicImage {
    if orientation != Orientation::Id {
        tracing::debug!("Correcting orientation: {orientation}");
        image.apply_orientation(image_orientation(orientation));
    }

    image
}

/// Same as [`correct`] for an Exif orientation code
///
/// Codes outside of 1 to 8 leave the image unchanged.
pub fn correct_code(image: DynamicImage, code: u16) -> DynamicImage {
    correct(image, Orientation::from_exif(code))
}

/// Decode an image and correct its orientation
///
/// The format is guessed from the data. Only formats enabled via crate
/// features can be decoded.
pub fn load_oriented(data: &[u8]) -> Result<DynamicImage, Error> {
    let image = image::load_from_memory(data)?;

    Ok(correct(image, crate::scan(data)))
}

/// The `image` crate describes the same transforms with clockwise rotations
fn image_orientation(orientation: Orientation) -> ImageOrientation {
    match orientation {
        Orientation::Id => ImageOrientation::NoTransforms,
        Orientation::Mirrored => ImageOrientation::FlipHorizontal,
        Orientation::Rotation180 => ImageOrientation::Rotate180,
        Orientation::MirroredRotation180 => ImageOrientation::FlipVertical,
        Orientation::MirroredRotation90 => ImageOrientation::Rotate90FlipH,
        Orientation::Rotation270 => ImageOrientation::Rotate90,
        Orientation::MirroredRotation270 => ImageOrientation::Rotate270FlipH,
        Orientation::Rotation90 => ImageOrientation::Rotate270,
    }
}
