//! Exif orientation for JPEG images
//!
//! [`scan`] finds the orientation in the raw bytes of an image and [`correct`]
//! applies it to the decoded pixels.
//!
//! ```
//! let data = [0xFF, 0xD8, 0xFF, 0xD9, 0x00, 0x00];
//! assert_eq!(upright::scan_code(&data), 1);
//! ```

mod correct;
mod scan;

pub use correct::{correct, correct_code, load_oriented};
pub use scan::{scan, scan_code};
pub use upright_common::orientation::{Orientation, Rotation};

static_assertions::assert_impl_all!(Orientation: Send, Sync, Copy);
static_assertions::assert_impl_all!(upright_jpeg::Segment<'static>: Send, Sync, Copy);

pub mod jpeg {
    pub use upright_jpeg::*;
}

pub mod exif {
    pub use upright_exif::*;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JPEG: {0}")]
    Jpeg(#[from] upright_jpeg::Error),
    #[error("Exif: {0}")]
    Exif(#[from] upright_exif::error::Error),
    #[error("Image: {0}")]
    Image(#[from] image::ImageError),
}
