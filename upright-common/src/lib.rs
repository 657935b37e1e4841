pub mod exif;
pub mod image;
pub mod math;
pub mod orientation;
pub mod utils;

pub mod prelude {
    pub use crate::image::ImageFormat;
    pub use crate::math::{SafeAdd, SafeMul, ToUsize};
}
