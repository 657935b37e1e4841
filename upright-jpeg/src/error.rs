use upright_common::math::MathError;

use crate::Marker;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("Data do not start with a JPEG SOI marker")]
    NoSoiMarker,
    #[error("Segment {marker:?} at byte {pos} has length {length}, minimum is {minimum}")]
    SegmentTooShort {
        marker: Marker,
        pos: usize,
        length: usize,
        minimum: usize,
    },
    #[error("Segment {marker:?} at byte {pos} with length {length} exceeds the data")]
    SegmentOverrun {
        marker: Marker,
        pos: usize,
        length: usize,
    },
    #[error("Math: {0}")]
    Math(#[from] MathError),
}
