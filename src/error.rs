use thiserror::Error;

use crate::plane::Plane;

/// Errors raised by the volume index model.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VolumeError {
    #[error("Volume axis {axis} has no samples")]
    EmptyAxis { axis: usize },
    #[error("Index {index} is outside the {plane} axis (length {len})")]
    IndexOutOfRange { plane: Plane, index: usize, len: usize },
}

/// Errors raised while reading names and events from user text.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown plane '{0}' (expected transverse, sagittal or coronal)")]
    UnknownPlane(String),
    #[error("Unknown palette '{0}'")]
    UnknownPalette(String),
    #[error("Unknown crosshair color '{0}'")]
    UnknownColor(String),
    #[error("Invalid event '{0}'")]
    InvalidEvent(String),
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
}

/// Errors raised while loading or exporting nifti data.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Nifti(#[from] nifti::error::NiftiError),
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
    #[error(transparent)]
    Volume(#[from] VolumeError),
    #[error("Input nifti file must be 3D or 4D, found {0} dimensions")]
    Dimensions(usize),
    #[error("Timepoint {timepoint} requested but the file only has {len} volumes")]
    Timepoint { timepoint: usize, len: usize },
    #[error("Slice files must be 2D, '{0}' is not")]
    NotASlice(String),
    #[error("Slice '{path}' has shape {found:?}, expected {expected:?}")]
    SliceShape {
        path: String,
        found: Vec<usize>,
        expected: Vec<usize>,
    },
    #[error("Did not find any files matching '{0}'")]
    NoMatches(String),
}
