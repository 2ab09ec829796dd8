#![deny(missing_docs)]
//! Image container types for the chromatize colorization pipeline.

/// image representation for colorization purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// operations on image pixel data.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
