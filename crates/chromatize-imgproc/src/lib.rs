#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// pseudocolor lookup tables module.
pub mod colormap;

/// the colorization pipeline module.
pub mod colorize;

/// operations to normalize images.
pub mod normalize;

/// module containing parallelization utilities.
pub mod parallel;
