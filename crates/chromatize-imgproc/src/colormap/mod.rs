//! Pseudocolor lookup tables and the intensity-to-RGB mapping kernel.
//!
//! The registry is a `static` table built into the binary: it is never
//! mutated, so concurrent lookups need no locking.

mod tables;

use crate::parallel;
use chromatize_image::{Image, ImageError};

/// Name of the table substituted for unknown colormap names.
pub const DEFAULT_COLORMAP: &str = "jet";

/// The stock selection used by the batch colorization when the caller has
/// no preference.
pub const DEFAULT_COLORMAPS: [&str; 4] = ["jet", "hot", "viridis", "plasma"];

/// A named, immutable colormap: a monotonic function from intensity in
/// [0, 1] to an RGB triple in [0, 1]^3, stored as evenly spaced anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colormap {
    name: &'static str,
    anchors: &'static [[f32; 3]],
}

impl Colormap {
    /// The registered name of this colormap.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Map an intensity in [0, 1] to an RGB triple.
    ///
    /// The intensity is clamped to [0, 1], then linearly interpolated
    /// between the two anchors bracketing it.
    ///
    /// # Example
    ///
    /// ```
    /// use chromatize_imgproc::colormap;
    ///
    /// let jet = colormap::lookup("jet").unwrap();
    /// assert_eq!(jet.sample(0.0), [0.0, 0.0, 0.5]);
    /// assert_eq!(jet.sample(1.0), [0.5, 0.0, 0.0]);
    /// ```
    pub fn sample(&self, t: f32) -> [f32; 3] {
        let t = t.clamp(0.0, 1.0);
        let last = self.anchors.len() - 1;

        let pos = t * last as f32;
        let idx = (pos.floor() as usize).min(last - 1);
        let frac = pos - idx as f32;

        let lo = self.anchors[idx];
        let hi = self.anchors[idx + 1];

        [
            lo[0] + (hi[0] - lo[0]) * frac,
            lo[1] + (hi[1] - lo[1]) * frac,
            lo[2] + (hi[2] - lo[2]) * frac,
        ]
    }
}

/// The built-in colormaps, in registry order. "parula" shares the viridis
/// table, its closest widely available stand-in.
static COLORMAPS: [Colormap; 17] = [
    Colormap {
        name: "jet",
        anchors: &tables::JET,
    },
    Colormap {
        name: "hot",
        anchors: &tables::HOT,
    },
    Colormap {
        name: "cool",
        anchors: &tables::COOL,
    },
    Colormap {
        name: "viridis",
        anchors: &tables::VIRIDIS,
    },
    Colormap {
        name: "parula",
        anchors: &tables::VIRIDIS,
    },
    Colormap {
        name: "plasma",
        anchors: &tables::PLASMA,
    },
    Colormap {
        name: "inferno",
        anchors: &tables::INFERNO,
    },
    Colormap {
        name: "magma",
        anchors: &tables::MAGMA,
    },
    Colormap {
        name: "spring",
        anchors: &tables::SPRING,
    },
    Colormap {
        name: "summer",
        anchors: &tables::SUMMER,
    },
    Colormap {
        name: "autumn",
        anchors: &tables::AUTUMN,
    },
    Colormap {
        name: "winter",
        anchors: &tables::WINTER,
    },
    Colormap {
        name: "rainbow",
        anchors: &tables::RAINBOW,
    },
    Colormap {
        name: "turbo",
        anchors: &tables::TURBO,
    },
    Colormap {
        name: "hsv",
        anchors: &tables::HSV_WHEEL,
    },
    Colormap {
        name: "seismic",
        anchors: &tables::SEISMIC,
    },
    Colormap {
        name: "terrain",
        anchors: &tables::TERRAIN,
    },
];

/// Look up a colormap by name, case-insensitively.
pub fn lookup(name: &str) -> Option<&'static Colormap> {
    COLORMAPS.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Resolve a colormap name, falling back to [`DEFAULT_COLORMAP`].
///
/// Unknown names are reported with a warning and never fail the call.
pub fn resolve_or_default(name: &str) -> &'static Colormap {
    match lookup(name) {
        Some(cmap) => cmap,
        None => {
            log::warn!("unknown colormap '{name}', using '{DEFAULT_COLORMAP}' instead");
            lookup(DEFAULT_COLORMAP).unwrap_or(&COLORMAPS[0])
        }
    }
}

/// The registered colormap names, in registry order.
pub fn names() -> Vec<&'static str> {
    COLORMAPS.iter().map(|c| c.name).collect()
}

/// Map an intensity image to RGB through a colormap.
///
/// # Arguments
///
/// * `src` - The input intensity image with values in [0, 1].
/// * `dst` - The output RGB image with values in [0, 1].
/// * `cmap` - The colormap to sample.
///
/// Precondition: the input and output images must have the same size.
///
/// # Errors
///
/// Returns an error if the images differ in size or contain no pixel data.
///
/// # Example
///
/// ```
/// use chromatize_image::{Image, ImageSize};
/// use chromatize_imgproc::colormap::{self, apply_colormap};
///
/// let image = Image::<f32, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![0.0, 1.0],
/// )
/// .unwrap();
///
/// let mut rgb = Image::<f32, 3>::from_size_val(image.size(), 0.0).unwrap();
///
/// let hot = colormap::lookup("hot").unwrap();
/// apply_colormap(&image, &mut rgb, hot).unwrap();
/// assert_eq!(rgb.as_slice(), &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
/// ```
pub fn apply_colormap(
    src: &Image<f32, 1>,
    dst: &mut Image<f32, 3>,
    cmap: &Colormap,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    if src.as_slice().is_empty() {
        return Err(ImageError::ImageDataNotInitialized);
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let rgb = cmap.sample(src_pixel[0]);
        dst_pixel.copy_from_slice(&rgb);
    });

    Ok(())
}
