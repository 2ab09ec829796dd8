//! The colorization pipeline: normalize, reduce to intensity, colorize.
//!
//! Every operation here is a pure function over its inputs; repeated calls
//! with identical inputs yield bit-identical outputs.

use std::collections::HashMap;

use chromatize_image::{Image, ImageError};

use crate::color;
use crate::colormap;
use crate::normalize;

/// Input to the colorization pipeline: a single-channel intensity image or
/// a three-channel RGB image, in any numeric range.
///
/// The channel count is part of the type, so images with any other channel
/// count cannot reach the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum GrayOrRgb {
    /// A single-channel intensity image.
    Gray(Image<f32, 1>),
    /// A three-channel RGB image.
    Rgb(Image<f32, 3>),
}

impl From<Image<f32, 1>> for GrayOrRgb {
    fn from(image: Image<f32, 1>) -> Self {
        GrayOrRgb::Gray(image)
    }
}

impl From<Image<f32, 3>> for GrayOrRgb {
    fn from(image: Image<f32, 3>) -> Self {
        GrayOrRgb::Rgb(image)
    }
}

/// Normalize the input and reduce it to a single intensity channel.
///
/// Grayscale inputs are normalized into an independent copy; RGB inputs are
/// normalized and then reduced with the perceptual luminance weighting.
fn intensity_of(src: &GrayOrRgb) -> Result<Image<f32, 1>, ImageError> {
    match src {
        GrayOrRgb::Gray(image) => {
            let mut intensity = Image::from_size_val(image.size(), 0.0)?;
            normalize::normalize_unit_range(image, &mut intensity)?;
            Ok(intensity)
        }
        GrayOrRgb::Rgb(image) => {
            let mut normalized = Image::from_size_val(image.size(), 0.0)?;
            normalize::normalize_unit_range(image, &mut normalized)?;

            let mut intensity = Image::from_size_val(image.size(), 0.0)?;
            color::gray_from_rgb(&normalized, &mut intensity)?;
            Ok(intensity)
        }
    }
}

/// Absorb rounding error from the per-pixel arithmetic.
fn clamp_unit(image: &mut Image<f32, 3>) {
    image
        .as_slice_mut()
        .iter_mut()
        .for_each(|v| *v = v.clamp(0.0, 1.0));
}

/// Colorize an image using the fixed HSV intensity curves.
///
/// Dark regions map to blue, bright regions to yellow, with saturation
/// peaking at mid-tones. Equivalent to [`colorize_hsv_advanced`] with
/// `hue_shift = 0.0` and `saturation_boost = 1.0`.
///
/// # Arguments
///
/// * `src` - The input image, grayscale or RGB, in any numeric range.
///
/// # Returns
///
/// The colorized RGB image with samples in [0, 1].
///
/// # Errors
///
/// Returns an error if the input image is empty.
///
/// # Example
///
/// ```
/// use chromatize_image::{Image, ImageSize};
/// use chromatize_imgproc::colorize::{colorize_hsv, GrayOrRgb};
///
/// let image = Image::<f32, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![64.0, 192.0],
/// )
/// .unwrap();
///
/// let rgb = colorize_hsv(&GrayOrRgb::Gray(image)).unwrap();
/// assert_eq!(rgb.num_channels(), 3);
/// ```
pub fn colorize_hsv(src: &GrayOrRgb) -> Result<Image<f32, 3>, ImageError> {
    colorize_hsv_advanced(src, 0.0, 1.0)
}

/// Colorize an image using the HSV intensity curves with adjustable
/// parameters.
///
/// # Arguments
///
/// * `src` - The input image, grayscale or RGB, in any numeric range.
/// * `hue_shift` - Additive hue offset, applied modulo 1; any real value.
/// * `saturation_boost` - Multiplicative saturation factor, non-negative;
///   the resulting saturation is clamped to [0, 1].
///
/// # Returns
///
/// The colorized RGB image with samples in [0, 1].
///
/// # Errors
///
/// Returns an error if the input image is empty.
pub fn colorize_hsv_advanced(
    src: &GrayOrRgb,
    hue_shift: f32,
    saturation_boost: f32,
) -> Result<Image<f32, 3>, ImageError> {
    let intensity = intensity_of(src)?;

    let mut hsv = Image::from_size_val(intensity.size(), 0.0)?;
    color::hsv_from_intensity(&intensity, &mut hsv, hue_shift, saturation_boost)?;

    let mut rgb = Image::from_size_val(intensity.size(), 0.0)?;
    color::rgb_from_hsv(&hsv, &mut rgb)?;

    clamp_unit(&mut rgb);
    Ok(rgb)
}

/// Colorize an image by mapping its intensity through a named colormap.
///
/// Unknown names fall back to [`colormap::DEFAULT_COLORMAP`] with a logged
/// warning; the call itself never fails for an unknown name.
///
/// # Arguments
///
/// * `src` - The input image, grayscale or RGB, in any numeric range.
/// * `colormap_name` - The colormap name, matched case-insensitively.
///
/// # Returns
///
/// The colorized RGB image with samples in [0, 1].
///
/// # Errors
///
/// Returns an error if the input image is empty.
///
/// # Example
///
/// ```
/// use chromatize_image::{Image, ImageSize};
/// use chromatize_imgproc::colorize::{colorize_pseudocolor, GrayOrRgb};
///
/// let image = Image::<f32, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![0.0, 255.0],
/// )
/// .unwrap();
///
/// let rgb = colorize_pseudocolor(&GrayOrRgb::Gray(image), "hot").unwrap();
/// assert_eq!(rgb.as_slice(), &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
/// ```
pub fn colorize_pseudocolor(
    src: &GrayOrRgb,
    colormap_name: &str,
) -> Result<Image<f32, 3>, ImageError> {
    let intensity = intensity_of(src)?;
    let cmap = colormap::resolve_or_default(colormap_name);

    let mut rgb = Image::from_size_val(intensity.size(), 0.0)?;
    colormap::apply_colormap(&intensity, &mut rgb, cmap)?;

    clamp_unit(&mut rgb);
    Ok(rgb)
}

/// Colorize an image with several colormaps in one call.
///
/// Each name is handled by an independent [`colorize_pseudocolor`]
/// invocation; the order of `colormap_names` does not affect the results.
/// Pass [`colormap::DEFAULT_COLORMAPS`] for the stock four-map selection.
///
/// # Arguments
///
/// * `src` - The input image, grayscale or RGB, in any numeric range.
/// * `colormap_names` - The colormap names to apply.
///
/// # Returns
///
/// A map from each requested name to its colorized RGB image.
///
/// # Errors
///
/// Returns an error if the input image is empty.
pub fn colorize_pseudocolor_multiple(
    src: &GrayOrRgb,
    colormap_names: &[&str],
) -> Result<HashMap<String, Image<f32, 3>>, ImageError> {
    let mut results = HashMap::with_capacity(colormap_names.len());

    for &name in colormap_names {
        results.insert(name.to_string(), colorize_pseudocolor(src, name)?);
    }

    Ok(results)
}

/// The names of the registered colormaps, in registry order.
///
/// # Example
///
/// ```
/// let names = chromatize_imgproc::colorize::list_available_colormaps();
/// assert!(names.contains(&"jet"));
/// assert!(names.contains(&"viridis"));
/// ```
pub fn list_available_colormaps() -> Vec<&'static str> {
    colormap::names()
}

#[cfg(test)]
mod tests {
    use super::GrayOrRgb;
    use crate::colormap::DEFAULT_COLORMAPS;
    use chromatize_image::{Image, ImageError, ImageSize};

    fn gray_ramp_8bit() -> Result<GrayOrRgb, ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![0.0, 127.5, 255.0],
        )?;
        Ok(GrayOrRgb::Gray(image))
    }

    #[test]
    fn colorize_hsv_output_in_unit_range() -> Result<(), ImageError> {
        let src = gray_ramp_8bit()?;
        let rgb = super::colorize_hsv(&src)?;

        assert_eq!(rgb.num_channels(), 3);
        for v in rgb.as_slice() {
            assert!((0.0..=1.0).contains(v));
        }

        Ok(())
    }

    #[test]
    fn colorize_hsv_extremes_stay_achromatic() -> Result<(), ImageError> {
        let src = gray_ramp_8bit()?;
        let rgb = super::colorize_hsv(&src)?;

        // zero saturation at both ends: black stays black, white stays white
        assert_eq!(&rgb.as_slice()[..3], &[0.0, 0.0, 0.0]);
        for v in &rgb.as_slice()[6..] {
            assert!((v - 1.0).abs() < 1e-6);
        }

        Ok(())
    }

    #[test]
    fn colorize_hsv_advanced_full_shift_matches_basic() -> Result<(), ImageError> {
        let src = gray_ramp_8bit()?;

        let basic = super::colorize_hsv(&src)?;
        let shifted = super::colorize_hsv_advanced(&src, 1.0, 1.0)?;

        // a full turn of the hue circle reproduces the basic output exactly
        assert_eq!(basic, shifted);

        Ok(())
    }

    #[test]
    fn colorize_hsv_advanced_boost_stays_in_range() -> Result<(), ImageError> {
        let src = gray_ramp_8bit()?;
        let rgb = super::colorize_hsv_advanced(&src, 0.2, 25.0)?;

        for v in rgb.as_slice() {
            assert!((0.0..=1.0).contains(v));
        }

        Ok(())
    }

    #[test]
    fn colorize_hsv_reduces_rgb_input() -> Result<(), ImageError> {
        // a gray RGB image and the equivalent intensity image colorize the same
        let rgb_input = Image::<f32, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![64.0, 64.0, 64.0, 192.0, 192.0, 192.0],
        )?;
        let gray_input = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![64.0, 192.0],
        )?;

        let from_rgb = super::colorize_hsv(&GrayOrRgb::Rgb(rgb_input))?;
        let from_gray = super::colorize_hsv(&GrayOrRgb::Gray(gray_input))?;

        for (a, b) in from_rgb.as_slice().iter().zip(from_gray.as_slice().iter()) {
            assert!((a - b).abs() < 1e-5);
        }

        Ok(())
    }

    #[test]
    fn colorize_pseudocolor_is_deterministic() -> Result<(), ImageError> {
        let src = gray_ramp_8bit()?;

        let first = super::colorize_pseudocolor(&src, "viridis")?;
        let second = super::colorize_pseudocolor(&src, "viridis")?;

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn colorize_pseudocolor_unknown_name_falls_back() -> Result<(), ImageError> {
        let src = gray_ramp_8bit()?;

        let fallback = super::colorize_pseudocolor(&src, "not-a-real-colormap")?;
        let jet = super::colorize_pseudocolor(&src, "jet")?;

        assert_eq!(fallback, jet);

        Ok(())
    }

    #[test]
    fn colorize_pseudocolor_multiple_matches_single_calls() -> Result<(), ImageError> {
        let src = gray_ramp_8bit()?;

        let results = super::colorize_pseudocolor_multiple(&src, &["jet", "hot"])?;

        assert_eq!(results.len(), 2);
        assert_eq!(results["jet"], super::colorize_pseudocolor(&src, "jet")?);
        assert_eq!(results["hot"], super::colorize_pseudocolor(&src, "hot")?);

        Ok(())
    }

    #[test]
    fn colorize_pseudocolor_multiple_default_set() -> Result<(), ImageError> {
        let src = gray_ramp_8bit()?;

        let results = super::colorize_pseudocolor_multiple(&src, &DEFAULT_COLORMAPS)?;

        assert_eq!(results.len(), 4);
        for name in DEFAULT_COLORMAPS {
            assert!(results.contains_key(name));
        }

        Ok(())
    }

    #[test]
    fn empty_input_is_rejected() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 0,
                height: 0,
            },
            vec![],
        )?;
        let src = GrayOrRgb::Gray(image);

        let res = super::colorize_hsv(&src);
        assert_eq!(res.unwrap_err(), ImageError::ImageDataNotInitialized);

        let res = super::colorize_pseudocolor(&src, "jet");
        assert_eq!(res.unwrap_err(), ImageError::ImageDataNotInitialized);

        // zero width with nonzero height is just as empty
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 0,
                height: 2,
            },
            vec![],
        )?;
        let src = GrayOrRgb::Rgb(image);

        let res = super::colorize_hsv(&src);
        assert_eq!(res.unwrap_err(), ImageError::ImageDataNotInitialized);

        Ok(())
    }

    #[test]
    fn list_available_colormaps() {
        let names = super::list_available_colormaps();

        assert!(!names.is_empty());
        for required in ["jet", "hot", "viridis"] {
            assert!(names.contains(&required));
        }

        // registry order is stable across calls
        assert_eq!(names, super::list_available_colormaps());
    }
}
