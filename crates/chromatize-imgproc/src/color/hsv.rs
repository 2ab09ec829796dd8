use crate::parallel;
use chromatize_image::{Image, ImageError};

/// Base hue at zero intensity, the blue region of the hue circle.
const HUE_DARK: f32 = 0.6;

/// Slope of the intensity-to-hue gradient; full intensity lands at 0.15,
/// the yellow region.
const HUE_SLOPE: f32 = 0.45;

/// Derive an HSV image from an intensity image using fixed analytic curves.
///
/// Per pixel with intensity `i` in [0, 1]:
///
/// * H = (0.6 - 0.45 * i + hue_shift) mod 1.0 — dark maps to blue, bright
///   to yellow.
/// * S = clamp(4 * i * (1 - i) * saturation_boost, 0, 1) — a parabola
///   peaking at mid-tones; the boost may push it past 1, hence the clamp.
/// * V = i — the intensity is kept as brightness.
///
/// # Arguments
///
/// * `src` - The input intensity image with values in [0, 1].
/// * `dst` - The output HSV image with channels in [0, 1].
/// * `hue_shift` - Additive hue offset, applied modulo 1; any real value.
///   The shift is reduced modulo 1 up front, so whole-turn shifts
///   reproduce the unshifted output exactly.
/// * `saturation_boost` - Multiplicative saturation factor, non-negative.
///
/// Precondition: the input and output images must have the same size.
///
/// # Errors
///
/// Returns an error if the images differ in size or contain no pixel data.
pub fn hsv_from_intensity(
    src: &Image<f32, 1>,
    dst: &mut Image<f32, 3>,
    hue_shift: f32,
    saturation_boost: f32,
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

    // reduce the shift first: a whole-turn shift becomes exactly 0.0 and
    // cannot perturb the rounding of the per-pixel hue expression
    let hue_shift = hue_shift.rem_euclid(1.0);

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let i = src_pixel[0];

        // rem_euclid keeps the hue in [0, 1) for negative shifts as well
        dst_pixel[0] = (HUE_DARK - HUE_SLOPE * i + hue_shift).rem_euclid(1.0);
        dst_pixel[1] = (4.0 * i * (1.0 - i) * saturation_boost).clamp(0.0, 1.0);
        dst_pixel[2] = i;
    });

    Ok(())
}

/// Convert an HSV image to an RGB image.
///
/// The input image is assumed to have 3 channels in the order H, S, V, each
/// in [0, 1]. The hue is circular and wraps modulo 1.0. The conversion is
/// the standard hexagonal one with six 60-degree sectors.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use chromatize_image::{Image, ImageSize};
/// use chromatize_imgproc::color::rgb_from_hsv;
///
/// let hsv = Image::<f32, 3>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![0.0, 1.0, 1.0],
/// )
/// .unwrap();
///
/// let mut rgb = Image::<f32, 3>::from_size_val(hsv.size(), 0.0).unwrap();
///
/// rgb_from_hsv(&hsv, &mut rgb).unwrap();
/// assert_eq!(rgb.as_slice(), &[1.0, 0.0, 0.0]);
/// ```
pub fn rgb_from_hsv(src: &Image<f32, 3>, dst: &mut Image<f32, 3>) -> Result<(), ImageError> {
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
        let rgb = hsv_pixel_to_rgb(src_pixel[0], src_pixel[1], src_pixel[2]);
        dst_pixel.copy_from_slice(&rgb);
    });

    Ok(())
}

/// Hexagonal HSV to RGB conversion for a single pixel, hue period 1.0.
fn hsv_pixel_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let h6 = h.rem_euclid(1.0) * 6.0;
    let sector = h6.floor() as u32 % 6;
    let f = h6 - h6.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use chromatize_image::{Image, ImageError, ImageSize};

    fn intensity_ramp() -> Result<Image<f32, 1>, ImageError> {
        Image::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![0.0, 0.5, 1.0],
        )
    }

    #[test]
    fn hsv_from_intensity_boundaries() -> Result<(), ImageError> {
        let image = intensity_ramp()?;
        let mut hsv = Image::from_size_val(image.size(), 0.0)?;

        super::hsv_from_intensity(&image, &mut hsv, 0.0, 1.0)?;

        // black: hue 0.6, zero saturation
        assert_relative_eq!(*hsv.get([0, 0, 0]).unwrap(), 0.6);
        assert_relative_eq!(*hsv.get([0, 0, 1]).unwrap(), 0.0);
        assert_relative_eq!(*hsv.get([0, 0, 2]).unwrap(), 0.0);

        // mid-tone: saturation peaks at exactly 1
        assert_relative_eq!(*hsv.get([0, 1, 0]).unwrap(), 0.375);
        assert_relative_eq!(*hsv.get([0, 1, 1]).unwrap(), 1.0);
        assert_relative_eq!(*hsv.get([0, 1, 2]).unwrap(), 0.5);

        // white: hue 0.15, zero saturation
        assert_relative_eq!(*hsv.get([0, 2, 0]).unwrap(), 0.15, epsilon = 1e-6);
        assert_relative_eq!(*hsv.get([0, 2, 1]).unwrap(), 0.0);
        assert_relative_eq!(*hsv.get([0, 2, 2]).unwrap(), 1.0);

        Ok(())
    }

    #[test]
    fn hsv_from_intensity_full_shift_is_identity() -> Result<(), ImageError> {
        let image = intensity_ramp()?;

        let mut unshifted = Image::from_size_val(image.size(), 0.0)?;
        super::hsv_from_intensity(&image, &mut unshifted, 0.0, 1.0)?;

        let mut shifted = Image::from_size_val(image.size(), 0.0)?;
        super::hsv_from_intensity(&image, &mut shifted, 1.0, 1.0)?;

        // a whole turn of the hue circle is an exact no-op
        assert_eq!(unshifted.as_slice(), shifted.as_slice());

        let mut double_shifted = Image::from_size_val(image.size(), 0.0)?;
        super::hsv_from_intensity(&image, &mut double_shifted, 2.0, 1.0)?;
        assert_eq!(unshifted.as_slice(), double_shifted.as_slice());

        Ok(())
    }

    #[test]
    fn hsv_from_intensity_negative_shift_wraps() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![0.0],
        )?;

        let mut hsv = Image::from_size_val(image.size(), 0.0)?;
        super::hsv_from_intensity(&image, &mut hsv, -0.7, 1.0)?;

        // 0.6 - 0.7 wraps to 0.9
        assert_relative_eq!(*hsv.get([0, 0, 0]).unwrap(), 0.9, epsilon = 1e-6);

        Ok(())
    }

    #[test]
    fn hsv_from_intensity_boost_clamps() -> Result<(), ImageError> {
        let image = intensity_ramp()?;

        let mut hsv = Image::from_size_val(image.size(), 0.0)?;
        super::hsv_from_intensity(&image, &mut hsv, 0.0, 10.0)?;

        for y in 0..image.rows() {
            for x in 0..image.cols() {
                let s = *hsv.get([y, x, 1]).unwrap();
                assert!((0.0..=1.0).contains(&s));
            }
        }

        Ok(())
    }

    #[test]
    fn zero_width_input_is_an_error() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 0,
            height: 2,
        };
        let intensity = Image::<f32, 1>::new(size, vec![])?;
        let mut hsv = Image::from_size_val(size, 0.0)?;

        let res = super::hsv_from_intensity(&intensity, &mut hsv, 0.0, 1.0);
        assert_eq!(res.unwrap_err(), ImageError::ImageDataNotInitialized);

        let empty_hsv = Image::<f32, 3>::new(size, vec![])?;
        let mut rgb = Image::from_size_val(size, 0.0)?;

        let res = super::rgb_from_hsv(&empty_hsv, &mut rgb);
        assert_eq!(res.unwrap_err(), ImageError::ImageDataNotInitialized);

        Ok(())
    }

    #[test]
    fn rgb_from_hsv_primaries() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let hsv = Image::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![
                0.0,       1.0, 1.0, // red
                1.0 / 3.0, 1.0, 1.0, // green
                2.0 / 3.0, 1.0, 1.0, // blue
                0.25,      0.0, 0.5, // gray, saturation 0
            ],
        )?;

        let mut rgb = Image::from_size_val(hsv.size(), 0.0)?;
        super::rgb_from_hsv(&hsv, &mut rgb)?;

        #[rustfmt::skip]
        let expected = [
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
            0.5, 0.5, 0.5,
        ];

        for (a, b) in rgb.as_slice().iter().zip(expected.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-6);
        }

        Ok(())
    }

    #[test]
    fn rgb_from_hsv_midtone_regression() -> Result<(), ImageError> {
        // hue 0.375 falls in sector 2 with f = 0.25
        let hsv = Image::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![0.375, 1.0, 0.5],
        )?;

        let mut rgb = Image::from_size_val(hsv.size(), 0.0)?;
        super::rgb_from_hsv(&hsv, &mut rgb)?;

        let expected = [0.0, 0.5, 0.125];
        for (a, b) in rgb.as_slice().iter().zip(expected.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-6);
        }

        Ok(())
    }

    #[test]
    fn rgb_from_hsv_hue_wraps() -> Result<(), ImageError> {
        let hsv = Image::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.1, 0.8, 0.9, 1.1, 0.8, 0.9],
        )?;

        let mut rgb = Image::from_size_val(hsv.size(), 0.0)?;
        super::rgb_from_hsv(&hsv, &mut rgb)?;

        let first = &rgb.as_slice()[..3];
        let second = &rgb.as_slice()[3..];
        for (a, b) in first.iter().zip(second.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-6);
        }

        Ok(())
    }
}
