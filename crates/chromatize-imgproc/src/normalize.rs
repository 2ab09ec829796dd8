//! Operations to bring arbitrary pixel value ranges into the unit interval.

use num_traits::Float;

use chromatize_image::{Image, ImageError};

use crate::parallel;

/// Find the minimum and maximum values in an image.
///
/// # Arguments
///
/// * `image` - The input image of shape (height, width, channels).
///
/// # Returns
///
/// A tuple containing the minimum and maximum values in the image.
///
/// # Errors
///
/// If the image contains no pixel data, an error is returned.
///
/// # Example
///
/// ```
/// use chromatize_image::{Image, ImageSize};
/// use chromatize_imgproc::normalize::find_min_max;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![0u8, 1, 0, 1, 2, 3, 0, 1, 0, 1, 2, 3],
/// ).unwrap();
///
/// let (min, max) = find_min_max(&image).unwrap();
/// assert_eq!(min, 0);
/// assert_eq!(max, 3);
/// ```
pub fn find_min_max<T, const C: usize>(image: &Image<T, C>) -> Result<(T, T), ImageError>
where
    T: Copy + PartialOrd,
{
    let first_element = match image.as_slice().iter().next() {
        Some(x) => x,
        None => return Err(ImageError::ImageDataNotInitialized),
    };

    let mut min = first_element;
    let mut max = first_element;

    for x in image.as_slice().iter() {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    Ok((*min, *max))
}

/// Normalize an image of unknown value range into the unit interval.
///
/// If any sample exceeds 1.0 the image is assumed to hold 8-bit values in
/// [0, 255] and every sample is divided by 255. Otherwise the image is
/// assumed to be normalized already and is copied through unchanged.
///
/// The max-based check is a heuristic, not a format declaration: a raw
/// 8-bit field whose maximum happens to be at or below 1.0 (a very dark
/// image) is indistinguishable from an already normalized one and passes
/// through as-is. Callers that know the range should scale explicitly with
/// [`chromatize_image::ops::cast_and_scale`] instead.
///
/// # Arguments
///
/// * `src` - The input image of any value range.
/// * `dst` - The output image with samples in [0, 1].
///
/// # Errors
///
/// Returns an error if `src` is empty or if `src` and `dst` sizes differ.
pub fn normalize_unit_range<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Send + Sync + Float,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let (_, max_val) = find_min_max(src)?;

    let one = T::one();
    let scale = T::from(255.0).ok_or(ImageError::CastError)?;

    if max_val > one {
        parallel::par_iter_rows_val(src, dst, |&src_val, dst_val| {
            *dst_val = src_val / scale;
        });
    } else {
        parallel::par_iter_rows_val(src, dst, |&src_val, dst_val| {
            *dst_val = src_val;
        });
    }

    Ok(())
}
