//! Clamp-to-edge border extension for grayscale grids.

use image::GrayImage;
use rayon::prelude::*;

/// Returns a copy of `image` padded by `margin_x` columns on the left and right and
/// `margin_y` rows on the top and bottom.
///
/// The original samples land unchanged at offset `(margin_x, margin_y)`. Margin rows
/// repeat the nearest source row, margin columns repeat the nearest source column,
/// and each corner block is filled with the matching corner sample. Zero margins
/// produce an identical copy.
///
/// An image with no pixels has nothing to replicate; the result is then an all-zero
/// grid of the extended size.
///
/// # Examples
///
/// ```rust
/// use image::{GrayImage, Luma};
/// use edge_antialias::extend_border;
///
/// let image = GrayImage::from_fn(2, 2, |x, y| Luma([(10 * (y * 2 + x)) as u8]));
/// let padded = extend_border(&image, 1, 1);
///
/// assert_eq!(padded.dimensions(), (4, 4));
/// assert_eq!(padded.get_pixel(0, 0)[0], 0);
/// assert_eq!(padded.get_pixel(3, 3)[0], 30);
/// ```
pub fn extend_border(image: &GrayImage, margin_x: u32, margin_y: u32) -> GrayImage {
    let (width, height) = image.dimensions();
    let new_width = width + 2 * margin_x;
    let new_height = height + 2 * margin_y;
    let mut out = GrayImage::new(new_width, new_height);

    if width == 0 || height == 0 {
        return out;
    }

    let src_width = width as usize;
    let margin = margin_x as usize;
    let source = image.as_raw();

    out.par_chunks_mut(new_width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            // Rows inside the top/bottom margins read the nearest source row.
            let src_y = (y as u32).saturating_sub(margin_y).min(height - 1) as usize;
            let src_row = &source[src_y * src_width..(src_y + 1) * src_width];

            let (left, rest) = row.split_at_mut(margin);
            let (interior, right) = rest.split_at_mut(src_width);

            left.fill(src_row[0]);
            interior.copy_from_slice(src_row);
            right.fill(src_row[src_width - 1]);
        });

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn ramp(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| Luma([(y * width + x) as u8 * 7]))
    }

    #[test]
    fn interior_is_verbatim_copy() {
        let image = ramp(5, 4);
        let padded = extend_border(&image, 2, 3);
        assert_eq!(padded.dimensions(), (9, 10));

        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(padded.get_pixel(x + 2, y + 3), image.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn corners_are_constant_blocks() {
        let image = ramp(5, 4);
        let padded = extend_border(&image, 2, 3);
        let (w, h) = padded.dimensions();

        for y in 0..3 {
            for x in 0..2 {
                assert_eq!(padded.get_pixel(x, y), image.get_pixel(0, 0));
                assert_eq!(padded.get_pixel(w - 1 - x, y), image.get_pixel(4, 0));
                assert_eq!(padded.get_pixel(x, h - 1 - y), image.get_pixel(0, 3));
                assert_eq!(padded.get_pixel(w - 1 - x, h - 1 - y), image.get_pixel(4, 3));
            }
        }
    }

    #[test]
    fn margins_replicate_nearest_row_and_column() {
        let image = ramp(5, 4);
        let padded = extend_border(&image, 2, 3);
        let (w, h) = padded.dimensions();

        for x in 0..5 {
            for m in 0..3 {
                assert_eq!(padded.get_pixel(x + 2, m), image.get_pixel(x, 0));
                assert_eq!(padded.get_pixel(x + 2, h - 1 - m), image.get_pixel(x, 3));
            }
        }
        for y in 0..4 {
            for m in 0..2 {
                assert_eq!(padded.get_pixel(m, y + 3), image.get_pixel(0, y));
                assert_eq!(padded.get_pixel(w - 1 - m, y + 3), image.get_pixel(4, y));
            }
        }
    }

    #[test]
    fn zero_margin_is_identity() {
        let image = ramp(3, 3);
        assert_eq!(extend_border(&image, 0, 0), image);
    }

    #[test]
    fn asymmetric_margins() {
        let image = ramp(3, 2);
        let padded = extend_border(&image, 0, 1);
        assert_eq!(padded.dimensions(), (3, 4));
        assert_eq!(padded.get_pixel(1, 0), image.get_pixel(1, 0));
        assert_eq!(padded.get_pixel(2, 3), image.get_pixel(2, 1));
    }

    #[test]
    fn single_pixel_fills_everything() {
        let image = GrayImage::from_pixel(1, 1, Luma([42]));
        let padded = extend_border(&image, 2, 2);
        assert!(padded.pixels().all(|p| p[0] == 42));
    }

    #[test]
    fn empty_image_yields_zeroed_extension() {
        let image = GrayImage::new(0, 0);
        let padded = extend_border(&image, 1, 2);
        assert_eq!(padded.dimensions(), (2, 4));
        assert!(padded.pixels().all(|p| p[0] == 0));
    }
}
