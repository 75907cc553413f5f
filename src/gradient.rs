//! Sobel gradients and normalised edge strength.

use image::GrayImage;
use rayon::prelude::*;

use crate::border::extend_border;
use crate::grid::{clamp_round, GradientImage, Kernel};

/// Horizontal Sobel kernel, responds to vertical edges.
///
/// ```text
/// [-1  0  1]
/// [-2  0  2]
/// [-1  0  1]
/// ```
pub const SOBEL_X: Kernel<3, 3> = Kernel::new([[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]);

/// Vertical Sobel kernel, responds to horizontal edges.
///
/// ```text
/// [-1 -2 -1]
/// [ 0  0  0]
/// [ 1  2  1]
/// ```
pub const SOBEL_Y: Kernel<3, 3> = Kernel::new([[-1, -2, -1], [0, 0, 0], [1, 2, 1]]);

/// Output of [`compute_edges`]: the normalised edge map plus the raw gradients it
/// was derived from.
#[derive(Debug, Clone)]
pub struct EdgeMap {
    /// Gradient magnitude rescaled so the strongest pixel is 255.
    pub strength: GrayImage,
    /// Horizontal derivative.
    pub gx: GradientImage,
    /// Vertical derivative.
    pub gy: GradientImage,
}

/// Computes the edge-strength grid and the raw Sobel gradients of `image`.
///
/// The image is padded by one pixel with [`extend_border`] so that every pixel,
/// including the outermost ring, has a full 3x3 neighbourhood. Edge strength is the
/// Euclidean norm of `(gx, gy)` scaled so the image-wide maximum maps to 255; a
/// perfectly flat image produces an all-zero strength grid.
///
/// # Examples
///
/// ```rust
/// use image::{GrayImage, Luma};
/// use edge_antialias::compute_edges;
///
/// // Dark left half, bright right half.
/// let image = GrayImage::from_fn(8, 4, |x, _| Luma([if x < 4 { 0 } else { 255 }]));
/// let edges = compute_edges(&image);
///
/// assert_eq!(edges.strength.get_pixel(3, 1)[0], 255);
/// assert_eq!(edges.strength.get_pixel(0, 1)[0], 0);
/// assert_eq!(edges.gy.get_pixel(3, 1)[0], 0.0);
/// ```
pub fn compute_edges(image: &GrayImage) -> EdgeMap {
    debug!("compute edges for {}x{}", image.width(), image.height());

    let (gx, gy) = sobel_gradients(image);
    debug!("gx and gy ok");

    let strength = normalize_magnitude(&gx, &gy);
    debug!("strength ok");

    EdgeMap { strength, gx, gy }
}

/// Applies [`SOBEL_X`] and [`SOBEL_Y`] at every pixel of `image`.
///
/// Rows are processed in parallel; each row only writes its own slice of the two
/// output buffers.
pub fn sobel_gradients(image: &GrayImage) -> (GradientImage, GradientImage) {
    let (width, height) = image.dimensions();
    let mut gx = GradientImage::new(width, height);
    let mut gy = GradientImage::new(width, height);

    if width == 0 || height == 0 {
        return (gx, gy);
    }

    let padded = extend_border(image, 1, 1);
    let stride = padded.width() as usize;
    let pixels = padded.as_raw();

    gx.par_chunks_mut(width as usize)
        .zip(gy.par_chunks_mut(width as usize))
        .enumerate()
        .for_each(|(y, (gx_row, gy_row))| {
            for x in 0..width as usize {
                let mut gx_val = 0;
                let mut gy_val = 0;

                // Pixel (x, y) sits at (x + 1, y + 1) in the padded grid, so its
                // neighbourhood starts at (x, y).
                for ky in 0..3 {
                    let row = &pixels[(y + ky) * stride..];
                    for kx in 0..3 {
                        let pixel = i32::from(row[x + kx]);
                        gx_val += pixel * SOBEL_X.at(ky, kx);
                        gy_val += pixel * SOBEL_Y.at(ky, kx);
                    }
                }

                gx_row[x] = gx_val as f32;
                gy_row[x] = gy_val as f32;
            }
        });

    (gx, gy)
}

/// Converts a gradient pair into an 8-bit edge-strength grid.
///
/// Two passes are needed: the first finds the largest magnitude in the image, the
/// second scales every magnitude against it and rounds to the nearest integer.
///
/// # Panics
///
/// If `gx` and `gy` differ in size.
pub fn normalize_magnitude(gx: &GradientImage, gy: &GradientImage) -> GrayImage {
    assert_eq!(
        gx.dimensions(),
        gy.dimensions(),
        "gradient grids must have the same size"
    );

    let (width, height) = gx.dimensions();
    let mut strength = GrayImage::new(width, height);

    let magnitude: Vec<f32> = gx
        .as_raw()
        .par_iter()
        .zip(gy.as_raw().par_iter())
        .map(|(dx, dy)| dx.hypot(*dy))
        .collect();

    let max_magnitude = magnitude
        .par_iter()
        .copied()
        .reduce(|| 0.0, f32::max);

    debug!("max magnitude: {}", max_magnitude);

    // Flat image: leave every sample at zero.
    if max_magnitude == 0.0 {
        return strength;
    }

    strength
        .par_chunks_mut(width as usize)
        .zip(magnitude.par_chunks(width as usize))
        .for_each(|(out_row, mag_row)| {
            for (out, mag) in out_row.iter_mut().zip(mag_row) {
                *out = clamp_round(mag / max_magnitude * 255.0, u8::MAX);
            }
        });

    strength
}
