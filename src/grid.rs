//! Grid and kernel types shared by the edge and blur passes.
//!
//! Every grid in this crate is an [`image::ImageBuffer`]: a single contiguous,
//! row-major buffer indexed by `y * width + x`, parameterised over the pixel type.
//! Grayscale samples and edge strength use [`image::GrayImage`], colour input and
//! output use [`image::RgbaImage`], and the signed Sobel responses use [`GradientImage`].

use image::Luma;
use imageproc::definitions::Image;

/// Signed floating-point gradient grid, one sample per source pixel.
pub type GradientImage = Image<Luma<f32>>;

/// Fixed-size integer weight matrix with `H` rows of `W` weights.
///
/// Kernels are plain `const` data; nothing about them is allocated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel<const W: usize, const H: usize> {
    weights: [[i32; W]; H],
}

impl<const W: usize, const H: usize> Kernel<W, H> {
    /// Builds a kernel from its rows.
    pub const fn new(weights: [[i32; W]; H]) -> Self {
        Self { weights }
    }

    /// Weight stored at `row`, `col`.
    #[inline]
    pub const fn at(&self, row: usize, col: usize) -> i32 {
        self.weights[row][col]
    }

    /// Sum of every weight in the kernel.
    pub const fn sum(&self) -> i32 {
        let mut total = 0;
        let mut row = 0;
        while row < H {
            let mut col = 0;
            while col < W {
                total += self.weights[row][col];
                col += 1;
            }
            row += 1;
        }
        total
    }

    /// Half-width of the kernel along its rows.
    pub const fn radius_x(&self) -> usize {
        W / 2
    }

    /// Half-height of the kernel along its columns.
    pub const fn radius_y(&self) -> usize {
        H / 2
    }
}

/// Rounds `value` to the nearest integer and clamps it into `0..=max`.
///
/// NaN maps to 0.
#[inline]
pub fn clamp_round(value: f32, max: u8) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, f32::from(max)) as u8
}
