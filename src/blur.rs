//! Edge-strength driven blending filters.
//!
//! Both filters compute a blurred colour for every pixel and mix it with the
//! original in proportion to the local edge strength:
//!
//! ```text
//! out = (1 - s) * original + s * blurred,    s = strength / max_strength
//! ```
//!
//! so flat regions keep their colour and the strongest edges receive the full blur.
//! Neighbours that fall outside the image are dropped from both the weighted sum and
//! the weight total, which keeps borders from darkening.

use image::{GrayImage, Rgba, RgbaImage};
use rayon::prelude::*;

use crate::error::{ensure_dimensions, AntialiasError, Result};
use crate::grid::{clamp_round, GradientImage, Kernel};

/// 5x5 weights of the isotropic filter.
///
/// Rows run along the horizontal offset: `at(dx + 2, dy + 2)` is the weight of the
/// neighbour at `(x + dx, y + dy)`. The matrix is kept as authored, including the
/// `4` at the end of the centre row.
pub const ISOTROPIC_KERNEL: Kernel<5, 5> = Kernel::new([
    [1, 4, 6, 4, 1],
    [4, 16, 24, 16, 4],
    [6, 24, 36, 24, 4],
    [4, 16, 24, 16, 4],
    [1, 4, 6, 4, 1],
]);

/// Weights along the edge tangent, indexed by `k + 2` for `k` in `-2..=2`.
pub const TANGENT_KERNEL: Kernel<5, 1> = Kernel::new([[1, 4, 6, 4, 1]]);

/// Largest value in an edge-strength grid.
pub fn max_edge_strength(strength: &GrayImage) -> u8 {
    strength.as_raw().par_iter().copied().max().unwrap_or(0)
}

/// Running weighted RGBA sum.
#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    channels: [f32; 4],
    weight: f32,
}

impl Accumulator {
    #[inline]
    fn add(&mut self, pixel: &Rgba<u8>, weight: i32) {
        let weight = weight as f32;
        for (sum, value) in self.channels.iter_mut().zip(pixel.0) {
            *sum += f32::from(value) * weight;
        }
        self.weight += weight;
    }

    /// Mixes the weighted average into `original` with factor `strength`.
    #[inline]
    fn blend(&self, original: &Rgba<u8>, strength: f32) -> [u8; 4] {
        let mut out = [0u8; 4];
        for (c, value) in out.iter_mut().enumerate() {
            let blurred = self.channels[c] / self.weight;
            let mixed = (1.0 - strength) * f32::from(original[c]) + strength * blurred;
            *value = clamp_round(mixed, u8::MAX);
        }
        out
    }
}

/// Edge strength of one pixel relative to the grid maximum, capped at 1.
#[inline]
fn relative_strength(value: u8, max: u8) -> f32 {
    if max == 0 {
        return 0.0;
    }
    (f32::from(value) / f32::from(max)).min(1.0)
}

fn check_inputs(image: &RgbaImage, strength: &GrayImage) -> Result<()> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(AntialiasError::EmptyImage);
    }
    ensure_dimensions("edge strength", (width, height), strength.dimensions())
}

/// Blends every pixel with a 5x5 weighted neighbourhood average, scaled by its
/// edge strength.
///
/// The strength of a pixel is its value in `strength` divided by the largest value
/// in that grid, so only the pixels carrying the maximum are fully replaced by
/// their blurred colour. A grid that is zero everywhere leaves the image untouched.
///
/// Returns [`AntialiasError::DimensionMismatch`] if `strength` does not match the
/// size of `image`, and [`AntialiasError::EmptyImage`] for an image with no pixels.
///
/// # Examples
///
/// ```rust
/// use image::{GrayImage, Luma, Rgba, RgbaImage};
/// use edge_antialias::blur_isotropic;
///
/// let image = RgbaImage::from_fn(4, 4, |x, _| Rgba([if x < 2 { 0 } else { 200 }, 0, 0, 255]));
/// let flat = GrayImage::from_pixel(4, 4, Luma([0]));
///
/// let out = blur_isotropic(&image, &flat).unwrap();
/// assert_eq!(out, image);
/// ```
pub fn blur_isotropic(image: &RgbaImage, strength: &GrayImage) -> Result<RgbaImage> {
    check_inputs(image, strength)?;

    let (width, height) = image.dimensions();
    let max_strength = max_edge_strength(strength);
    debug!(
        "isotropic blur {}x{}, max edge strength {}",
        width, height, max_strength
    );

    let radius_x = ISOTROPIC_KERNEL.radius_x() as i64;
    let radius_y = ISOTROPIC_KERNEL.radius_y() as i64;
    let mut out = RgbaImage::new(width, height);

    out.par_chunks_mut(width as usize * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            for (x, target) in row.chunks_exact_mut(4).enumerate() {
                let x = x as u32;
                let s = relative_strength(strength.get_pixel(x, y)[0], max_strength);

                let mut acc = Accumulator::default();
                for dx in -radius_x..=radius_x {
                    for dy in -radius_y..=radius_y {
                        let nx = i64::from(x) + dx;
                        let ny = i64::from(y) + dy;
                        if nx < 0 || ny < 0 || nx >= i64::from(width) || ny >= i64::from(height)
                        {
                            continue;
                        }
                        let weight =
                            ISOTROPIC_KERNEL.at((dx + radius_x) as usize, (dy + radius_y) as usize);
                        acc.add(image.get_pixel(nx as u32, ny as u32), weight);
                    }
                }

                target.copy_from_slice(&acc.blend(image.get_pixel(x, y), s));
            }
        });

    Ok(out)
}

/// Blends every pixel with samples taken along the edge tangent, scaled by its edge
/// strength.
///
/// The tangent at `(x, y)` is the gradient `(gx, gy)` rotated by 90 degrees,
/// `(-gy, gx) / |g|`. Five samples at offsets `k = -2..=2` along it are rounded to
/// the nearest pixel and weighted by [`TANGENT_KERNEL`]; samples that land outside
/// the image are skipped. Because the samples never leave the tangent line, colour
/// is smoothed along an edge without being mixed across it.
///
/// Pixels with a zero gradient carry no direction and are copied through unchanged.
///
/// Returns [`AntialiasError::DimensionMismatch`] if any of `strength`, `gx` or `gy`
/// does not match the size of `image`, and [`AntialiasError::EmptyImage`] for an
/// image with no pixels.
///
/// # Examples
///
/// ```rust
/// use image::{GrayImage, Luma, Rgba, RgbaImage};
/// use edge_antialias::{blur_anisotropic, compute_edges};
///
/// let gray = GrayImage::from_fn(6, 6, |x, y| Luma([if x <= y { 255 } else { 0 }]));
/// let color = RgbaImage::from_fn(6, 6, |x, y| {
///     let v = if x <= y { 255 } else { 0 };
///     Rgba([v, v, v, 255])
/// });
///
/// let edges = compute_edges(&gray);
/// let out = blur_anisotropic(&color, &edges.strength, &edges.gx, &edges.gy).unwrap();
/// assert_eq!(out.dimensions(), (6, 6));
/// ```
pub fn blur_anisotropic(
    image: &RgbaImage,
    strength: &GrayImage,
    gx: &GradientImage,
    gy: &GradientImage,
) -> Result<RgbaImage> {
    check_inputs(image, strength)?;
    let (width, height) = image.dimensions();
    ensure_dimensions("gx", (width, height), gx.dimensions())?;
    ensure_dimensions("gy", (width, height), gy.dimensions())?;

    let max_strength = max_edge_strength(strength);
    debug!(
        "anisotropic blur {}x{}, max edge strength {}",
        width, height, max_strength
    );

    let radius = TANGENT_KERNEL.radius_x() as i64;
    let mut out = RgbaImage::new(width, height);

    let passed_through: usize = out
        .par_chunks_mut(width as usize * 4)
        .enumerate()
        .map(|(y, row)| {
            let y = y as u32;
            let mut flat = 0;
            for (x, target) in row.chunks_exact_mut(4).enumerate() {
                let x = x as u32;
                let original = image.get_pixel(x, y);

                let dx = gx.get_pixel(x, y)[0];
                let dy = gy.get_pixel(x, y)[0];
                let magnitude = dx.hypot(dy);

                if magnitude == 0.0 {
                    target.copy_from_slice(&original.0);
                    flat += 1;
                    continue;
                }

                let s = relative_strength(strength.get_pixel(x, y)[0], max_strength);
                let nx = -dy / magnitude;
                let ny = dx / magnitude;

                let mut acc = Accumulator::default();
                for k in -radius..=radius {
                    let sx = (x as f32 + nx * k as f32).round() as i64;
                    let sy = (y as f32 + ny * k as f32).round() as i64;
                    if sx < 0 || sy < 0 || sx >= i64::from(width) || sy >= i64::from(height) {
                        continue;
                    }
                    let weight = TANGENT_KERNEL.at(0, (k + radius) as usize);
                    acc.add(image.get_pixel(sx as u32, sy as u32), weight);
                }

                target.copy_from_slice(&acc.blend(original, s));
            }
            flat
        })
        .sum();

    debug!("{} pixels without gradient passed through", passed_through);

    Ok(out)
}
