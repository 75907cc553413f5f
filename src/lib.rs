//! # Edge-Aware Anti-Aliasing Library
//!
//! This crate smooths jagged edges in raster images without blurring the whole picture.
//! A Sobel edge map is computed from the grayscale version of the image and used as a
//! per-pixel blend weight: flat regions keep their original colour, strong edges are
//! replaced by a blurred colour. Every pass is parallelised across rows with rayon.
//!
//! ## Features
//!
//! - Clamp-to-edge border extension
//! - Parallel Sobel gradient computation with normalised 0-255 edge strength
//! - Isotropic 5x5 weighted blend
//! - Tangent-directed blend that smooths along edges but never across them
//! - Optional debug logging (enable with `logger` feature)
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use image::open;
//! use edge_antialias::{antialias_dynamic, BlurMode};
//!
//! let image = open("example.png").unwrap();
//! let result = antialias_dynamic(&image, BlurMode::Tangent).unwrap();
//!
//! result.edges.strength.save("edge.png").unwrap();
//! result.image.save("antialiased.png").unwrap();
//! ```
//!
//! ## Optional Features
//!
//! ### Logger Feature
//!
//! Enable debug logging to monitor the pipeline:
//!
//! ```toml
//! [dependencies]
//! edge-antialias = { version = "0.1.0", features = ["logger"] }
//! log = "0.4"
//! env_logger = "0.11"
//! ```
//!
//! ```rust,no_run
//! use image::open;
//! use edge_antialias::{antialias_dynamic, BlurMode};
//!
//! // Initialize logger to see debug output
//! env_logger::init();
//!
//! let image = open("example.png").unwrap();
//! let result = antialias_dynamic(&image, BlurMode::Tangent).unwrap();
//! // With logger feature, you'll see debug messages like:
//! // DEBUG edge_antialias::gradient: max magnitude: 1020
//! // DEBUG edge_antialias::blur: anisotropic blur 64x64, max edge strength 255
//! ```
//!
//! ## Advanced Usage
//!
//! The individual stages are exposed so the edge map can be inspected or reused:
//!
//! ```rust,no_run
//! use image::open;
//! use edge_antialias::{blur_anisotropic, blur_isotropic, compute_edges};
//!
//! let image = open("input.png").unwrap();
//! let gray = image.to_luma8();
//! let color = image.to_rgba8();
//!
//! let edges = compute_edges(&gray);
//! let soft = blur_isotropic(&color, &edges.strength).unwrap();
//! let sharp = blur_anisotropic(&color, &edges.strength, &edges.gx, &edges.gy).unwrap();
//! ```

use image::{DynamicImage, GrayImage, RgbaImage};

// Conditional logging macros
#[cfg(feature = "logger")]
macro_rules! debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(feature = "logger"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

pub mod blur;
pub mod border;
pub mod error;
pub mod gradient;
pub mod grid;

pub use blur::{
    blur_anisotropic, blur_isotropic, max_edge_strength, ISOTROPIC_KERNEL, TANGENT_KERNEL,
};
pub use border::extend_border;
pub use error::{AntialiasError, Result};
pub use gradient::{
    compute_edges, normalize_magnitude, sobel_gradients, EdgeMap, SOBEL_X, SOBEL_Y,
};
pub use grid::{clamp_round, GradientImage, Kernel};

/// Which blending filter [`antialias`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurMode {
    /// 5x5 neighbourhood blend, see [`blur_isotropic`].
    Isotropic,
    /// Blend along the edge tangent only, see [`blur_anisotropic`].
    #[default]
    Tangent,
}

/// Edge map and filtered image produced by [`antialias`].
#[derive(Debug, Clone)]
pub struct AntialiasOutput {
    /// Edge strength and gradients of the grayscale input.
    pub edges: EdgeMap,
    /// Blended colour image.
    pub image: RgbaImage,
}

/// Runs the full pipeline: edge detection on `gray`, then the selected blend on
/// `color`.
///
/// `gray` and `color` must describe the same picture and have the same size.
///
/// # Examples
///
/// ```rust
/// use image::{GrayImage, Luma, Rgba, RgbaImage};
/// use edge_antialias::{antialias, BlurMode};
///
/// let gray = GrayImage::from_pixel(3, 3, Luma([128]));
/// let color = RgbaImage::from_pixel(3, 3, Rgba([128, 128, 128, 255]));
///
/// let result = antialias(&color, &gray, BlurMode::Isotropic).unwrap();
/// assert_eq!(result.image, color);
/// ```
pub fn antialias(color: &RgbaImage, gray: &GrayImage, mode: BlurMode) -> Result<AntialiasOutput> {
    let (width, height) = color.dimensions();
    if width == 0 || height == 0 {
        return Err(AntialiasError::EmptyImage);
    }
    error::ensure_dimensions("grayscale image", (width, height), gray.dimensions())?;

    debug!("start antialias {:?} {}x{}", mode, width, height);

    let edges = compute_edges(gray);
    let image = match mode {
        BlurMode::Isotropic => blur_isotropic(color, &edges.strength)?,
        BlurMode::Tangent => blur_anisotropic(color, &edges.strength, &edges.gx, &edges.gy)?,
    };

    debug!("antialias ok");

    Ok(AntialiasOutput { edges, image })
}

/// Convenience wrapper around [`antialias`] that derives the grayscale and RGBA
/// grids from a decoded image.
pub fn antialias_dynamic(image: &DynamicImage, mode: BlurMode) -> Result<AntialiasOutput> {
    antialias(&image.to_rgba8(), &image.to_luma8(), mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgba};

    #[test]
    fn test_logger_feature_compilation() {
        // The debug! macro must compile with and without the logger feature.
        let image = ImageBuffer::from_fn(10, 10, |_x, _y| Luma([128u8]));

        debug!("Test debug message");

        let edges = compute_edges(&image);
        assert_eq!(edges.gx.len(), 100);
        assert_eq!(edges.gy.len(), 100);
    }

    #[test]
    fn test_debug_macro_no_panic() {
        debug!("Starting test");
        debug!("Processing data: {}", 42);
        debug!("Test completed successfully");
    }

    #[test]
    fn default_mode_is_tangent() {
        assert_eq!(BlurMode::default(), BlurMode::Tangent);
    }

    #[test]
    fn antialias_selects_filter() {
        let gray = GrayImage::from_fn(8, 8, |x, y| Luma([if x <= y { 255 } else { 0 }]));
        let color = RgbaImage::from_fn(8, 8, |x, y| {
            let v = if x <= y { 255 } else { 0 };
            Rgba([v, v, v, 255])
        });

        let iso = antialias(&color, &gray, BlurMode::Isotropic).unwrap();
        let tan = antialias(&color, &gray, BlurMode::Tangent).unwrap();

        let edges = compute_edges(&gray);
        assert_eq!(iso.image, blur_isotropic(&color, &edges.strength).unwrap());
        assert_eq!(
            tan.image,
            blur_anisotropic(&color, &edges.strength, &edges.gx, &edges.gy).unwrap()
        );
        assert_eq!(iso.edges.strength, edges.strength);
    }

    #[test]
    fn antialias_rejects_mismatched_gray() {
        let gray = GrayImage::new(4, 5);
        let color = RgbaImage::new(5, 4);
        assert!(matches!(
            antialias(&color, &gray, BlurMode::Tangent),
            Err(AntialiasError::DimensionMismatch {
                grid: "grayscale image",
                ..
            })
        ));
    }

    #[test]
    fn antialias_dynamic_converts_channels() {
        let rgb = image::RgbImage::from_pixel(4, 4, image::Rgb([10, 20, 30]));
        let result = antialias_dynamic(&DynamicImage::ImageRgb8(rgb), BlurMode::Tangent).unwrap();

        assert_eq!(result.image.dimensions(), (4, 4));
        assert!(result.image.pixels().all(|p| *p == Rgba([10, 20, 30, 255])));
        assert!(result.edges.strength.pixels().all(|p| p[0] == 0));
    }
}
