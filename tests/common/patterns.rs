use image::{GrayImage, Luma, Rgba, RgbaImage};

/// White lower-left triangle (`x <= y`) on black.
pub fn triangle(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        if x <= y {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    })
}

/// Both diagonals in white on black.
pub fn diagonals(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        if x == y || x == size - y - 1 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    })
}

/// Grayscale view of an opaque black and white pattern.
pub fn luma(image: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([image.get_pixel(x, y)[0]])
    })
}
