use std::fs;

use image::{Rgba, RgbaImage};

use edge_antialias::{antialias, BlurMode};

// Lower-left triangle
fn triangle(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        if x <= y {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    })
}

// Both diagonals
fn diagonals(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        if x == y || x == size - y - 1 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    })
}

fn main() {
    fs::create_dir_all("test_image").unwrap();

    for size in [64, 128] {
        for (name, color) in [("triangle", triangle(size)), ("diagonal", diagonals(size))] {
            color.save(format!("test_image/{name}_{size}.png")).unwrap();

            let gray = image::DynamicImage::ImageRgba8(color.clone()).to_luma8();
            for mode in [BlurMode::Isotropic, BlurMode::Tangent] {
                let result = antialias(&color, &gray, mode).unwrap();
                let suffix = match mode {
                    BlurMode::Isotropic => "isotropic",
                    BlurMode::Tangent => "tangent",
                };
                result
                    .image
                    .save(format!("test_image/{name}_{size}_{suffix}.png"))
                    .unwrap();
                if mode == BlurMode::Tangent {
                    result
                        .edges
                        .strength
                        .save(format!("test_image/{name}_{size}_edge.png"))
                        .unwrap();
                }
            }
            println!("wrote test_image/{name}_{size}*.png");
        }
    }
}
