use std::{path::PathBuf, process, time::Instant};

use env_logger::Builder;
use image::open;
use log::{error, info};

use edge_antialias::{antialias_dynamic, BlurMode};

fn main() {
    Builder::from_default_env().format_timestamp_nanos().init();

    let mut mode = BlurMode::Tangent;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--isotropic" {
            mode = BlurMode::Isotropic;
        } else {
            paths.push(PathBuf::from(arg));
        }
    }

    let Some(input) = paths.first() else {
        error!("usage: edge_antialias [--isotropic] <image> [output_dir]");
        process::exit(2);
    };
    let out_dir = paths.get(1).cloned().unwrap_or_else(|| PathBuf::from("."));

    let img = match open(input) {
        Ok(img) => img,
        Err(err) => {
            error!("failed to read {}: {err}", input.display());
            process::exit(1);
        }
    };
    info!("loaded {}: {}x{}", input.display(), img.width(), img.height());

    let instance = Instant::now();
    let result = match antialias_dynamic(&img, mode) {
        Ok(result) => result,
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    };
    info!("{mode:?} anti-aliasing took {:?}", instance.elapsed());

    let edge_path = out_dir.join("edge.png");
    let result_path = out_dir.join("antialiased.png");
    if let Err(err) = result.edges.strength.save(&edge_path) {
        error!("failed to write {}: {err}", edge_path.display());
        process::exit(1);
    }
    if let Err(err) = result.image.save(&result_path) {
        error!("failed to write {}: {err}", result_path.display());
        process::exit(1);
    }

    info!("wrote {} and {}", edge_path.display(), result_path.display());
}
