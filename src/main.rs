#![allow(non_snake_case)]
#![allow(mixed_script_confusables)]
#![allow(uncommon_codepoints)]
#![allow(confusable_idents)]

//! Batch generator for the orbital model library: walks the full catalog
//! and writes one colored point cloud per orbital.
//!
//! Usage: `orbital_gen [root_dir] [points_per_orbital]`. Defaults: `model++`
//! and 250,000 points, matching the published model set.

use std::{env, path::PathBuf, process};

use log::{error, info};

#[cfg(feature = "cuda")]
use orbital_gen::gpu;
use orbital_gen::{catalog, types::ComputationDevice};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);

    let root = PathBuf::from(args.next().unwrap_or_else(|| "model++".to_owned()));

    let num_points = match args.next() {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                error!("points-per-orbital must be an integer; got {v}");
                process::exit(2);
            }
        },
        None => catalog::DEFAULT_NUM_POINTS,
    };

    #[cfg(feature = "cuda")]
    let dev = ComputationDevice::Gpu(gpu::init());

    #[cfg(not(feature = "cuda"))]
    let dev = ComputationDevice::Cpu;

    info!("engine up; computing on {}", dev.descrip());

    if let Err(e) = catalog::generate_all(&dev, &root, num_points) {
        error!("generation failed: {e}");
        process::exit(1);
    }

    info!(
        "catalog complete; models stored under {}",
        root.display()
    );
}
