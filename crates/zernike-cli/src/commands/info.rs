use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use zernike_core::config::ZernikeParams;
use zernike_core::io::image_io::load_image;
use zernike_core::zernike::{compute_centroid, moment_count};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Maximum Zernike order used for the moment count; 0 keeps only Z_0_0 [default: 15]
    #[arg(short = 'L', long)]
    pub order: Option<usize>,

    /// Unit-disk radius in pixels; <= 0 uses min(width, height)
    #[arg(short, long, allow_negative_numbers = true)]
    pub radius: Option<f64>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let params = ZernikeParams {
        order: args.order,
        radius: args.radius,
    };
    let resolved = params.resolve(frame.width(), frame.height())?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", frame.width(), frame.height());
    println!("Bit depth:   {}", frame.original_bit_depth);

    match compute_centroid(&frame) {
        Ok(c) => {
            println!("Centroid:    ({:.3}, {:.3})", c.x, c.y);
            println!("Intensity:   {:.6}", c.total_intensity);
        }
        Err(e) => println!("Centroid:    undefined ({e})"),
    }

    println!("Radius:      {} px", resolved.radius);
    println!("Order:       {}", resolved.order);
    println!("Moments:     {}", moment_count(resolved.order));

    Ok(())
}
