//! Intensity centroid used to center the unit disk.
//!
//! Unlike the geometric image center, the center of mass follows the
//! object, which makes the resulting descriptors more discriminative.

use crate::error::{Result, ZernikeError};
use crate::frame::IntensityImage;

/// Intensity-weighted center of mass in 1-based pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
    /// Sum of all pixel intensities.
    pub total_intensity: f64,
}

/// Compute the intensity centroid over every pixel.
///
/// Scans columns in the outer loop and rows in the inner loop, the same
/// order as the moment accumulation.
pub fn compute_centroid<I: IntensityImage + ?Sized>(image: &I) -> Result<Centroid> {
    let (w, h) = (image.width(), image.height());

    let mut sum = 0.0f64;
    let mut moment_x = 0.0f64;
    let mut moment_y = 0.0f64;

    for x in 0..w {
        for y in 0..h {
            let intensity = image.intensity(x, y);
            sum += intensity;
            moment_x += (x + 1) as f64 * intensity;
            moment_y += (y + 1) as f64 * intensity;
        }
    }

    if sum == 0.0 || !sum.is_finite() {
        return Err(ZernikeError::DegenerateImage);
    }

    Ok(Centroid {
        x: moment_x / sum,
        y: moment_y / sum,
        total_intensity: sum,
    })
}
