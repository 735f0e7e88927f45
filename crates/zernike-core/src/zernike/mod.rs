//! Zernike moment magnitudes (Singh & Walia fast/stable algorithm).
//!
//! Stages run strictly forward: centroid, per-pixel accumulation against
//! the shared recurrence coefficients, then magnitude extraction.

pub mod accumulate;
pub mod centroid;
pub mod coefficients;
pub mod magnitude;

use num_complex::Complex64;
use tracing::debug;

use crate::config::{ResolvedParams, ZernikeParams};
use crate::error::{Result, ZernikeError};
use crate::frame::IntensityImage;

pub use accumulate::MomentAccumulator;
pub use centroid::{compute_centroid, Centroid};
pub use coefficients::RecurrenceCoefficients;
pub use magnitude::{moment_count, pair_indices};

/// Result of one moment computation.
#[derive(Clone, Debug)]
pub struct ZernikeMoments {
    pub params: ResolvedParams,
    pub centroid: Centroid,
    accumulator: MomentAccumulator,
    magnitudes: Vec<f64>,
}

impl ZernikeMoments {
    pub fn order(&self) -> usize {
        self.params.order
    }

    pub fn radius(&self) -> f64 {
        self.params.radius
    }

    /// Magnitudes ordered by n ascending, then m ascending.
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    pub fn into_magnitudes(self) -> Vec<f64> {
        self.magnitudes
    }

    pub fn count(&self) -> usize {
        self.magnitudes.len()
    }

    /// Raw accumulated moment A(n, m), or `None` if the pair is not valid
    /// for this order.
    pub fn moment(&self, n: usize, m: usize) -> Option<Complex64> {
        if n > self.params.order || m > n || (n - m) % 2 != 0 {
            return None;
        }
        Some(Complex64::new(
            self.accumulator.real[[n, m]],
            self.accumulator.imag[[n, m]],
        ))
    }

    pub fn accumulator(&self) -> &MomentAccumulator {
        &self.accumulator
    }

    /// Iterate `((n, m), magnitude)` in output order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        pair_indices(self.params.order).zip(self.magnitudes.iter().copied())
    }

    /// Copy the magnitudes into a caller-provided buffer and return how
    /// many were written.
    pub fn copy_magnitudes_into(&self, out: &mut [f64]) -> Result<usize> {
        let needed = self.magnitudes.len();
        if out.len() < needed {
            return Err(ZernikeError::BufferTooSmall {
                needed,
                available: out.len(),
            });
        }
        out[..needed].copy_from_slice(&self.magnitudes);
        Ok(needed)
    }
}

/// Compute Zernike moment magnitudes using the raw calling convention.
///
/// A non-positive `order` selects order 15 and a non-positive `radius`
/// selects `min(width, height)`. Uses the process-wide coefficient table.
pub fn compute_zernike_moments<I: IntensityImage + ?Sized>(
    image: &I,
    order: i32,
    radius: f64,
) -> Result<ZernikeMoments> {
    compute_with_params(
        image,
        RecurrenceCoefficients::shared(),
        &ZernikeParams::from_raw(order, radius),
    )
}

/// Compute Zernike moment magnitudes with explicit parameters and table.
pub fn compute_with_params<I: IntensityImage + ?Sized>(
    image: &I,
    coeffs: &RecurrenceCoefficients,
    params: &ZernikeParams,
) -> Result<ZernikeMoments> {
    let resolved = params.resolve(image.width(), image.height())?;
    let centroid = compute_centroid(image)?;

    debug!(
        width = image.width(),
        height = image.height(),
        order = resolved.order,
        radius = resolved.radius,
        cx = centroid.x,
        cy = centroid.y,
        "Computing Zernike moments"
    );

    let accumulator =
        accumulate::accumulate_moments(image, coeffs, &centroid, resolved.order, resolved.radius);
    let magnitudes = magnitude::extract_magnitudes(&accumulator);

    debug!(count = magnitudes.len(), "Zernike moments complete");

    Ok(ZernikeMoments {
        params: resolved,
        centroid,
        accumulator,
        magnitudes,
    })
}
