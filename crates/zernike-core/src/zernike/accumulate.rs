//! Per-pixel accumulation of complex Zernike moments.
//!
//! Floating-point results depend on summation order. Pixels are visited
//! column by column (x outer, y inner); within a pixel, n ascends and m
//! descends from n in steps of two. Keep this order to reproduce outputs
//! bit for bit.

use std::f64::consts::PI;

use ndarray::Array2;

use super::centroid::Centroid;
use super::coefficients::RecurrenceCoefficients;
use crate::consts::{CENTROID_EPSILON, MAX_ORDER_CAPACITY};
use crate::frame::IntensityImage;

/// Raw complex moment sums, indexed `[[n, m]]` for `0 <= m <= n <= order`.
///
/// Only entries with `(n - m)` even are ever written.
#[derive(Clone, Debug, PartialEq)]
pub struct MomentAccumulator {
    pub order: usize,
    pub real: Array2<f64>,
    pub imag: Array2<f64>,
}

impl MomentAccumulator {
    pub fn zeros(order: usize) -> Self {
        Self {
            order,
            real: Array2::zeros((order + 1, order + 1)),
            imag: Array2::zeros((order + 1, order + 1)),
        }
    }
}

/// Accumulate moments up to `order` over the disk of `radius` pixels
/// centered on `centroid`.
///
/// `order` must already be validated below `MAX_ORDER_CAPACITY`.
pub fn accumulate_moments<I: IntensityImage + ?Sized>(
    image: &I,
    coeffs: &RecurrenceCoefficients,
    centroid: &Centroid,
    order: usize,
    radius: f64,
) -> MomentAccumulator {
    debug_assert!(order < MAX_ORDER_CAPACITY);

    let (w, h) = (image.width(), image.height());
    let sum = centroid.total_intensity;
    let mut acc = MomentAccumulator::zeros(order);

    let mut powers = [0.0f64; MAX_ORDER_CAPACITY];
    let mut cos_t = [0.0f64; MAX_ORDER_CAPACITY];
    let mut sin_t = [0.0f64; MAX_ORDER_CAPACITY];

    for i in 0..w {
        let x = ((i + 1) as f64 - centroid.x) / radius;
        for j in 0..h {
            let y = ((j + 1) as f64 - centroid.y) / radius;
            let r2 = x * x + y * y;
            let r = r2.sqrt();
            if r < CENTROID_EPSILON || r > 1.0 {
                continue;
            }

            fill_powers(&mut powers, r, order);

            // cos(m θ), sin(m θ) by angle addition from cos θ, sin θ.
            let a = x / r;
            let b = y / r;
            cos_t[0] = 1.0;
            sin_t[0] = 0.0;
            for m in 1..=order {
                cos_t[m] = a * cos_t[m - 1] - b * sin_t[m - 1];
                sin_t[m] = a * sin_t[m - 1] + b * cos_t[m - 1];
            }

            let f = image.intensity(i, j) / sum;
            let mut weight = 0.0;
            for_each_radial(coeffs, &powers, r2, order, |n, m, r_nm| {
                if m == n {
                    weight = (n + 1) as f64 * f / PI;
                }
                acc.real[[n, m]] += weight * r_nm * cos_t[m];
                acc.imag[[n, m]] -= weight * r_nm * sin_t[m];
            });
        }
    }

    acc
}

#[inline]
fn fill_powers(powers: &mut [f64; MAX_ORDER_CAPACITY], r: f64, order: usize) {
    powers[0] = 1.0;
    for k in 1..=order {
        powers[k] = r * powers[k - 1];
    }
}

/// Walk the radial polynomial values R(n, m) for n = 0..=order and, within
/// each n, m = n, n - 2, ... down to 0 or 1.
///
/// `powers[k]` must hold r^k and `r2` must hold r^2.
#[inline]
fn for_each_radial(
    coeffs: &RecurrenceCoefficients,
    powers: &[f64; MAX_ORDER_CAPACITY],
    r2: f64,
    order: usize,
    mut visit: impl FnMut(usize, usize, f64),
) {
    let mut r_nm2 = 0.0;
    let mut r_nmp2 = 0.0;
    let mut r_nmp4 = 0.0;

    for n in 0..=order {
        let r_n = powers[n];
        if n >= 2 {
            r_nm2 = powers[n - 2];
        }

        for m in (0..=n).rev().step_by(2) {
            let r_nm = if m == n {
                r_nmp4 = r_n;
                r_n
            } else if m + 2 == n {
                r_nmp2 = n as f64 * r_n - (n - 1) as f64 * r_nm2;
                r_nmp2
            } else {
                let v = coeffs.h1(n, m) * r_nmp4
                    + (coeffs.h2(n, m) + coeffs.h3(n, m) / r2) * r_nmp2;
                r_nmp4 = r_nmp2;
                r_nmp2 = v;
                v
            };
            visit(n, m, r_nm);
        }
    }
}

/// Radial polynomial values R(n, m) at `r` for every valid pair up to `order`,
/// evaluated with the same recurrence as the accumulation loop.
///
/// Returned as a `(order + 1, order + 1)` table; pairs with odd `n - m` are zero.
/// `order` must be below `MAX_ORDER_CAPACITY`.
pub fn radial_polynomials(coeffs: &RecurrenceCoefficients, order: usize, r: f64) -> Array2<f64> {
    debug_assert!(order < MAX_ORDER_CAPACITY);
    let mut out = Array2::<f64>::zeros((order + 1, order + 1));
    let mut powers = [0.0f64; MAX_ORDER_CAPACITY];
    fill_powers(&mut powers, r, order);

    for_each_radial(coeffs, &powers, r * r, order, |n, m, r_nm| {
        out[[n, m]] = r_nm;
    });
    out
}

/// Direct evaluation of the radial polynomial from its factorial series.
///
/// Slow and unstable at high order; used to check the recurrence.
pub fn radial_polynomial_direct(n: usize, m: usize, r: f64) -> f64 {
    debug_assert!(m <= n && (n - m) % 2 == 0);
    let factorial = |k: usize| (1..=k).fold(1.0f64, |acc, v| acc * v as f64);

    let half_diff = (n - m) / 2;
    let half_sum = (n + m) / 2;
    (0..=half_diff)
        .map(|s| {
            let sign = if s % 2 == 0 { 1.0 } else { -1.0 };
            let coeff = sign * factorial(n - s)
                / (factorial(s) * factorial(half_sum - s) * factorial(half_diff - s));
            coeff * r.powi((n - 2 * s) as i32)
        })
        .sum()
}
