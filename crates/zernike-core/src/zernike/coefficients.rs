//! Recurrence coefficients for the radial polynomials.
//!
//! Singh & Walia, "Algorithms for fast computation of Zernike moments and
//! their numerical stability", Image and Vision Computing 29 (2011).
//! For fixed n, R(n, m) is derived from R(n, m + 4) and R(n, m + 2):
//!
//!   R(n, m) = H1 R(n, m + 4) + (H2 + H3 / r^2) R(n, m + 2)
//!
//! The coefficients depend only on (n, m), so they are computed once.

use std::sync::OnceLock;

use ndarray::Array2;

use crate::consts::MAX_ORDER_CAPACITY;

/// The H1, H2, H3 tables, indexed `[[n, m]]` for `0 <= m < n < 32`.
///
/// Diagonal entries (`m == n`) are never read and stay zero.
#[derive(Clone, Debug, PartialEq)]
pub struct RecurrenceCoefficients {
    h1: Array2<f64>,
    h2: Array2<f64>,
    h3: Array2<f64>,
}

static SHARED: OnceLock<RecurrenceCoefficients> = OnceLock::new();

impl RecurrenceCoefficients {
    pub fn new() -> Self {
        let dim = (MAX_ORDER_CAPACITY, MAX_ORDER_CAPACITY);
        let mut h1 = Array2::<f64>::zeros(dim);
        let mut h2 = Array2::<f64>::zeros(dim);
        let mut h3 = Array2::<f64>::zeros(dim);

        for n in 0..MAX_ORDER_CAPACITY {
            for m in 0..n {
                let nf = n as f64;
                let mf = m as f64;

                let c3 = -(4.0 * (mf + 2.0) * (mf + 1.0)) / ((nf + mf + 2.0) * (nf - mf));
                let c2 = (c3 * (nf + mf + 4.0) * (nf - mf - 2.0)) / (4.0 * (mf + 3.0)) + (mf + 2.0);
                let c1 = ((mf + 4.0) * (mf + 3.0)) / 2.0 - (mf + 4.0) * c2
                    + (c3 * (nf + mf + 6.0) * (nf - mf - 4.0)) / 8.0;

                h1[[n, m]] = c1;
                h2[[n, m]] = c2;
                h3[[n, m]] = c3;
            }
        }

        Self { h1, h2, h3 }
    }

    /// Process-wide table, built on first access.
    ///
    /// Concurrent first callers block until the single initialization
    /// finishes; afterwards access is lock-free.
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::new)
    }

    #[inline]
    pub fn h1(&self, n: usize, m: usize) -> f64 {
        self.h1[[n, m]]
    }

    #[inline]
    pub fn h2(&self, n: usize, m: usize) -> f64 {
        self.h2[[n, m]]
    }

    #[inline]
    pub fn h3(&self, n: usize, m: usize) -> f64 {
        self.h3[[n, m]]
    }
}

impl Default for RecurrenceCoefficients {
    fn default() -> Self {
        Self::new()
    }
}
