#![allow(dead_code)]

use ndarray::Array2;

/// Square image of `size` x `size` filled with `value`.
pub fn uniform_image(size: usize, value: f64) -> Array2<f64> {
    Array2::from_elem((size, size), value)
}

/// Asymmetric blob pattern confined to a disk of `support` pixels around the
/// geometric center of a `size` x `size` image. Everything outside is zero,
/// so the pattern stays well inside any unit disk of radius >= `support + 2`.
pub fn asymmetric_pattern(size: usize, support: f64) -> Array2<f64> {
    let c = (size as f64 - 1.0) / 2.0;
    let mut data = Array2::<f64>::zeros((size, size));
    for row in 0..size {
        for col in 0..size {
            let dx = col as f64 - c;
            let dy = row as f64 - c;
            let d = (dx * dx + dy * dy).sqrt();
            if d > support {
                continue;
            }
            let lobe = (-((dx - 3.0).powi(2) + (dy + 1.5).powi(2)) / 6.0).exp();
            let bar = if dy.abs() < 1.5 && dx > -support * 0.8 && dx < 1.0 {
                0.6
            } else {
                0.0
            };
            let ramp = 0.1 * (dx + support) / (2.0 * support);
            data[[row, col]] = lobe + bar + ramp;
        }
    }
    data
}

/// Rotate a square image 90 degrees about its geometric center.
pub fn rotate90(data: &Array2<f64>) -> Array2<f64> {
    let n = data.nrows();
    assert_eq!(n, data.ncols());
    let mut out = Array2::<f64>::zeros((n, n));
    for row in 0..n {
        for col in 0..n {
            // new(x = col, y = row) = old(x = row, y = n - 1 - col)
            out[[row, col]] = data[[n - 1 - col, row]];
        }
    }
    out
}

/// Rotate a square image 180 degrees about its geometric center.
pub fn rotate180(data: &Array2<f64>) -> Array2<f64> {
    let (h, w) = data.dim();
    let mut out = Array2::<f64>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            out[[row, col]] = data[[h - 1 - row, w - 1 - col]];
        }
    }
    out
}

/// Assert two magnitude sequences agree within a mixed absolute/relative tolerance.
pub fn assert_magnitudes_close(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len(), "length mismatch");
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let scale = x.abs().max(y.abs()).max(1.0);
        assert!(
            (x - y).abs() <= tol * scale,
            "magnitude {i} differs: {x} vs {y}"
        );
    }
}
