use super::accumulate::MomentAccumulator;

/// Number of (n, m) pairs with `m <= n <= order` and `n - m` even.
pub fn moment_count(order: usize) -> usize {
    (0..=order).map(|n| n / 2 + 1).sum()
}

/// Valid (n, m) pairs in output order: n ascending, then m ascending.
pub fn pair_indices(order: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..=order).flat_map(|n| ((n % 2)..=n).step_by(2).map(move |m| (n, m)))
}

/// Moment magnitudes `sqrt(re^2 + im^2)` in output order.
///
/// The accumulator is left untouched.
pub fn extract_magnitudes(acc: &MomentAccumulator) -> Vec<f64> {
    let mut out = Vec::with_capacity(moment_count(acc.order));
    for (n, m) in pair_indices(acc.order) {
        let re = acc.real[[n, m]];
        let im = acc.imag[[n, m]];
        out.push((re * re + im * im).sqrt());
    }
    out
}
