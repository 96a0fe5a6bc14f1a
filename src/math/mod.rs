//! Mathematical utilities for ring geometry and motif sampling

/// Polar coordinates, points and concentric ring bands
pub mod geometry;
/// Random draws shared by the motif generators
pub mod probability;

use num_traits::Float;

/// Linear interpolation between `a` and `b` by factor `t`
///
/// `t` is not clamped, so values outside `[0, 1]` extrapolate along the line.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Evenly spaced samples over the closed interval `[start, end]`
///
/// Returns `samples` values with both endpoints included. A single sample
/// yields `start`; zero samples yield an empty vector.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (samples - 1) as f64;
            (0..samples)
                .map(|i| lerp(start, end, i as f64 / last))
                .collect()
        }
    }
}
