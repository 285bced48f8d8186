//! Sweeps over the pricing model
//!
//! Everything the calculator displays beyond a single price:
//! - Greek summary table (both option types at one point)
//! - Spot x volatility price heatmaps
//! - Greek vs spot curves
//! - The full dashboard payload
//!
//! Each sample is an independent pure evaluation; outputs are ordered along
//! the axes exactly as the axes are built.

pub mod curve;
pub mod dashboard;
pub mod sensitivity;
pub mod summary;

pub use curve::*;
pub use dashboard::*;
pub use sensitivity::*;
pub use summary::*;

/// `n` evenly spaced samples over `[start, stop]`, both ends included
///
/// Samples are `start + i * step` with the last one pinned to `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = stop;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace() {
        let values = linspace(0.0, 1.0, 5);
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let values = linspace(0.01, 0.60, 10);
        assert_eq!(values.len(), 10);
        assert_eq!(values[0], 0.01);
        assert_eq!(values[9], 0.60);

        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }
}
