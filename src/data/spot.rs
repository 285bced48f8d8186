//! Spot price source
//!
//! The calculator does not fetch market data itself. A collaborator supplies
//! the reference spot through [`SpotSource`]; when it fails the calculator
//! falls back to a fixed value so the page always renders.

use crate::core::{BSError, BSResult};

/// Provider of the current underlying price
pub trait SpotSource {
    fn fetch_spot(&self) -> BSResult<f64>;
}

/// Source that always returns the same price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSpot(pub f64);

impl SpotSource for FixedSpot {
    fn fetch_spot(&self) -> BSResult<f64> {
        Ok(self.0)
    }
}

impl<F> SpotSource for F
where
    F: Fn() -> BSResult<f64>,
{
    fn fetch_spot(&self) -> BSResult<f64> {
        self()
    }
}

/// Spot from `source`, or `fallback` if it fails or returns a non-positive price
pub fn spot_or_fallback(source: &dyn SpotSource, fallback: f64) -> f64 {
    let checked = source.fetch_spot().and_then(|spot| {
        if spot.is_finite() && spot > 0.0 {
            Ok(spot)
        } else {
            Err(BSError::data(format!("unusable spot {}", spot)))
        }
    });

    match checked {
        Ok(spot) => spot,
        Err(e) => {
            tracing::warn!("Spot fetch failed ({}), using fallback {}", e, fallback);
            fallback
        }
    }
}
