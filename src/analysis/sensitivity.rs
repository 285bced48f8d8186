//! Spot x volatility price heatmaps
//!
//! Rows are volatility levels, columns are spot levels. The spot window
//! depends on the option type: calls are swept from spot up to 5% above it,
//! puts from 5% below up to spot.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::linspace;
use crate::config::SensitivityConfig;
use crate::core::{MarketParameters, OptionType};
use crate::models::black_scholes::{self, round_to};

/// Price grid for one option type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityMatrix {
    pub option_type: OptionType,
    /// Row labels, rounded to 3 decimals
    pub volatilities: Vec<f64>,
    /// Column labels, truncated to whole numbers
    pub spots: Vec<i64>,
    /// Prices rounded to 1 decimal, `[vol, spot]`
    pub prices: Array2<f64>,
}

impl SensitivityMatrix {
    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.prices.dim()
    }

    pub fn price_at(&self, row: usize, col: usize) -> Option<f64> {
        self.prices.get([row, col]).copied()
    }

    /// Smallest and largest cell, for colour scaling
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.prices.iter().fold(None, |acc, &p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
        })
    }
}

/// Price heatmap with the default 10x10 axes
pub fn sensitivity_grid(params: &MarketParameters, option_type: OptionType) -> SensitivityMatrix {
    sensitivity_grid_with(params, option_type, &SensitivityConfig::default())
}

pub fn sensitivity_grid_with(
    params: &MarketParameters,
    option_type: OptionType,
    config: &SensitivityConfig,
) -> SensitivityMatrix {
    let volatilities: Vec<f64> = linspace(config.vol_min, config.vol_max, config.vol_points)
        .into_iter()
        .map(|v| round_to(v, 3))
        .collect();

    let (min_spot, max_spot) = config.window(option_type).bounds(params.spot);
    let spots: Vec<i64> = linspace(min_spot, max_spot, config.spot_points)
        .into_iter()
        .map(|s| s.trunc() as i64)
        .collect();

    let mut prices = Array2::zeros((volatilities.len(), spots.len()));
    for (row, &vol) in volatilities.iter().enumerate() {
        for (col, &spot) in spots.iter().enumerate() {
            let point = params.with_spot(spot as f64).with_volatility(vol);
            prices[[row, col]] = round_to(black_scholes::price(&point, option_type), 1);
        }
    }

    tracing::debug!(
        "Built {} sensitivity grid {}x{} over spot [{}, {}]",
        option_type,
        volatilities.len(),
        spots.len(),
        min_spot,
        max_spot
    );

    SensitivityMatrix {
        option_type,
        volatilities,
        spots,
        prices,
    }
}
