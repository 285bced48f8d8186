//! # BS Options - Black-Scholes Calculator
//!
//! European option prices and Greeks under the Black-Scholes closed form,
//! plus the sweeps a calculator dashboard displays.
//!
//! ## Key Components
//!
//! - **Black-Scholes**: prices and the five Greeks
//! - **Greek Summary**: both option types at one point
//! - **Sensitivity Grid**: spot x volatility price heatmaps
//! - **Greek Curves**: one Greek against spot
//! - **Inputs**: calendar expiry to year fraction, percent inputs to rates
//!
//! ## Usage
//!
//! ```rust
//! use bs_options::prelude::*;
//!
//! let params = MarketParameters::new(0.06731, 25000.0, 25100.0, 15.0 / 365.0, 0.40);
//!
//! let call = bs_price(&params, OptionType::Call);
//! let summary = summarize(&params);
//! let heatmap = sensitivity_grid(&params, OptionType::Put);
//! let curve = greek_curve(&params, OptionType::Call, GreekKind::Gamma);
//!
//! assert!(call > 0.0);
//! assert_eq!(heatmap.shape(), (10, 10));
//! assert_eq!(curve.points.len(), 200);
//! # let _ = summary;
//! ```
//!
//! ## Degenerate Inputs
//!
//! Parameters the closed form cannot evaluate (T <= 0, zero volatility,
//! non-positive prices) never raise an error. Greeks come back as
//! [`Valuation::Degenerate`](core::Valuation) and `price` reports 0.0, so a
//! page built from this crate always renders.
//!
//! ## What This Crate Does NOT Do
//!
//! - Fetch market data (see [`data::SpotSource`])
//! - Plot or style anything
//! - Price American options or invert implied volatility

pub mod analysis;
pub mod config;
pub mod core;
pub mod data;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        default_strike, year_fraction, year_fraction_with_cutoff, BSError,
        BSResult, GreekKind, Greeks, MarketParameters, OptionInputs, OptionType, Valuation,
    };

    // Configuration
    pub use crate::config::{CalculatorConfig, CurveConfig, MarketConfig, SensitivityConfig};

    // Data
    pub use crate::data::{spot_or_fallback, FixedSpot, SpotSource};

    // Models
    pub use crate::models::{
        d1_d2, greeks as bs_greeks, norm_cdf, norm_pdf, price as bs_price,
        try_price as bs_try_price,
    };

    // Sweeps
    pub use crate::analysis::{
        build_dashboard, build_dashboard_with, greek_curve, greek_curve_named, greek_curve_with,
        sensitivity_grid, sensitivity_grid_with, summarize, CurvePoint, DashboardReport,
        GreekCurveSeries, GreekSummary, SensitivityMatrix,
    };
}

// Re-export main types at crate root
pub use crate::core::{BSError, BSResult};
pub use crate::models::{greeks, price};
