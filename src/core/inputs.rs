//! Raw calculator inputs
//!
//! The values a user types in: percentages for rate and volatility and a
//! calendar expiry. Converted to [`MarketParameters`] before pricing.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::error::{BSError, BSResult};
use super::maturity::year_fraction_with_cutoff;
use super::option::MarketParameters;
use crate::config::MarketConfig;
use crate::data::{spot_or_fallback, SpotSource};

/// Next strike strictly above spot on a grid of `step`
///
/// An exact multiple moves up a full step: 25000 -> 25100.
pub fn default_strike(spot: f64, step: f64) -> f64 {
    (step - spot.rem_euclid(step)) + spot
}

/// Inputs as entered on the calculator side bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionInputs {
    pub strike: f64,
    pub spot: f64,
    pub expiry: NaiveDate,
    /// Volatility in percent (0-100)
    pub volatility_pct: f64,
    /// Risk-free rate in percent (0-100)
    pub rate_pct: f64,
}

impl OptionInputs {
    /// Side bar defaults for a given spot
    pub fn with_defaults(spot: f64, today: NaiveDate) -> Self {
        Self::with_config(spot, today, &MarketConfig::default())
    }

    /// Side bar defaults around the spot a source reports
    ///
    /// A failing source falls back to `config.fallback_spot`.
    pub fn from_source(source: &dyn SpotSource, today: NaiveDate, config: &MarketConfig) -> Self {
        let spot = spot_or_fallback(source, config.fallback_spot);
        Self::with_config(spot, today, config)
    }

    pub fn with_config(spot: f64, today: NaiveDate, config: &MarketConfig) -> Self {
        Self {
            strike: default_strike(spot, config.strike_step),
            spot,
            expiry: today + Duration::days(config.expiry_days),
            volatility_pct: config.volatility_pct,
            rate_pct: config.rate_pct,
        }
    }

    /// Check ranges the side bar enforces
    pub fn validate(&self) -> BSResult<()> {
        check_percent("volatility", self.volatility_pct)?;
        check_percent("risk-free rate", self.rate_pct)?;

        if !self.spot.is_finite() {
            return Err(BSError::invalid_input(format!("spot {} is not finite", self.spot)));
        }
        if !self.strike.is_finite() {
            return Err(BSError::invalid_input(format!(
                "strike {} is not finite",
                self.strike
            )));
        }
        Ok(())
    }

    /// Model parameters with the default 15:30 close
    pub fn to_params(&self, now: NaiveDateTime) -> BSResult<MarketParameters> {
        self.to_params_with(now, &MarketConfig::default())
    }

    pub fn to_params_with(
        &self,
        now: NaiveDateTime,
        config: &MarketConfig,
    ) -> BSResult<MarketParameters> {
        self.validate()?;

        let time = year_fraction_with_cutoff(self.expiry, now, config.close_hours);
        let params = MarketParameters::new(
            self.rate_pct / 100.0,
            self.spot,
            self.strike,
            time,
            self.volatility_pct / 100.0,
        );

        tracing::debug!(?params, "Derived market parameters");
        Ok(params)
    }
}

fn check_percent(name: &str, value: f64) -> BSResult<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(BSError::invalid_input(format!(
            "{} {}% outside [0, 100]",
            name, value
        )));
    }
    Ok(())
}
