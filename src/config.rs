//! Calculator configuration
//!
//! Every default reproduces the dashboard's fixed constants, so
//! `CalculatorConfig::default()` gives the standard 10x10 heatmaps and
//! 200-point Greek curves. Settings can be overridden from a JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{BSError, BSResult, OptionType, MARKET_CLOSE_HOURS};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Spot x volatility price heatmaps
    pub sensitivity: SensitivityConfig,
    /// Greek vs spot curves
    pub curve: CurveConfig,
    /// Input defaults and market conventions
    pub market: MarketConfig,
}

impl CalculatorConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> BSResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;

        let config: CalculatorConfig =
            serde_json::from_str(&json).map_err(|e| BSError::Serialization(e.to_string()))?;
        config.validate()?;

        tracing::info!("Loaded calculator config from {:?}", path);
        Ok(config)
    }

    /// Write as pretty JSON
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> BSResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BSError::Serialization(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> BSResult<()> {
        self.sensitivity.validate()?;
        self.curve.validate()?;
        self.market.validate()
    }
}

/// Spot window as multiples of the current spot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotWindow {
    pub lower: f64,
    pub upper: f64,
}

impl SpotWindow {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Absolute bounds around a spot
    pub fn bounds(&self, spot: f64) -> (f64, f64) {
        (spot * self.lower, spot * self.upper)
    }

    fn validate(&self, what: &str) -> BSResult<()> {
        if !(self.lower.is_finite() && self.upper.is_finite()) || self.lower <= 0.0 {
            return Err(BSError::config(format!(
                "{} window must be positive and finite",
                what
            )));
        }
        if self.lower > self.upper {
            return Err(BSError::config(format!(
                "{} window lower bound {} exceeds upper bound {}",
                what, self.lower, self.upper
            )));
        }
        Ok(())
    }
}

/// Heatmap axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensitivityConfig {
    /// Lowest volatility row (decimal)
    /// Default: 0.01
    pub vol_min: f64,
    /// Highest volatility row (decimal)
    /// Default: 0.60
    pub vol_max: f64,
    /// Number of volatility rows
    /// Default: 10
    pub vol_points: usize,
    /// Number of spot columns
    /// Default: 10
    pub spot_points: usize,
    /// Call spot window. Default: [1.00, 1.05]
    pub call_window: SpotWindow,
    /// Put spot window. Default: [0.95, 1.00]
    pub put_window: SpotWindow,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            vol_min: 0.01,
            vol_max: 0.60,
            vol_points: 10,
            spot_points: 10,
            call_window: SpotWindow::new(1.00, 1.05),
            put_window: SpotWindow::new(0.95, 1.00),
        }
    }
}

impl SensitivityConfig {
    /// Spot window for an option type
    ///
    /// Calls look above spot and puts below it.
    pub fn window(&self, option_type: OptionType) -> SpotWindow {
        match option_type {
            OptionType::Call => self.call_window,
            OptionType::Put => self.put_window,
        }
    }

    fn validate(&self) -> BSResult<()> {
        if self.vol_points == 0 || self.spot_points == 0 {
            return Err(BSError::config("sensitivity grid needs at least one point per axis"));
        }
        if !(self.vol_min.is_finite() && self.vol_max.is_finite()) || self.vol_min > self.vol_max {
            return Err(BSError::config(format!(
                "invalid volatility range [{}, {}]",
                self.vol_min, self.vol_max
            )));
        }
        self.call_window.validate("call")?;
        self.put_window.validate("put")
    }
}

/// Greek curve sampling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Spot window, shared by calls and puts. Default: [0.92, 1.09]
    pub window: SpotWindow,
    /// Number of samples. Default: 200
    pub points: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            window: SpotWindow::new(0.92, 1.09),
            points: 200,
        }
    }
}

impl CurveConfig {
    fn validate(&self) -> BSResult<()> {
        if self.points == 0 {
            return Err(BSError::config("curve needs at least one point"));
        }
        self.window.validate("curve")
    }
}

/// Input defaults and market conventions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Spot used when the market-data source fails
    pub fallback_spot: f64,
    /// Strike grid spacing for the default strike
    pub strike_step: f64,
    /// Same-day expiry cutoff in hours after midnight
    pub close_hours: f64,
    /// Default days to expiry
    pub expiry_days: i64,
    /// Default volatility in percent
    pub volatility_pct: f64,
    /// Default risk-free rate in percent
    pub rate_pct: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            fallback_spot: 25000.0,
            strike_step: 100.0,
            close_hours: MARKET_CLOSE_HOURS,
            expiry_days: 15,
            volatility_pct: 40.0,
            rate_pct: 6.731,
        }
    }
}

impl MarketConfig {
    fn validate(&self) -> BSResult<()> {
        if !(self.fallback_spot.is_finite() && self.fallback_spot > 0.0) {
            return Err(BSError::config("fallback spot must be positive"));
        }
        if !(self.strike_step.is_finite() && self.strike_step > 0.0) {
            return Err(BSError::config("strike step must be positive"));
        }
        if !(0.0..=24.0).contains(&self.close_hours) {
            return Err(BSError::config(format!(
                "close hours {} outside a day",
                self.close_hours
            )));
        }
        if self.expiry_days < 0 {
            return Err(BSError::config("default expiry cannot be in the past"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = CalculatorConfig::default();
        assert!(config.validate().is_ok());

        assert_eq!(config.sensitivity.vol_points, 10);
        assert_eq!(config.sensitivity.spot_points, 10);
        assert_eq!(config.sensitivity.window(OptionType::Call), SpotWindow::new(1.0, 1.05));
        assert_eq!(config.sensitivity.window(OptionType::Put), SpotWindow::new(0.95, 1.0));
        assert_eq!(config.curve.points, 200);
        assert_eq!(config.market.fallback_spot, 25000.0);
        assert_eq!(config.market.close_hours, 15.5);
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("calculator.json");

        let mut config = CalculatorConfig::default();
        config.curve.points = 50;
        config.market.rate_pct = 5.0;
        config.save_json_file(&path).unwrap();

        let loaded = CalculatorConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{ "curve": { "points": 20 } }"#).unwrap();

        let loaded = CalculatorConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded.curve.points, 20);
        assert_eq!(loaded.curve.window, SpotWindow::new(0.92, 1.09));
        assert_eq!(loaded.sensitivity, SensitivityConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"{ "sensitivity": { "call_window": { "lower": 1.1, "upper": 1.0 } } }"#,
        )
        .unwrap();
        assert!(matches!(
            CalculatorConfig::from_json_file(&path),
            Err(BSError::Config(_))
        ));

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            CalculatorConfig::from_json_file(&path),
            Err(BSError::Serialization(_))
        ));

        assert!(matches!(
            CalculatorConfig::from_json_file(dir.path().join("missing.json")),
            Err(BSError::IO(_))
        ));
    }
}
