//! Option contract definitions
//!
//! Option type and the five market parameters a European option is priced from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BSError;

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Both option types, calls first
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = BSError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(BSError::invalid_argument(format!(
                "unknown option type '{}', expected Call or Put",
                other
            ))),
        }
    }
}

/// Market and contract inputs of the Black-Scholes model
///
/// Spot, strike, time and volatility are expected to be strictly positive,
/// the rate may be zero or negative. Nothing is rejected here: inputs the
/// model cannot evaluate come back as [`super::Valuation::Degenerate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters {
    /// Annualized risk-free rate (decimal)
    pub rate: f64,
    /// Spot price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    pub time: f64,
    /// Annualized volatility (decimal)
    pub volatility: f64,
}

impl MarketParameters {
    pub fn new(rate: f64, spot: f64, strike: f64, time: f64, volatility: f64) -> Self {
        Self {
            rate,
            spot,
            strike,
            time,
            volatility,
        }
    }

    /// Same parameters at a different spot
    pub fn with_spot(&self, spot: f64) -> Self {
        Self { spot, ..*self }
    }

    /// Same parameters at a different volatility
    pub fn with_volatility(&self, volatility: f64) -> Self {
        Self { volatility, ..*self }
    }

    /// Same parameters at a different time to maturity
    pub fn with_time(&self, time: f64) -> Self {
        Self { time, ..*self }
    }

    /// Whether the closed form is defined for these inputs
    pub fn is_well_formed(&self) -> bool {
        let finite = self.rate.is_finite()
            && self.spot.is_finite()
            && self.strike.is_finite()
            && self.time.is_finite()
            && self.volatility.is_finite();

        finite && self.spot > 0.0 && self.strike > 0.0 && self.time > 0.0 && self.volatility > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type() {
        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_parse_option_type() {
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(" PUT ".parse::<OptionType>().unwrap(), OptionType::Put);

        let err = "Straddle".parse::<OptionType>().unwrap_err();
        assert!(matches!(err, BSError::InvalidArgument(_)));
    }

    #[test]
    fn test_well_formed() {
        let params = MarketParameters::new(0.05, 100.0, 100.0, 1.0, 0.2);
        assert!(params.is_well_formed());

        // Negative rates are allowed
        assert!(params.with_time(0.5).is_well_formed());
        assert!(MarketParameters { rate: -0.01, ..params }.is_well_formed());

        assert!(!params.with_time(0.0).is_well_formed());
        assert!(!params.with_volatility(0.0).is_well_formed());
        assert!(!params.with_spot(-1.0).is_well_formed());
        assert!(!params.with_spot(f64::NAN).is_well_formed());
    }
}
