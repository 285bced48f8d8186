//! Option Greeks
//!
//! First and second order sensitivities, scaled the way they are displayed:
//! theta per calendar day, vega and rho per 1% move.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::BSError;

/// Read a float that may have been written as `null`
///
/// serde_json writes NaN as `null`; this reads it back as NaN so degenerate
/// placeholders survive a JSON round trip.
pub fn nan_from_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Option Greeks (sensitivities)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    #[serde(deserialize_with = "nan_from_null")]
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    #[serde(deserialize_with = "nan_from_null")]
    pub gamma: f64,
    /// Vega: dV/dσ (per 1% vol move)
    #[serde(deserialize_with = "nan_from_null")]
    pub vega: f64,
    /// Theta: dV/dt (per calendar day)
    #[serde(deserialize_with = "nan_from_null")]
    pub theta: f64,
    /// Rho: dV/dr (per 1% rate move)
    #[serde(deserialize_with = "nan_from_null")]
    pub rho: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, vega: f64, theta: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }

    /// Placeholder shown where the model could not be evaluated
    pub fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    /// Single component by kind
    pub fn get(&self, kind: GreekKind) -> f64 {
        match kind {
            GreekKind::Delta => self.delta,
            GreekKind::Gamma => self.gamma,
            GreekKind::Vega => self.vega,
            GreekKind::Theta => self.theta,
            GreekKind::Rho => self.rho,
        }
    }
}

/// Name of a single Greek
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreekKind {
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

impl GreekKind {
    /// Row order of the Greek summary table
    pub const SUMMARY_ORDER: [GreekKind; 5] = [
        GreekKind::Delta,
        GreekKind::Gamma,
        GreekKind::Vega,
        GreekKind::Theta,
        GreekKind::Rho,
    ];

    /// Order in which Greek charts are laid out
    pub const CHART_ORDER: [GreekKind; 5] = [
        GreekKind::Delta,
        GreekKind::Gamma,
        GreekKind::Theta,
        GreekKind::Vega,
        GreekKind::Rho,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GreekKind::Delta => "delta",
            GreekKind::Gamma => "gamma",
            GreekKind::Vega => "vega",
            GreekKind::Theta => "theta",
            GreekKind::Rho => "rho",
        }
    }

    /// Capitalized label, e.g. "Delta"
    pub fn label(&self) -> &'static str {
        match self {
            GreekKind::Delta => "Delta",
            GreekKind::Gamma => "Gamma",
            GreekKind::Vega => "Vega",
            GreekKind::Theta => "Theta",
            GreekKind::Rho => "Rho",
        }
    }
}

impl fmt::Display for GreekKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GreekKind {
    type Err = BSError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delta" => Ok(GreekKind::Delta),
            "gamma" => Ok(GreekKind::Gamma),
            "vega" => Ok(GreekKind::Vega),
            "theta" => Ok(GreekKind::Theta),
            "rho" => Ok(GreekKind::Rho),
            other => Err(BSError::invalid_argument(format!(
                "unknown greek '{}', expected one of delta, gamma, vega, theta, rho",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_kind() {
        let g = Greeks::new(0.5, 0.01, 0.2, -0.03, 0.1);
        assert_eq!(g.get(GreekKind::Delta), 0.5);
        assert_eq!(g.get(GreekKind::Gamma), 0.01);
        assert_eq!(g.get(GreekKind::Vega), 0.2);
        assert_eq!(g.get(GreekKind::Theta), -0.03);
        assert_eq!(g.get(GreekKind::Rho), 0.1);
    }

    #[test]
    fn test_nan_survives_json() {
        let json = serde_json::to_string(&Greeks::nan()).unwrap();
        assert!(json.contains("null"));

        let back: Greeks = serde_json::from_str(&json).unwrap();
        assert!(back.delta.is_nan());
        assert!(back.rho.is_nan());

        let g = Greeks::new(0.5, 0.01, 0.2, -0.03, 0.1);
        let back: Greeks = serde_json::from_str(&serde_json::to_string(&g).unwrap()).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn test_parse_kind() {
        for kind in GreekKind::SUMMARY_ORDER {
            assert_eq!(kind.name().parse::<GreekKind>().unwrap(), kind);
        }
        assert!(matches!(
            "vanna".parse::<GreekKind>(),
            Err(BSError::InvalidArgument(_))
        ));
        // Names are matched exactly
        assert!("Delta".parse::<GreekKind>().is_err());
    }
}
