//! Greek vs spot curves

use serde::{Deserialize, Serialize};

use super::linspace;
use crate::config::CurveConfig;
use crate::core::{nan_from_null, BSResult, GreekKind, MarketParameters, OptionType};
use crate::models::black_scholes;

/// A single (spot, greek value) sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub spot: f64,
    #[serde(deserialize_with = "nan_from_null")]
    pub value: f64,
}

/// One Greek sampled across spot, plus the value at the current spot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreekCurveSeries {
    pub option_type: OptionType,
    pub greek: GreekKind,
    pub points: Vec<CurvePoint>,
    /// Marker at the unmodified spot
    pub current: CurvePoint,
}

impl GreekCurveSeries {
    /// Chart title, e.g. "Delta vs Spot Price (Call)"
    pub fn title(&self) -> String {
        format!("{} vs Spot Price ({})", self.greek.label(), self.option_type)
    }
}

fn greek_at(params: &MarketParameters, option_type: OptionType, greek: GreekKind) -> f64 {
    black_scholes::greeks(params, option_type)
        .map(|g| g.get(greek))
        .unwrap_or(f64::NAN)
}

/// Curve over [0.92, 1.09] x spot with 200 samples
pub fn greek_curve(
    params: &MarketParameters,
    option_type: OptionType,
    greek: GreekKind,
) -> GreekCurveSeries {
    greek_curve_with(params, option_type, greek, &CurveConfig::default())
}

/// Curve for a Greek given by name; unknown names are rejected
pub fn greek_curve_named(
    params: &MarketParameters,
    option_type: OptionType,
    greek: &str,
) -> BSResult<GreekCurveSeries> {
    let greek: GreekKind = greek.parse()?;
    Ok(greek_curve(params, option_type, greek))
}

pub fn greek_curve_with(
    params: &MarketParameters,
    option_type: OptionType,
    greek: GreekKind,
    config: &CurveConfig,
) -> GreekCurveSeries {
    let (min_spot, max_spot) = config.window.bounds(params.spot);

    let points = linspace(min_spot, max_spot, config.points)
        .into_iter()
        .map(|spot| CurvePoint {
            spot,
            value: greek_at(&params.with_spot(spot), option_type, greek),
        })
        .collect();

    let current = CurvePoint {
        spot: params.spot,
        value: greek_at(params, option_type, greek),
    };

    GreekCurveSeries {
        option_type,
        greek,
        points,
        current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BSError;

    fn nifty() -> MarketParameters {
        MarketParameters::new(0.06731, 25000.0, 25100.0, 15.0 / 365.0, 0.40)
    }

    #[test]
    fn test_curve_shape() {
        for option_type in OptionType::ALL {
            for greek in GreekKind::CHART_ORDER {
                let curve = greek_curve(&nifty(), option_type, greek);
                assert_eq!(curve.points.len(), 200);
                assert_eq!(curve.current.spot, 25000.0);
            }
        }
    }

    #[test]
    fn test_spot_window() {
        let curve = greek_curve(&nifty(), OptionType::Put, GreekKind::Delta);
        assert!((curve.points[0].spot - 23000.0).abs() < 1e-9);
        assert!((curve.points[199].spot - 27250.0).abs() < 1e-9);

        for pair in curve.points.windows(2) {
            assert!(pair[1].spot > pair[0].spot);
        }
    }

    #[test]
    fn test_marker_matches_model() {
        let params = nifty();
        let curve = greek_curve(&params, OptionType::Call, GreekKind::Theta);
        assert_eq!(curve.current.value, -29.1548);
        assert_eq!(curve.title(), "Theta vs Spot Price (Call)");
    }

    #[test]
    fn test_delta_curve_is_monotone() {
        let curve = greek_curve(&nifty(), OptionType::Call, GreekKind::Delta);
        for pair in curve.points.windows(2) {
            assert!(pair[1].value >= pair[0].value);
        }

        let put = greek_curve(&nifty(), OptionType::Put, GreekKind::Delta);
        assert!(put.points.iter().all(|p| p.value <= 0.0));
    }

    #[test]
    fn test_named_greek() {
        let curve = greek_curve_named(&nifty(), OptionType::Call, "vega").unwrap();
        assert_eq!(curve.greek, GreekKind::Vega);

        let err = greek_curve_named(&nifty(), OptionType::Call, "charm").unwrap_err();
        assert!(matches!(err, BSError::InvalidArgument(_)));
    }

    #[test]
    fn test_degenerate_points_are_nan() {
        let expired = nifty().with_time(0.0);
        let curve = greek_curve(&expired, OptionType::Call, GreekKind::Gamma);
        assert_eq!(curve.points.len(), 200);
        assert!(curve.points.iter().all(|p| p.value.is_nan()));
        assert!(curve.current.value.is_nan());
    }
}
