//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing
//! - Greeks computation (closed form)
//!
//! All functions are pure. Inputs the closed form cannot evaluate (expired,
//! zero volatility, non-positive prices) yield [`Valuation::Degenerate`];
//! [`price`] reports those as a price of exactly 0.0.

use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::erfc;

use crate::core::{Greeks, MarketParameters, OptionType, Valuation, DAYS_PER_YEAR};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Black-Scholes d1 and d2
///
/// Not guarded: T = 0 or zero volatility give non-finite values.
pub fn d1_d2(params: &MarketParameters) -> (f64, f64) {
    let MarketParameters {
        rate,
        spot,
        strike,
        time,
        volatility,
    } = *params;

    let vol_sqrt_t = volatility * time.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * time) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Black-Scholes European option price, rounded to 3 decimals
pub fn try_price(params: &MarketParameters, option_type: OptionType) -> Valuation<f64> {
    if !params.is_well_formed() {
        return Valuation::Degenerate;
    }

    let (d1, d2) = d1_d2(params);
    let discounted_strike = params.strike * (-params.rate * params.time).exp();

    let price = match option_type {
        OptionType::Call => params.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionType::Put => discounted_strike * norm_cdf(-d2) - params.spot * norm_cdf(-d1),
    };

    if !price.is_finite() {
        return Valuation::Degenerate;
    }
    Valuation::Computed(round_to(price, 3))
}

/// Black-Scholes price with degenerate inputs reported as 0.0
pub fn price(params: &MarketParameters, option_type: OptionType) -> f64 {
    try_price(params, option_type).unwrap_or(0.0)
}

/// Black-Scholes Greeks
///
/// Delta rounded to 3 decimals, theta per day to 4, vega and rho per 1% to
/// 3. Gamma is left at full precision.
pub fn greeks(params: &MarketParameters, option_type: OptionType) -> Valuation<Greeks> {
    if !params.is_well_formed() {
        return Valuation::Degenerate;
    }

    let MarketParameters {
        rate,
        spot,
        strike,
        time,
        volatility,
    } = *params;

    let (d1, d2) = d1_d2(params);
    let sqrt_t = time.sqrt();
    let pdf_d1 = norm_pdf(d1);
    let discounted_strike = strike * (-rate * time).exp();

    let delta = match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => -norm_cdf(-d1),
    };

    // Gamma (same for call and put)
    let gamma = pdf_d1 / (spot * volatility * sqrt_t);

    // Vega (same for call and put)
    let vega = spot * pdf_d1 * sqrt_t;

    let decay = -spot * pdf_d1 * volatility / (2.0 * sqrt_t);
    let (theta, rho) = match option_type {
        OptionType::Call => (
            decay - rate * discounted_strike * norm_cdf(d2),
            time * discounted_strike * norm_cdf(d2),
        ),
        OptionType::Put => (
            decay + rate * discounted_strike * norm_cdf(-d2),
            -time * discounted_strike * norm_cdf(-d2),
        ),
    };

    let greeks = Greeks::new(
        round_to(delta, 3),
        gamma,
        round_to(vega * 0.01, 3),
        round_to(theta / DAYS_PER_YEAR, 4),
        round_to(rho * 0.01, 3),
    );

    let finite = [greeks.delta, greeks.gamma, greeks.vega, greeks.theta, greeks.rho]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        return Valuation::Degenerate;
    }

    Valuation::Computed(greeks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nifty() -> MarketParameters {
        MarketParameters::new(0.06731, 25000.0, 25100.0, 15.0 / 365.0, 0.40)
    }

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-10);
        assert!((norm_cdf(1.96) - 0.975).abs() < 0.001);
        assert!((norm_cdf(-1.96) - 0.025).abs() < 0.001);
        assert!((norm_pdf(0.0) - 0.398_942_280_4).abs() < 1e-9);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(-29.15482, 4), -29.1548);
        assert_eq!(round_to(793.7747, 1), 793.8);
    }

    #[test]
    fn test_d1_d2() {
        let (d1, d2) = d1_d2(&nifty());
        assert!((d1 - 0.025_426_72).abs() < 1e-7);
        assert!((d2 + 0.055_661_76).abs() < 1e-7);
        assert!((d1 - d2 - 0.40 * (15.0f64 / 365.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_reference_prices() {
        let params = nifty();
        assert!((price(&params, OptionType::Call) - 793.775).abs() < 1e-9);
        assert!((price(&params, OptionType::Put) - 824.440).abs() < 1e-9);
    }

    #[test]
    fn test_reference_greeks() {
        let call = greeks(&nifty(), OptionType::Call).computed().unwrap();
        assert_eq!(call.delta, 0.51);
        assert!((call.gamma - 0.000_196_73).abs() < 1e-9);
        // Gamma keeps full precision
        assert_ne!(call.gamma, round_to(call.gamma, 3));
        assert_ne!(call.gamma, round_to(call.gamma, 6));
        assert_eq!(call.vega, 20.212);
        assert_eq!(call.theta, -29.1548);
        assert_eq!(call.rho, 4.915);

        let put = greeks(&nifty(), OptionType::Put).computed().unwrap();
        assert_eq!(put.delta, -0.49);
        assert_eq!(put.gamma, call.gamma);
        assert_eq!(put.vega, call.vega);
        assert_eq!(put.theta, -24.5389);
        assert_eq!(put.rho, -5.372);
    }

    #[test]
    fn test_put_call_parity() {
        let cases = [
            MarketParameters::new(0.05, 100.0, 100.0, 1.0, 0.20),
            MarketParameters::new(0.0, 100.0, 120.0, 0.25, 0.35),
            MarketParameters::new(-0.01, 50.0, 45.0, 2.0, 0.15),
            nifty(),
        ];

        for params in cases {
            let call = price(&params, OptionType::Call);
            let put = price(&params, OptionType::Put);
            let parity = params.spot - params.strike * (-params.rate * params.time).exp();
            assert!(
                (call - put - parity).abs() < 1.1e-3,
                "parity violated for {:?}",
                params
            );
        }
    }

    #[test]
    fn test_monotone_in_spot() {
        let base = MarketParameters::new(0.05, 100.0, 100.0, 0.5, 0.25);
        let mut last_call = f64::NEG_INFINITY;
        let mut last_put = f64::INFINITY;

        for i in 0..=80 {
            let params = base.with_spot(60.0 + i as f64);
            let call = price(&params, OptionType::Call);
            let put = price(&params, OptionType::Put);
            assert!(call >= last_call);
            assert!(put <= last_put);
            last_call = call;
            last_put = put;
        }
    }

    #[test]
    fn test_near_expiry_converges_to_intrinsic() {
        let near = MarketParameters::new(0.05, 110.0, 100.0, 1e-8, 0.2);

        for spot in [90.0, 110.0, 130.0] {
            let params = near.with_spot(spot);
            for option_type in OptionType::ALL {
                let intrinsic = option_type.intrinsic(spot, params.strike);
                assert!((price(&params, option_type) - intrinsic).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_vanishing_vol_flattens_gamma_and_vega() {
        let params = MarketParameters::new(0.05, 110.0, 100.0, 1.0, 1e-6);
        for option_type in OptionType::ALL {
            let g = greeks(&params, option_type).computed().unwrap();
            assert!(g.gamma.abs() < 1e-12);
            assert_eq!(g.vega, 0.0);
        }
    }

    #[test]
    fn test_expired_price_is_zero() {
        // T = 0 reports 0.0, not intrinsic value
        let params = MarketParameters::new(0.05, 120.0, 100.0, 0.0, 0.2);
        assert_eq!(price(&params, OptionType::Call), 0.0);
        assert_eq!(price(&params, OptionType::Put), 0.0);
        assert!(try_price(&params, OptionType::Call).is_degenerate());
        assert!(greeks(&params, OptionType::Call).is_degenerate());
    }

    #[test]
    fn test_degenerate_inputs() {
        let base = nifty();
        let bad = [
            base.with_volatility(0.0),
            base.with_time(-0.001),
            base.with_spot(0.0),
            MarketParameters { strike: -1.0, ..base },
            base.with_spot(f64::NAN),
        ];

        for params in bad {
            assert_eq!(price(&params, OptionType::Call), 0.0);
            assert_eq!(price(&params, OptionType::Put), 0.0);
            assert!(greeks(&params, OptionType::Put).is_degenerate());
        }
    }

    #[test]
    fn test_atm_greeks_signs() {
        let params = MarketParameters::new(0.05, 100.0, 100.0, 1.0, 0.20);
        let call = greeks(&params, OptionType::Call).computed().unwrap();
        let put = greeks(&params, OptionType::Put).computed().unwrap();

        assert!(call.delta > 0.5 && call.delta < 0.7);
        assert!(put.delta < 0.0 && put.delta > -0.5);
        assert!(call.gamma > 0.0);
        assert!(call.theta < 0.0);
        assert!(call.vega > 0.0);
        assert!(call.rho > 0.0 && put.rho < 0.0);
    }
}
