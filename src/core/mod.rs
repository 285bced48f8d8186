//! Core data types for Black-Scholes Options
//!
//! Defines fundamental types:
//! - OptionType, MarketParameters: what gets priced
//! - Greeks, GreekKind: sensitivities
//! - Valuation: computed or degenerate model output
//! - Maturity and raw inputs: calendar expiry to year fraction

pub mod error;
pub mod greeks;
pub mod inputs;
pub mod maturity;
pub mod option;
pub mod valuation;

pub use error::*;
pub use greeks::*;
pub use inputs::*;
pub use maturity::*;
pub use option::*;
pub use valuation::*;
