//! Greek summary table

use serde::{Deserialize, Serialize};

use crate::core::{GreekKind, Greeks, MarketParameters, OptionType};
use crate::models::black_scholes;

/// Call and put Greeks at one parameter point
///
/// A side the model could not evaluate holds NaN in every row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GreekSummary {
    pub call: Greeks,
    pub put: Greeks,
}

impl GreekSummary {
    /// Column for an option type
    pub fn column(&self, option_type: OptionType) -> &Greeks {
        match option_type {
            OptionType::Call => &self.call,
            OptionType::Put => &self.put,
        }
    }

    /// Table rows as (greek, call, put) in Delta, Gamma, Vega, Theta, Rho order
    pub fn rows(&self) -> [(GreekKind, f64, f64); 5] {
        GreekKind::SUMMARY_ORDER.map(|kind| (kind, self.call.get(kind), self.put.get(kind)))
    }
}

/// Evaluate Greeks for both option types independently
pub fn summarize(params: &MarketParameters) -> GreekSummary {
    let column = |option_type| {
        black_scholes::greeks(params, option_type)
            .computed()
            .unwrap_or_else(Greeks::nan)
    };

    GreekSummary {
        call: column(OptionType::Call),
        put: column(OptionType::Put),
    }
}
