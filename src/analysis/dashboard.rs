//! Dashboard payload
//!
//! Everything the calculator page shows for one set of inputs: both
//! premiums, the Greek table, one heatmap per option type and a curve for
//! every Greek of both option types.

use serde::{Deserialize, Serialize};

use super::curve::{greek_curve_with, GreekCurveSeries};
use super::sensitivity::{sensitivity_grid_with, SensitivityMatrix};
use super::summary::{summarize, GreekSummary};
use crate::config::CalculatorConfig;
use crate::core::{BSError, BSResult, GreekKind, MarketParameters, OptionType};
use crate::models::black_scholes;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub params: MarketParameters,
    pub call_price: f64,
    pub put_price: f64,
    pub summary: GreekSummary,
    pub call_grid: SensitivityMatrix,
    pub put_grid: SensitivityMatrix,
    /// Calls then puts, Greeks in chart order
    pub curves: Vec<GreekCurveSeries>,
}

impl DashboardReport {
    pub fn price(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_price,
            OptionType::Put => self.put_price,
        }
    }

    pub fn grid(&self, option_type: OptionType) -> &SensitivityMatrix {
        match option_type {
            OptionType::Call => &self.call_grid,
            OptionType::Put => &self.put_grid,
        }
    }

    pub fn curve(&self, option_type: OptionType, greek: GreekKind) -> Option<&GreekCurveSeries> {
        self.curves
            .iter()
            .find(|c| c.option_type == option_type && c.greek == greek)
    }

    pub fn to_json(&self) -> BSResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BSError::Serialization(e.to_string()))
    }
}

pub fn build_dashboard(params: &MarketParameters) -> DashboardReport {
    build_dashboard_with(params, &CalculatorConfig::default())
}

pub fn build_dashboard_with(params: &MarketParameters, config: &CalculatorConfig) -> DashboardReport {
    let call_price = black_scholes::price(params, OptionType::Call);
    let put_price = black_scholes::price(params, OptionType::Put);

    if black_scholes::try_price(params, OptionType::Call).is_degenerate() {
        tracing::warn!(?params, "Parameters outside the model domain, prices shown as 0");
    }

    let curves: Vec<GreekCurveSeries> = OptionType::ALL
        .into_iter()
        .flat_map(|option_type| {
            GreekKind::CHART_ORDER
                .into_iter()
                .map(move |greek| greek_curve_with(params, option_type, greek, &config.curve))
        })
        .collect();

    tracing::debug!(call_price, put_price, "Built dashboard");

    DashboardReport {
        params: *params,
        call_price,
        put_price,
        summary: summarize(params),
        call_grid: sensitivity_grid_with(params, OptionType::Call, &config.sensitivity),
        put_grid: sensitivity_grid_with(params, OptionType::Put, &config.sensitivity),
        curves,
    }
}
