//! Model output that may be degenerate
//!
//! The closed form is undefined at T = 0, zero volatility and for
//! non-positive prices. Instead of an error, evaluations on such inputs come
//! back as `Degenerate` and callers pick how to render them.

use serde::{Deserialize, Serialize};

/// Result of a model evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Valuation<T> {
    /// Closed form evaluated to a finite value
    Computed(T),
    /// Inputs outside the domain of the closed form
    Degenerate,
}

impl<T> Valuation<T> {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Valuation::Degenerate)
    }

    /// Computed value, if any
    pub fn computed(self) -> Option<T> {
        match self {
            Valuation::Computed(value) => Some(value),
            Valuation::Degenerate => None,
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Valuation::Computed(value) => value,
            Valuation::Degenerate => fallback,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Valuation<U> {
        match self {
            Valuation::Computed(value) => Valuation::Computed(f(value)),
            Valuation::Degenerate => Valuation::Degenerate,
        }
    }
}
