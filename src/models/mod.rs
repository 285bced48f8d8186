//! Pricing Models
//!
//! Implements:
//! - Black-Scholes (closed-form European prices and Greeks)

pub mod black_scholes;

pub use black_scholes::*;
