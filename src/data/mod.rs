//! Market data boundary
//!
//! Handles:
//! - Spot price sourcing with a fixed fallback

pub mod spot;

pub use spot::*;
