//! Time to maturity
//!
//! Converts a calendar expiry into a year fraction on a 365-day year.
//! Same-day expiries decay intraday towards a fixed market close.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Market close in hours after midnight (15:30 local)
pub const MARKET_CLOSE_HOURS: f64 = 15.5;

/// Days per year used for year fractions
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Current time of day as fractional hours
pub fn hour_fraction(now: NaiveDateTime) -> f64 {
    now.hour() as f64 + now.minute() as f64 / 60.0 + now.second() as f64 / 3600.0
}

/// Year fraction to expiry with the default 15:30 close
pub fn year_fraction(expiry: NaiveDate, now: NaiveDateTime) -> f64 {
    year_fraction_with_cutoff(expiry, now, MARKET_CLOSE_HOURS)
}

/// Year fraction to expiry with an explicit same-day cutoff
///
/// After the cutoff on expiry day the result is negative; pricing then
/// takes the degenerate path.
pub fn year_fraction_with_cutoff(expiry: NaiveDate, now: NaiveDateTime, cutoff_hours: f64) -> f64 {
    let today = now.date();

    if expiry == today {
        let remaining = cutoff_hours - hour_fraction(now);
        let t = remaining / (24.0 * DAYS_PER_YEAR);
        tracing::debug!("Same-day expiry, {:.3}h to close, T = {:.8}", remaining, t);
        return t;
    }

    let days = (expiry - today).num_days();
    if days < 0 {
        tracing::debug!("Expiry {} is {} days in the past", expiry, -days);
    }
    days as f64 / DAYS_PER_YEAR
}
