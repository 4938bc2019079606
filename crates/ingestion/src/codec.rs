//! Scaled-price and time-of-day conversions.
//!
//! Feed records carry prices as a raw integer plus a decimal scale, and
//! times as `HH:MM:SS.sss` strings. Prices must stay exact: downstream
//! classification compares a trade price against quote prices for
//! equality, so binary-fraction rounding is not acceptable.

use rust_decimal::Decimal;
use tickplot_core::{Error, Result, SecondsOfDay};

/// Convert a raw scaled price to an exact decimal: `raw / 10^scale`.
pub fn price_from_scaled(raw: i64, scale: u32) -> Result<Decimal> {
    Decimal::try_new(raw, scale)
        .map_err(|e| Error::decode(format!("bad scaled price {raw}e-{scale}: {e}")))
}

/// Convert split hour/minute/second components to seconds since midnight.
///
/// Seconds may carry a fractional part; hours and minutes are whole in
/// practice but the feed does not guarantee it, so all three are floats.
#[inline]
pub fn seconds_of_day(hours: f64, minutes: f64, seconds: f64) -> SecondsOfDay {
    seconds + minutes * 60.0 + hours * 3600.0
}

/// Parse an `HH:MM:SS[.sss]` time string into seconds since midnight.
///
/// The string must split on `:` into exactly three numeric components.
pub fn parse_time(time_str: &str) -> Result<SecondsOfDay> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 3 {
        return Err(Error::time(format!(
            "expected 3 colon-separated components, got {} in {time_str:?}",
            parts.len()
        )));
    }

    let mut nums = [0.0f64; 3];
    for (num, part) in nums.iter_mut().zip(&parts) {
        *num = part
            .trim()
            .parse()
            .map_err(|_| Error::time(format!("non-numeric component {part:?} in {time_str:?}")))?;
    }

    Ok(seconds_of_day(nums[0], nums[1], nums[2]))
}
