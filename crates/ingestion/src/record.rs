//! Decoding raw delimited records into typed trades and quotes.
//!
//! Both tables are comma-delimited with a fixed column layout. Only a
//! handful of columns matter here; the rest (date, symbol, transaction
//! type, sequence number, exchange) are ignored.

use rust_decimal::Decimal;
use tickplot_core::config::FilterConfig;
use tickplot_core::{Error, Quote, Result, Trade};

use crate::codec::{parse_time, price_from_scaled};

/// Number of columns in a trade record.
pub const TRADE_FIELD_COUNT: usize = 11;
/// Number of columns in a quote record.
pub const QUOTE_FIELD_COUNT: usize = 14;

// Trade table columns.
const T_TIME: usize = 1;
const T_CONDITION: usize = 5;
const T_SCALE: usize = 6;
const T_PRICE: usize = 9;
const T_SIZE: usize = 10;

// Quote table columns.
const Q_TIME: usize = 1;
const Q_SCALE: usize = 6;
const Q_BID_PRICE: usize = 9;
const Q_BID_SIZE: usize = 10;
const Q_ASK_PRICE: usize = 12;
const Q_ASK_SIZE: usize = 13;

/// Membership test for non-regular trade condition codes.
///
/// Trades carrying an excluded condition (out-of-sequence, derivatively
/// priced, average price, ...) are dropped at decode time.
#[derive(Debug, Clone)]
pub struct ConditionFilter {
    excluded: Vec<u16>,
}

impl ConditionFilter {
    /// Build a filter from configuration.
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            excluded: config.excluded_conditions.clone(),
        }
    }

    /// Is this a regular (plottable) trade condition?
    #[inline]
    pub fn is_regular(&self, condition: u16) -> bool {
        !self.excluded.contains(&condition)
    }
}

impl Default for ConditionFilter {
    fn default() -> Self {
        Self::new(&FilterConfig::default())
    }
}

fn parse_int<T: std::str::FromStr>(fields: &[&str], index: usize, what: &str) -> Result<T> {
    fields[index]
        .trim()
        .parse()
        .map_err(|_| Error::decode(format!("bad {what} field {:?}", fields[index])))
}

fn parse_price(fields: &[&str], index: usize, scale: u32, what: &str) -> Result<Decimal> {
    let raw: i64 = parse_int(fields, index, what)?;
    price_from_scaled(raw, scale)
}

/// Decode one trade record.
///
/// Returns `Ok(None)` when the trade's condition code is excluded by the
/// filter. The caller must have verified the field count already.
pub fn decode_trade(fields: &[&str], filter: &ConditionFilter) -> Result<Option<Trade>> {
    debug_assert_eq!(fields.len(), TRADE_FIELD_COUNT);

    let condition: u16 = parse_int(fields, T_CONDITION, "condition")?;
    if !filter.is_regular(condition) {
        return Ok(None);
    }

    let time = parse_time(fields[T_TIME])?;
    let scale: u32 = parse_int(fields, T_SCALE, "price scale")?;
    let price = parse_price(fields, T_PRICE, scale, "trade price")?;
    let size: u64 = parse_int(fields, T_SIZE, "trade size")?;

    Ok(Some(Trade { time, price, size }))
}

/// Decode one quote record.
///
/// The caller must have verified the field count already.
pub fn decode_quote(fields: &[&str]) -> Result<Quote> {
    debug_assert_eq!(fields.len(), QUOTE_FIELD_COUNT);

    let time = parse_time(fields[Q_TIME])?;
    let scale: u32 = parse_int(fields, Q_SCALE, "price scale")?;
    let bid_px = parse_price(fields, Q_BID_PRICE, scale, "bid price")?;
    let bid_sz: u64 = parse_int(fields, Q_BID_SIZE, "bid size")?;
    let ask_px = parse_price(fields, Q_ASK_PRICE, scale, "ask price")?;
    let ask_sz: u64 = parse_int(fields, Q_ASK_SIZE, "ask size")?;

    Ok(Quote {
        time,
        bid_px,
        bid_sz,
        ask_px,
        ask_sz,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    const TRADE_LINE: &str = "20240105,09:31:00.000,XYZ,T,1,1,2,100,N,10000,50";
    const QUOTE_LINE: &str = "20240105,09:30:00.000,XYZ,Q,1,0,2,99,N,9999,10,N,10000,20";

    fn fields(line: &str) -> Vec<&str> {
        line.split(',').collect()
    }

    #[test]
    fn test_decode_trade() {
        let trade = decode_trade(&fields(TRADE_LINE), &ConditionFilter::default())
            .unwrap()
            .unwrap();
        assert_relative_eq!(trade.time, 34_260.0);
        assert_eq!(trade.price, dec!(100.00));
        assert_eq!(trade.size, 50);
    }

    #[test]
    fn test_decode_trade_excluded_condition() {
        // Condition 4 (derivatively priced) is in the exclusion table.
        let line = TRADE_LINE.replace(",T,1,1,", ",T,1,4,");
        let decoded = decode_trade(&fields(&line), &ConditionFilter::default()).unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn test_decode_trade_bad_time() {
        let line = TRADE_LINE.replace("09:31:00.000", "093100");
        let err = decode_trade(&fields(&line), &ConditionFilter::default()).unwrap_err();
        assert!(matches!(err, Error::Time(_)));
    }

    #[test]
    fn test_decode_quote() {
        let quote = decode_quote(&fields(QUOTE_LINE)).unwrap();
        assert_relative_eq!(quote.time, 34_200.0);
        assert_eq!(quote.bid_px, dec!(99.99));
        assert_eq!(quote.bid_sz, 10);
        assert_eq!(quote.ask_px, dec!(100.00));
        assert_eq!(quote.ask_sz, 20);
    }

    #[test]
    fn test_condition_filter() {
        let filter = ConditionFilter::default();
        assert!(filter.is_regular(0));
        assert!(filter.is_regular(1));
        assert!(!filter.is_regular(2));
        assert!(!filter.is_regular(145));
        assert!(filter.is_regular(146));
    }
}
