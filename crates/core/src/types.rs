//! Core data types for the tick-plot system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Time of day in seconds since midnight.
///
/// Feed timestamps carry fractional seconds, so this is a float rather
/// than an integer count.
pub type SecondsOfDay = f64;

/// A single trade (print) from the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Time of day in seconds.
    pub time: SecondsOfDay,
    /// Trade price, exact decimal.
    pub price: Decimal,
    /// Trade size (shares or contracts).
    pub size: u64,
}

/// A Level 1 quote (best bid/ask).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Time of day in seconds.
    pub time: SecondsOfDay,
    /// Best bid price.
    pub bid_px: Decimal,
    /// Best bid size.
    pub bid_sz: u64,
    /// Best ask price.
    pub ask_px: Decimal,
    /// Best ask size.
    pub ask_sz: u64,
}

impl Quote {
    /// Calculate mid price.
    #[inline]
    pub fn mid(&self) -> Decimal {
        (self.bid_px + self.ask_px) / Decimal::TWO
    }

    /// Calculate spread.
    #[inline]
    pub fn spread(&self) -> Decimal {
        self.ask_px - self.bid_px
    }
}

/// One entry of the merged trade/quote stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// A trade print.
    Trade(Trade),
    /// A best-bid/ask update.
    Quote(Quote),
}

impl Event {
    /// Time of day of the underlying record, in seconds.
    #[inline]
    pub fn time(&self) -> SecondsOfDay {
        match self {
            Event::Trade(t) => t.time,
            Event::Quote(q) => q.time,
        }
    }

    /// Is this a trade print?
    #[inline]
    pub fn is_trade(&self) -> bool {
        matches!(self, Event::Trade(_))
    }
}

/// Color class of a print relative to the prevailing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrintColor {
    /// Trade at the bid (seller-initiated, "hit the bid").
    Red,
    /// Trade at the offer (buyer-initiated, "lifted the offer").
    Green,
    /// Trade away from both sides of the quote.
    White,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_mid_and_spread() {
        let quote = Quote {
            time: 34200.0,
            bid_px: dec!(99.99),
            bid_sz: 10,
            ask_px: dec!(100.01),
            ask_sz: 20,
        };
        assert_eq!(quote.mid(), dec!(100.00));
        assert_eq!(quote.spread(), dec!(0.02));
    }

    #[test]
    fn test_event_time() {
        let event = Event::Trade(Trade {
            time: 35000.5,
            price: dec!(10),
            size: 1,
        });
        assert_eq!(event.time(), 35000.5);
        assert!(event.is_trade());
    }
}
