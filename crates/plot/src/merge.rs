//! Merging decoded trade and quote lists into one ordered event stream.

use ordered_float::OrderedFloat;
use tickplot_core::{Event, Quote, Trade};

/// Merge trades and quotes into a single sequence ordered ascending by
/// time of day.
///
/// No deduplication and no time-window filtering happen here; the window
/// is applied during classification so the merge stays a pure sort.
///
/// Ties are deterministic: the sort is stable and trades are appended
/// before quotes, so at an identical timestamp a trade precedes a quote,
/// and records from the same table keep their input order.
pub fn merge_events(trades: Vec<Trade>, quotes: Vec<Quote>) -> Vec<Event> {
    let mut events: Vec<Event> = Vec::with_capacity(trades.len() + quotes.len());
    events.extend(trades.into_iter().map(Event::Trade));
    events.extend(quotes.into_iter().map(Event::Quote));
    events.sort_by_key(|e| OrderedFloat(e.time()));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn make_trade(time: f64, size: u64) -> Trade {
        Trade {
            time,
            price: Decimal::from(100),
            size,
        }
    }

    fn make_quote(time: f64) -> Quote {
        Quote {
            time,
            bid_px: Decimal::from(99),
            bid_sz: 1,
            ask_px: Decimal::from(101),
            ask_sz: 1,
        }
    }

    #[test]
    fn test_merge_sorts_by_time() {
        let events = merge_events(
            vec![make_trade(10.0, 1), make_trade(5.0, 2)],
            vec![make_quote(7.5)],
        );
        let times: Vec<f64> = events.iter().map(Event::time).collect();
        assert_eq!(times, vec![5.0, 7.5, 10.0]);
    }

    #[test]
    fn test_merge_tie_puts_trade_before_quote() {
        let events = merge_events(vec![make_trade(5.0, 1)], vec![make_quote(5.0)]);
        assert!(events[0].is_trade());
        assert!(!events[1].is_trade());
    }

    #[test]
    fn test_merge_keeps_input_order_within_table() {
        // Two trades at the same instant stay in input order (stable sort).
        let events = merge_events(
            vec![make_trade(10.0, 1), make_trade(5.0, 2), make_trade(5.0, 3)],
            vec![],
        );
        match (&events[0], &events[1], &events[2]) {
            (Event::Trade(a), Event::Trade(b), Event::Trade(c)) => {
                assert_eq!(a.size, 2);
                assert_eq!(b.size, 3);
                assert_eq!(c.size, 1);
            }
            _ => panic!("expected three trades"),
        }
    }

    #[test]
    fn test_merge_empty_inputs() {
        assert!(merge_events(vec![], vec![]).is_empty());
        assert_eq!(merge_events(vec![make_trade(1.0, 1)], vec![]).len(), 1);
    }
}
