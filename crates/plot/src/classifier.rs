//! Print coloring against the prevailing quote.
//!
//! A single forward pass over the merged event stream: quotes update the
//! prevailing-quote state, trades are emitted as colored points against
//! the quote in force just before them.

use rust_decimal::Decimal;
use tickplot_core::config::TimeWindow;
use tickplot_core::{Event, PlotConfig, PrintColor, Quote, Trade};

use crate::area::size_to_area;
use crate::dataset::PlotDataset;

/// The last quote seen in the stream, all four fields written together.
#[derive(Debug, Clone, Copy)]
struct QuoteState {
    bid_px: Decimal,
    bid_sz: u64,
    ask_px: Decimal,
    ask_sz: u64,
}

impl QuoteState {
    fn from_quote(quote: &Quote) -> Self {
        Self {
            bid_px: quote.bid_px,
            bid_sz: quote.bid_sz,
            ask_px: quote.ask_px,
            ask_sz: quote.ask_sz,
        }
    }
}

/// Counters describing one classification pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyStats {
    /// Quotes that updated the prevailing-quote state.
    pub quotes_applied: u64,
    /// Prints colored red (at the bid).
    pub red_prints: u64,
    /// Prints colored green (at the offer).
    pub green_prints: u64,
    /// Prints left white (away from both sides).
    pub white_prints: u64,
    /// Trades skipped because no quote had been seen yet.
    pub trades_before_first_quote: u64,
    /// Events dropped by the time window.
    pub outside_window: u64,
}

impl ClassifyStats {
    /// Total trades emitted to the dataset.
    pub fn classified_trades(&self) -> u64 {
        self.red_prints + self.green_prints + self.white_prints
    }
}

/// Stateful single-pass classifier over a merged event stream.
pub struct PrintClassifier {
    window: TimeWindow,
    uniform_intervals: bool,
    last_quote: Option<QuoteState>,
    x_index: u64,
    dataset: PlotDataset,
    stats: ClassifyStats,
}

impl PrintClassifier {
    /// Create a classifier for one pass.
    pub fn new(config: &PlotConfig) -> Self {
        let dataset = PlotDataset {
            render: config.render,
            ..PlotDataset::default()
        };
        Self {
            window: config.window,
            uniform_intervals: config.uniform_time_intervals,
            last_quote: None,
            x_index: 0,
            dataset,
            stats: ClassifyStats::default(),
        }
    }

    /// Process one event in stream order.
    pub fn process(&mut self, event: &Event) {
        let time = event.time();
        if !self.window.contains(time) {
            self.stats.outside_window += 1;
            return;
        }

        match event {
            Event::Quote(quote) => {
                self.last_quote = Some(QuoteState::from_quote(quote));
                self.stats.quotes_applied += 1;
            }
            Event::Trade(trade) => self.process_trade(trade, time),
        }
    }

    fn process_trade(&mut self, trade: &Trade, time: f64) {
        // A trade before the first quote has nothing to be colored
        // against; it is dropped without advancing the x index.
        let Some(quote) = self.last_quote else {
            self.stats.trades_before_first_quote += 1;
            return;
        };

        let x = if self.uniform_intervals {
            self.x_index as f64
        } else {
            time
        };

        // The prevailing quote, sampled at this trade's x position.
        self.dataset
            .bids
            .push(x, quote.bid_px, size_to_area(quote.bid_sz));
        self.dataset
            .offers
            .push(x, quote.ask_px, size_to_area(quote.ask_sz));

        let area = size_to_area(trade.size);
        self.dataset.trades.push(x, trade.price, area);

        // Bid is checked first: in a locked or crossed market where the
        // trade price matches both sides, the print is red.
        match classify_print(trade.price, &quote) {
            PrintColor::Red => {
                self.dataset.red_prints.push(x, trade.price, area);
                self.stats.red_prints += 1;
            }
            PrintColor::Green => {
                self.dataset.green_prints.push(x, trade.price, area);
                self.stats.green_prints += 1;
            }
            PrintColor::White => {
                self.stats.white_prints += 1;
            }
        }

        // One step per emitted trade, whatever its color.
        self.x_index += 1;
    }

    /// Counters for the pass so far.
    pub fn stats(&self) -> &ClassifyStats {
        &self.stats
    }

    /// Next x position in uniform-interval mode; equals the number of
    /// trades emitted so far.
    pub fn x_index(&self) -> u64 {
        self.x_index
    }

    /// Finish the pass and hand over the assembled dataset.
    pub fn finish(self) -> PlotDataset {
        self.dataset
    }
}

fn classify_print(price: Decimal, quote: &QuoteState) -> PrintColor {
    if price == quote.bid_px {
        PrintColor::Red
    } else if price == quote.ask_px {
        PrintColor::Green
    } else {
        PrintColor::White
    }
}

/// Run a full classification pass over an already-merged event stream.
pub fn classify_all(config: &PlotConfig, events: &[Event]) -> PlotDataset {
    let mut classifier = PrintClassifier::new(config);
    for event in events {
        classifier.process(event);
    }
    classifier.finish()
}
