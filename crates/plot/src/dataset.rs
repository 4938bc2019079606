//! Parallel plot series for the rendering collaborator.

use rust_decimal::Decimal;
use serde::Serialize;
use tickplot_core::config::RenderOptions;

/// One scatter series: parallel x/y/size arrays.
///
/// Indices are consistent within a series' own append order; they do not
/// line up positionally across different series.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Series {
    /// X positions (trade index or seconds of day, depending on axis mode).
    pub x: Vec<f64>,
    /// Prices.
    pub y: Vec<Decimal>,
    /// Marker areas.
    pub size: Vec<u32>,
}

impl Series {
    /// Append one point.
    pub fn push(&mut self, x: f64, y: Decimal, size: u32) {
        self.x.push(x);
        self.y.push(y);
        self.size.push(size);
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Is the series empty?
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Everything the renderer needs to draw one instrument's session.
///
/// White prints appear only in `trades`; red and green prints appear in
/// `trades` and in their color series. `bids` and `offers` hold the
/// prevailing quote sampled at each classified trade.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlotDataset {
    /// Every classified trade print.
    pub trades: Series,
    /// Prevailing bid at each classified trade.
    pub bids: Series,
    /// Prevailing offer at each classified trade.
    pub offers: Series,
    /// Prints that hit the bid.
    pub red_prints: Series,
    /// Prints that lifted the offer.
    pub green_prints: Series,
    /// Drawing hints, passed through untouched.
    pub render: RenderOptions,
}
