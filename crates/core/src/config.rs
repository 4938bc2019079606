//! Configuration structures for the tick-plot system.

use serde::{Deserialize, Serialize};

use crate::types::SecondsOfDay;

/// Trade condition codes excluded from plotting.
///
/// Taken from the feed vendor's condition-code table: out-of-sequence,
/// derivatively priced, average price and similar non-regular prints.
/// These are reference data, not derived values; keep them verbatim.
pub const EXCLUDED_TRADE_CONDITIONS: [u16; 20] = [
    2, 3, 4, 5, 13, 14, 16, 18, 30, 32, 34, 57, 58, 59, 63, 71, 72, 102, 105, 145,
];

/// Main configuration for the plotting pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Time-of-day window; events outside it are ignored.
    pub window: TimeWindow,
    /// If true, x positions are a per-trade counter instead of real time,
    /// giving every print equal visual spacing.
    pub uniform_time_intervals: bool,
    /// Trade condition filtering.
    pub filter: FilterConfig,
    /// Drawing hints passed through to the renderer.
    pub render: RenderOptions,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            window: TimeWindow::default(),
            uniform_time_intervals: true,
            filter: FilterConfig::default(),
            render: RenderOptions::default(),
        }
    }
}

/// Inclusive time-of-day window, in seconds since midnight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window start (inclusive).
    pub time_start: SecondsOfDay,
    /// Window end (inclusive).
    pub time_end: SecondsOfDay,
}

impl TimeWindow {
    /// Does the window contain the given time of day?
    #[inline]
    pub fn contains(&self, time: SecondsOfDay) -> bool {
        time >= self.time_start && time <= self.time_end
    }
}

impl Default for TimeWindow {
    /// 09:30:00 through 11:00:00.
    fn default() -> Self {
        Self {
            time_start: 34_200.0,
            time_end: 39_600.0,
        }
    }
}

/// Trade condition filtering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Condition codes whose trades are dropped at decode time.
    pub excluded_conditions: Vec<u16>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_conditions: EXCLUDED_TRADE_CONDITIONS.to_vec(),
        }
    }
}

/// Drawing hints for the rendering collaborator.
///
/// The core never acts on these; they ride along with the dataset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Connect trade prints with a line.
    pub connect_prints_with_line: bool,
    /// Connect quote points with a line.
    pub connect_quotes_with_line: bool,
}
