//! Event reconciliation and print classification for the tick-plot system.
//!
//! This crate handles:
//! - Merging decoded trade and quote lists into one time-ordered stream
//! - Tracking the prevailing quote as trades occur
//! - Coloring each print by its relation to the bid/ask
//! - Size-to-area mapping for marker sizing
//! - Assembling the parallel series an external renderer consumes

pub mod area;
pub mod classifier;
pub mod dataset;
pub mod merge;

pub use area::size_to_area;
pub use classifier::{classify_all, ClassifyStats, PrintClassifier};
pub use dataset::{PlotDataset, Series};
pub use merge::merge_events;
