//! Record ingestion and decoding for the tick-plot system.
//!
//! This crate handles:
//! - Scaled-price and time-of-day conversions
//! - Decoding raw delimited trade/quote records into typed values
//! - Trade condition filtering
//! - Reading whole trade/quote tables from files

pub mod codec;
pub mod record;
pub mod reader;

pub use codec::{parse_time, price_from_scaled, seconds_of_day};
pub use reader::{read_quotes, read_quotes_file, read_trades, read_trades_file};
pub use record::ConditionFilter;
