//! Core types and configuration for the tick-plot system.
//!
//! This crate provides shared types used across all other crates:
//! - Market data types (trades, quotes, merged events)
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::PlotConfig;
pub use error::{Error, Result};
pub use types::*;
