//! Reading whole trade/quote tables.
//!
//! Each table is a text file, one record per line, no header row. A line
//! whose field count does not match the table's layout marks the end of
//! that table: reading stops and everything decoded so far is returned.
//! A line that has the right width but fails to decode (malformed time,
//! unparseable number) is reported and skipped; the batch continues.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tickplot_core::{Quote, Result, Trade};
use tracing::{debug, warn};

use crate::record::{
    decode_quote, decode_trade, ConditionFilter, QUOTE_FIELD_COUNT, TRADE_FIELD_COUNT,
};

/// Read a trade table, dropping trades with excluded condition codes.
pub fn read_trades<R: BufRead>(reader: R, filter: &ConditionFilter) -> Result<Vec<Trade>> {
    let mut trades = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let fields: Vec<&str> = line.trim_end().split(',').collect();
        if fields.len() != TRADE_FIELD_COUNT {
            debug!(
                fields = fields.len(),
                expected = TRADE_FIELD_COUNT,
                "unexpected trade record width, done reading"
            );
            break;
        }
        match decode_trade(&fields, filter) {
            Ok(Some(trade)) => trades.push(trade),
            Ok(None) => {} // excluded condition
            Err(e) => warn!(error = %e, "skipping undecodable trade record"),
        }
    }

    Ok(trades)
}

/// Read a quote table.
pub fn read_quotes<R: BufRead>(reader: R) -> Result<Vec<Quote>> {
    let mut quotes = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let fields: Vec<&str> = line.trim_end().split(',').collect();
        if fields.len() != QUOTE_FIELD_COUNT {
            debug!(
                fields = fields.len(),
                expected = QUOTE_FIELD_COUNT,
                "unexpected quote record width, done reading"
            );
            break;
        }
        match decode_quote(&fields) {
            Ok(quote) => quotes.push(quote),
            Err(e) => warn!(error = %e, "skipping undecodable quote record"),
        }
    }

    Ok(quotes)
}

/// Read a trade table from a file. The handle is released on return.
pub fn read_trades_file(path: impl AsRef<Path>, filter: &ConditionFilter) -> Result<Vec<Trade>> {
    let file = File::open(path)?;
    read_trades(BufReader::new(file), filter)
}

/// Read a quote table from a file. The handle is released on return.
pub fn read_quotes_file(path: impl AsRef<Path>) -> Result<Vec<Quote>> {
    let file = File::open(path)?;
    read_quotes(BufReader::new(file))
}
