//! CSV channel-table loader.
//!
//! # CSV format
//!
//! One row per channel.  `params` is a `;`-separated positional list.
//!
//! ```csv
//! name,behavior,params
//! boiler_temp,setpoint,80.0;0.5
//! boiler_temp_panel,copy,boiler_temp
//! drum_pressure,sinewave,9.5;0.4;0.05;0
//! ```
//!
//! Each `params` item parses as a number first, then `true`/`false`, and
//! falls back to text — so `boiler_temp` above arrives as a channel name,
//! not a failed number.  Empty items are skipped, which makes an empty
//! `params` column an empty parameter list.
//!
//! Row order is preserved: it becomes the set's registration order and
//! therefore the sweep's update order.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pv_behavior::{ParamValue, Params};

use crate::{ChannelError, ChannelSpec};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ChannelRecord {
    name:     String,
    behavior: String,
    params:   String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a channel table from a CSV file.
pub fn load_channels_csv(path: &Path) -> Result<Vec<ChannelSpec>, ChannelError> {
    let file = std::fs::File::open(path).map_err(ChannelError::Io)?;
    load_channels_reader(file)
}

/// Like [`load_channels_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for tables embedded in
/// the host binary.
pub fn load_channels_reader<R: Read>(reader: R) -> Result<Vec<ChannelSpec>, ChannelError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut specs = Vec::new();

    for (row, result) in csv_reader.deserialize::<ChannelRecord>().enumerate() {
        let record = result.map_err(|e| ChannelError::Parse(format!("row {}: {e}", row + 1)))?;
        specs.push(ChannelSpec::new(
            record.name,
            record.behavior,
            parse_params(&record.params),
        ));
    }

    Ok(specs)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_params(s: &str) -> Params {
    let mut values = Vec::new();
    for item in s.split(';') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        if let Ok(n) = item.parse::<f64>() {
            values.push(ParamValue::Number(n));
        } else if item.eq_ignore_ascii_case("true") {
            values.push(ParamValue::Bool(true));
        } else if item.eq_ignore_ascii_case("false") {
            values.push(ParamValue::Bool(false));
        } else {
            values.push(ParamValue::Text(item.to_owned()));
        }
    }
    Params::new(values)
}
