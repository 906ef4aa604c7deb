//! CSV loader for two-column cost measurements

use cost_core::{CostSeries, Error, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

/// Load a cost series from the CSV file at `path`
///
/// Column 0 becomes `x` and column 1 becomes `y`; further columns are
/// ignored. The first record is skipped as a header when either of its
/// first two fields is not numeric.
///
/// # Errors
///
/// * [`Error::Io`] if the file cannot be opened
/// * [`Error::Csv`] if the file is not valid CSV
/// * [`Error::InvalidInput`] if a record has fewer than two columns or a
///   data field is not a number
#[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_series<P: AsRef<Path>>(path: P) -> Result<CostSeries> {
    let file = File::open(path.as_ref())?;
    load_series_from_reader(file)
}

/// Load a cost series from any reader using the same rules as [`load_series`]
pub fn load_series_from_reader<R: Read>(reader: R) -> Result<CostSeries> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut series = CostSeries::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = record.position().map_or(index as u64 + 1, |p| p.line());

        if record.len() < 2 {
            return Err(Error::InvalidInput(format!(
                "line {line}: expected at least two columns, found {}",
                record.len()
            )));
        }

        match parse_pair(&record) {
            Some((x, y)) => series.push(x, y),
            None if index == 0 => {
                debug!(header = ?record, "first record is not numeric, treating it as a header");
            }
            None => {
                return Err(Error::InvalidInput(format!(
                    "line {line}: could not parse ({:?}, {:?}) as numbers",
                    &record[0], &record[1]
                )));
            }
        }
    }

    debug!(rows = series.len(), "loaded cost series");
    Ok(series)
}

fn parse_pair(record: &StringRecord) -> Option<(f64, f64)> {
    let x = record.get(0)?.parse::<f64>().ok()?;
    let y = record.get(1)?.parse::<f64>().ok()?;
    Some((x, y))
}
