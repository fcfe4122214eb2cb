use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::ChannelTable;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Shape and parse failures while loading a telemetry CSV.
///
/// Both variants are fatal to the dataset they occur in: a table with a
/// ragged row or an unparseable cell must never reach the analysis, since
/// partial totals would be silently wrong. Row numbers are 1-based file
/// lines (the header is line 1), so they match what an editor shows.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data row {row} is malformed: expected {expected} fields, found {found} ({raw:?})")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
        raw: String,
    },
    #[error("data row {row}, column {column:?}: {token:?} is not a number")]
    BadNumber {
        row: usize,
        column: String,
        token: String,
    },
    #[error("header must declare a time column and at least one string")]
    EmptyHeader,
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a telemetry table from a CSV file.
///
/// Expected layout: a header row `[time_label, string_1, ..., string_n]`
/// followed by one data row per time unit, every cell after the first
/// parseable as `f64`.
pub fn load_csv(path: &Path) -> Result<ChannelTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.len() < 2 {
        return Err(LoadError::EmptyHeader.into());
    }

    let time_label = headers[0].clone();
    let channels: Vec<String> = headers[1..].to_vec();

    let mut timestamps = Vec::new();
    let mut rows = Vec::new();

    for (rec_no, result) in reader.records().enumerate() {
        // Header is file line 1, first record is line 2.
        let row_no = rec_no + 2;
        let record = result.with_context(|| format!("reading data row {row_no}"))?;

        if record.len() != headers.len() {
            return Err(LoadError::MalformedRow {
                row: row_no,
                expected: headers.len(),
                found: record.len(),
                raw: record.iter().collect::<Vec<_>>().join(","),
            }
            .into());
        }

        timestamps.push(record[0].trim().to_string());

        let mut values = Vec::with_capacity(channels.len());
        for (col_idx, token) in record.iter().skip(1).enumerate() {
            let value: f64 = token.trim().parse().map_err(|_| LoadError::BadNumber {
                row: row_no,
                column: channels[col_idx].clone(),
                token: token.to_string(),
            })?;
            values.push(value);
        }
        rows.push(values);
    }

    log::debug!(
        "loaded {}: {} strings x {} rows",
        path.display(),
        channels.len(),
        rows.len()
    );

    Ok(ChannelTable {
        time_label,
        channels,
        timestamps,
        rows,
    })
}
