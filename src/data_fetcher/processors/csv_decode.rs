//! CSV decoding for weekly release files
//!
//! The header and row shape are checked strictly first, then polars reads the
//! file with schema inference over every row. Duplicate headers are rejected
//! here because the dataframe reader would otherwise rename them.

use crate::constants::NA_TOKEN;
use crate::error::AppError;
use polars::prelude::*;
use std::collections::HashSet;
use std::io::Cursor;
use tracing::debug;

/// Rejects repeated header names and rows whose width differs from the header.
fn check_shape(body: &[u8]) -> Result<(), AppError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(body);

    let mut seen = HashSet::new();
    if let Some(duplicate) = reader.headers()?.iter().find(|name| !seen.insert(*name)) {
        return Err(AppError::DuplicateColumn {
            column: duplicate.to_string(),
        });
    }

    for record in reader.records() {
        record?;
    }
    Ok(())
}

/// Reads a headed CSV document into a dataframe.
///
/// # Errors
/// * `AppError::DuplicateColumn` - the header repeats a name
/// * `AppError::Csv` - malformed CSV, including rows with the wrong field count
/// * `AppError::DataFrame` - the dataframe reader rejected the document
pub fn read_weekly_csv(body: &[u8]) -> Result<DataFrame, AppError> {
    check_shape(body)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|options| {
            options.with_null_values(Some(NullValues::AllColumns(vec![NA_TOKEN.to_string()])))
        })
        .into_reader_with_file_handle(Cursor::new(body))
        .finish()?;

    debug!("Decoded {} rows across {} columns", df.height(), df.width());
    Ok(df)
}
