//! Marker framing of the JSON document on standard output
//!
//! A successful run prints the start marker, the JSON line and the end marker.
//! A failed run prints nothing to standard output and one diagnostic line to
//! standard error. Consumers locate the payload with [`extract_payload`].

use crate::constants::framing::{END_MARKER, ERROR_PREFIX, START_MARKER};
use crate::error::AppError;
use std::io::{self, Write};

/// Returns the complete three-line success output for a JSON document.
pub fn frame_document(json: &str) -> String {
    format!("{START_MARKER}\n{json}\n{END_MARKER}\n")
}

/// Returns the single diagnostic line written on failure.
/// Line breaks inside the message are flattened so the line stays single.
pub fn format_failure(error: &AppError) -> String {
    let message = error.to_string().replace(['\r', '\n'], " ");
    format!("{ERROR_PREFIX}{message}\n")
}

/// Writes the outcome of a run. The success frame is written with a single
/// `write_all` so a consumer never sees a marker without its payload.
pub fn emit<W: Write, E: Write>(
    outcome: &Result<String, AppError>,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    match outcome {
        Ok(json) => {
            out.write_all(frame_document(json).as_bytes())?;
            out.flush()
        }
        Err(error) => {
            err.write_all(format_failure(error).as_bytes())?;
            err.flush()
        }
    }
}

/// Extracts the JSON text between the markers of captured output.
///
/// # Errors
/// * `AppError::MissingMarker` - either marker is absent, or the end marker
///   only appears before the start marker
pub fn extract_payload(raw: &str) -> Result<&str, AppError> {
    let start = raw
        .find(START_MARKER)
        .ok_or_else(|| AppError::missing_marker(START_MARKER))?
        + START_MARKER.len();
    let end = raw[start..]
        .find(END_MARKER)
        .ok_or_else(|| AppError::missing_marker(END_MARKER))?
        + start;
    Ok(raw[start..end].trim())
}
