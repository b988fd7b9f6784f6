use crate::config::Config;
use crate::constants::SEASONS;
use crate::data_fetcher::{NflverseSource, WeeklyDataSource};
use crate::error::AppError;
use crate::output::emit;
use std::io::{self, Write};
use tracing::{error, info};

/// Fetches the requested seasons and converts them to the JSON record array.
pub async fn fetch_weekly_document<S: WeeklyDataSource>(
    source: &S,
    seasons: &[i32],
) -> Result<String, AppError> {
    let table = source.import_weekly_data(seasons).await?;
    info!(
        "Fetched {} weekly rows with {} columns",
        table.len(),
        table.columns().len()
    );
    table.to_records_json()
}

/// Runs one fetch against `source` and writes the outcome to `out` or `err`.
///
/// Failures are reported, never returned: the caller always continues as if
/// the run succeeded.
pub async fn run_with_source<S, W, E>(source: &S, seasons: &[i32], out: &mut W, err: &mut E)
where
    S: WeeklyDataSource,
    W: Write,
    E: Write,
{
    let outcome = fetch_weekly_document(source, seasons).await;
    report(&outcome, out, err);
}

/// Runs the default fetch: configured release files, fixed seasons, process
/// standard output and standard error.
pub async fn run() {
    let outcome = match Config::load()
        .await
        .and_then(|config| NflverseSource::from_config(&config))
    {
        Ok(source) => fetch_weekly_document(&source, &SEASONS).await,
        Err(e) => Err(e),
    };

    report(&outcome, &mut io::stdout().lock(), &mut io::stderr().lock());
}

fn report<W: Write, E: Write>(outcome: &Result<String, AppError>, out: &mut W, err: &mut E) {
    match outcome {
        Ok(json) => info!("Writing {} bytes of JSON", json.len()),
        Err(e) => error!("Fetch failed: {e}"),
    }
    if let Err(e) = emit(outcome, out, err) {
        error!("Failed to write output: {e}");
    }
}
