// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_command};
use nfl_weekly_stats::app;
use nfl_weekly_stats::error::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // A run without logging still has to produce its output, so setup
    // failures are swallowed here instead of reaching standard error.
    let _guard = match logging::setup_logging(&args).await {
        Ok((log_file_path, guard)) => {
            tracing::info!("Logs are being written to: {log_file_path}");
            Some(guard)
        }
        Err(_) => None,
    };

    if is_config_command(&args) {
        if args.list_config {
            return commands::handle_list_config_command().await;
        }
        return commands::handle_config_update_command(&args).await;
    }

    // Fetch failures are reported on standard error and the process still exits 0
    app::run().await;
    Ok(())
}
