//! NFL weekly player statistics fetcher
//!
//! Downloads one season of weekly player statistics, converts the rows to a
//! JSON array of objects and prints it between two marker lines.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nfl_weekly_stats::config::Config;
//! use nfl_weekly_stats::data_fetcher::NflverseSource;
//! use nfl_weekly_stats::app::fetch_weekly_document;
//! use nfl_weekly_stats::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let source = NflverseSource::from_config(&config)?;
//!     let json = fetch_weekly_document(&source, &[2024]).await?;
//!     println!("{json}");
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod output;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{NflverseSource, WeeklyDataSource, WeeklyTable};
pub use error::AppError;
pub use output::{extract_payload, frame_document};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
