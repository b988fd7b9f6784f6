//! Test utilities: an in-memory data source and sample tables

use crate::data_fetcher::{WeeklyDataSource, WeeklyTable};
use crate::error::AppError;
use serde_json::json;
use std::sync::Mutex;

/// A data source that returns a fixed table or fails with a fixed message,
/// recording every season list it is asked for.
#[derive(Debug)]
pub struct StubSource {
    outcome: Result<WeeklyTable, String>,
    requests: Mutex<Vec<Vec<i32>>>,
}

impl StubSource {
    pub fn with_table(table: WeeklyTable) -> Self {
        Self {
            outcome: Ok(table),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A source whose every call fails with `message` as the error text.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_seasons(&self) -> Vec<Vec<i32>> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl WeeklyDataSource for StubSource {
    async fn import_weekly_data(&self, seasons: &[i32]) -> Result<WeeklyTable, AppError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(seasons.to_vec());
        self.outcome.clone().map_err(AppError::custom)
    }
}

/// Two players in week 1 of 2024
pub fn sample_table() -> WeeklyTable {
    WeeklyTable::new(
        ["player", "week", "season", "yards"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        vec![
            vec![json!("A"), json!(1), json!(2024), json!(80)],
            vec![json!("B"), json!(1), json!(2024), json!(45)],
        ],
    )
    .unwrap_or_default()
}

/// A table with the given columns and no rows
pub fn empty_table(columns: &[&str]) -> WeeklyTable {
    WeeklyTable::new(columns.iter().map(|c| c.to_string()).collect(), Vec::new())
        .unwrap_or_default()
}
