//! Weekly player-stats data sources

use polars::prelude::{DataFrame, IntoLazy, LazyFrame, UnionArgs, concat_lf_diagonal};
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch_text;
use super::http_client::create_http_client_with_timeout;
use super::urls::build_weekly_stats_url;
use crate::config::Config;
use crate::constants::FIRST_AVAILABLE_SEASON;
use crate::data_fetcher::models::WeeklyTable;
use crate::data_fetcher::processors::read_weekly_csv;
use crate::error::AppError;

/// Something that can return weekly player statistics for a list of seasons.
pub trait WeeklyDataSource {
    /// Returns the weekly rows of every requested season, seasons in request order.
    fn import_weekly_data(
        &self,
        seasons: &[i32],
    ) -> impl Future<Output = Result<WeeklyTable, AppError>> + Send;
}

/// Rejects an empty season list and seasons older than the first published one.
pub fn validate_seasons(seasons: &[i32]) -> Result<(), AppError> {
    if seasons.is_empty() {
        return Err(AppError::NoSeasons);
    }
    match seasons.iter().min() {
        Some(&oldest) if oldest < FIRST_AVAILABLE_SEASON => {
            Err(AppError::season_unavailable(oldest))
        }
        _ => Ok(()),
    }
}

/// Reads the per-season CSV release files published by nflverse.
#[derive(Debug, Clone)]
pub struct NflverseSource {
    client: Client,
    data_url: String,
}

impl NflverseSource {
    pub fn new(client: Client, data_url: impl Into<String>) -> Self {
        Self {
            client,
            data_url: data_url.into(),
        }
    }

    /// Builds a source from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, config.data_url.clone()))
    }

    #[instrument(skip(self))]
    async fn fetch_season(&self, season: i32) -> Result<DataFrame, AppError> {
        let url = build_weekly_stats_url(&self.data_url, season);
        let body = fetch_text(&self.client, &url).await?;
        let df = read_weekly_csv(body.as_bytes())?;
        info!("Season {season}: {} weekly rows", df.height());
        Ok(df)
    }
}

impl WeeklyDataSource for NflverseSource {
    async fn import_weekly_data(&self, seasons: &[i32]) -> Result<WeeklyTable, AppError> {
        validate_seasons(seasons)?;

        let mut frames: Vec<LazyFrame> = Vec::with_capacity(seasons.len());
        for &season in seasons {
            frames.push(self.fetch_season(season).await?.lazy());
        }

        // Columns are unioned in first-seen order; a column typed differently
        // across seasons is widened to the common supertype.
        let merged = concat_lf_diagonal(
            frames,
            UnionArgs {
                to_supertypes: true,
                ..Default::default()
            },
        )?
        .collect()?;

        WeeklyTable::from_dataframe(&merged)
    }
}
