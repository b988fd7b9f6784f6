//! URL building utilities for release files

/// Builds the URL of one season's weekly player-stats CSV file.
///
/// # Arguments
/// * `data_url` - Base URL of the release directory
/// * `season` - The season year
///
/// # Example
/// ```
/// use nfl_weekly_stats::data_fetcher::api::build_weekly_stats_url;
///
/// let url = build_weekly_stats_url("https://files.example.com/player_stats", 2024);
/// assert_eq!(url, "https://files.example.com/player_stats/player_stats_2024.csv");
/// ```
pub fn build_weekly_stats_url(data_url: &str, season: i32) -> String {
    format!("{}/player_stats_{season}.csv", data_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_not_doubled() {
        assert_eq!(
            build_weekly_stats_url("http://localhost:8080/", 2023),
            "http://localhost:8080/player_stats_2023.csv"
        );
    }
}
