//! Application-wide constants
//!
//! Output framing literals, data source defaults and HTTP settings live here
//! so the rest of the crate never hard-codes them.

/// Seasons fetched by a normal run. Fixed; there is no flag to change it.
pub const SEASONS: [i32; 1] = [2024];

/// Earliest season the upstream release files cover
pub const FIRST_AVAILABLE_SEASON: i32 = 1999;

/// Default base URL of the weekly player-stats release files
pub const DEFAULT_DATA_URL: &str =
    "https://github.com/nflverse/nflverse-data/releases/download/player_stats";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Output framing written around the JSON payload
pub mod framing {
    /// First line of a successful run
    pub const START_MARKER: &str = "---JSON_START---";

    /// Last line of a successful run
    pub const END_MARKER: &str = "---JSON_END---";

    /// Prefix of the single diagnostic line written on failure.
    /// Downstream consumers match on this exact text.
    pub const ERROR_PREFIX: &str = "An error occurred in the Python script: ";
}

/// Cell token treated as missing when decoding CSV, besides the empty field
pub const NA_TOKEN: &str = "NA";

/// Environment variable names that override config file values
pub mod env_vars {
    pub const DATA_URL: &str = "NFL_STATS_DATA_URL";
    pub const LOG_FILE: &str = "NFL_STATS_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "NFL_STATS_HTTP_TIMEOUT";
}

/// Default log file name inside the log directory
pub const DEFAULT_LOG_FILE_NAME: &str = "nfl_weekly_stats.log";
