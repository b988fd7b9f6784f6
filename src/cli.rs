use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when a configuration command was requested instead of a fetch.
pub fn is_config_command(args: &Args) -> bool {
    args.list_config || is_config_update(args)
}

/// Returns true when any flag that edits the saved configuration is set.
pub fn is_config_update(args: &Args) -> bool {
    args.new_data_url.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// NFL weekly player statistics fetcher
///
/// Downloads the 2024 weekly player statistics and prints them as a JSON array
/// framed by ---JSON_START--- and ---JSON_END--- lines. On failure a single
/// diagnostic line is written to standard error.
#[derive(Parser, Debug, Default)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Update the base URL of the release files in config.
    #[arg(long = "set-data-url", help_heading = "Configuration", value_name = "URL")]
    pub new_data_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration", value_name = "PATH")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror log output to standard error.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path for this run only.
    #[arg(long = "log-file", help_heading = "Debug", value_name = "PATH")]
    pub log_file: Option<String>,
}
