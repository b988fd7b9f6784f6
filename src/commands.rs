use crate::cli::Args;
use nfl_weekly_stats::config::Config;
use nfl_weekly_stats::error::AppError;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-data-url, --set-log-file, --clear-log-file).
///
/// Starts from the saved file (or defaults), applies the requested changes,
/// validates and saves.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };
    apply_config_updates(&mut config, args);
    config.validate()?;

    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Applies the update flags to `config` without touching the file system.
pub fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(new_url) = &args.new_data_url {
        config.data_url = new_url.trim().to_string();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }
}
