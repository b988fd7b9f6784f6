use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Data URL cannot be empty and must use http:// or https://
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    data_url: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
) -> Result<(), AppError> {
    if data_url.trim().is_empty() {
        return Err(AppError::config_error("Data URL cannot be empty"));
    }

    if !data_url.starts_with("http://") && !data_url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "Data URL must start with http:// or https://: {data_url}"
        )));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_urls() {
        assert!(validate_config("https://github.com/releases", &None, 30).is_ok());
        assert!(validate_config("http://127.0.0.1:8080", &None, 1).is_ok());
    }

    #[test]
    fn test_invalid_settings() {
        assert!(validate_config("", &None, 30).is_err());
        assert!(validate_config("ftp://files.example.com", &None, 30).is_err());
        assert!(validate_config("files.example.com", &None, 30).is_err());
        assert!(validate_config("https://files.example.com", &None, 0).is_err());
        assert!(validate_config("https://files.example.com", &Some(String::new()), 30).is_err());
    }

    #[test]
    fn test_log_directory_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("a").join("b").join("run.log");
        let log_path = Some(log_path.to_string_lossy().to_string());

        assert!(validate_config("https://files.example.com", &log_path, 30).is_ok());
        assert!(temp_dir.path().join("a").join("b").exists());
    }
}
