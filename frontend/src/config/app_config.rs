//! Application Configuration
//!
//! Window size and logging settings, read from a `key=value` file.

use super::ConfigError;
use logging::LogLevel;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE_NAME: &str = "livestream.conf";

/// Application configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Path to the log file
    pub log_path: PathBuf,
    /// Logging level
    pub log_level: LogLevel,
    /// Echo log records to stdout as well
    pub console_log: bool,
    /// Initial window size in points
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("livestream.log"),
            log_level: LogLevel::Info,
            console_log: false,
            window_width: 1280.0,
            window_height: 720.0,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a .conf file
    ///
    /// Format:
    /// ```text
    /// log_path=livestream.log
    /// log_level=Info
    /// console_log=false
    /// window_width=1280
    /// window_height=720
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration text, starting from the defaults
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                eprintln!("Warning: Ignoring malformed configuration line '{}'", line);
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "log_path" => config.log_path = PathBuf::from(value),
                // Unknown levels fall back to Info inside LogLevel itself
                "log_level" => config.log_level = value.parse().unwrap_or_default(),
                "console_log" => config.console_log = parse_value(key, value)?,
                "window_width" => config.window_width = parse_dimension(key, value)?,
                "window_height" => config.window_height = parse_dimension(key, value)?,
                _ => eprintln!("Warning: Unknown configuration key '{}' ignored", key),
            }
        }

        Ok(config)
    }

    /// Loads the first configuration file found in the search path.
    /// Falls back to defaults when none exists or the one found is invalid.
    pub fn load() -> Self {
        for path in Self::search_paths() {
            if !path.is_file() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    println!("Loaded configuration from: {}", path.display());
                    return config;
                }
                Err(e) => {
                    eprintln!("{}, using defaults", e);
                    return Self::default();
                }
            }
        }

        println!("No configuration file found, using defaults");
        Self::default()
    }

    /// `./livestream.conf`, `./frontend/livestream.conf`, then the
    /// platform config directory (e.g. `~/.config/livestream/livestream.conf`)
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("frontend").join(CONFIG_FILE_NAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("livestream").join(CONFIG_FILE_NAME));
        }
        paths
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Window sizes must be finite and strictly positive
fn parse_dimension(key: &str, value: &str) -> Result<f32, ConfigError> {
    let size: f32 = parse_value(key, value)?;
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}
