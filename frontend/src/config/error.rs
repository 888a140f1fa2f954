use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while loading `livestream.conf`
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read
    Read { path: PathBuf, source: io::Error },

    /// A known key carried a value of the wrong type
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config file '{}': {}", path.display(), source)
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for configuration key '{}'", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}
