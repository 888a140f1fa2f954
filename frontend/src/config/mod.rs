//! Configuration Module
//!
//! Handles application configuration loading and management.

mod app_config;
mod error;

pub use app_config::AppConfig;
pub use error::ConfigError;
