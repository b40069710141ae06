//! Environment variable handling.

use crate::types::PiaConfig;
use std::env;
use thiserror::Error;

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("required environment variable not set: {var}")]
    NotSet { var: String },

    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Environment variable names.
pub mod vars {
    // Configuration
    pub const PIA_CONFIG_PATH: &str = "PIA_CONFIG_PATH";
    pub const PIA_LOCALE: &str = "PIA_LOCALE";
    pub const PIA_MAX_DAYS_AGO: &str = "PIA_MAX_DAYS_AGO";
    pub const PIA_UTC_OFFSET_MINUTES: &str = "PIA_UTC_OFFSET_MINUTES";
    pub const PIA_LOG_LEVEL: &str = "PIA_LOG_LEVEL";

    // Deployment
    pub const PIA_ENV: &str = "PIA_ENV";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Environment configuration.
pub struct Environment {
    _guard: (), // Prevent construction outside module
}

impl Environment {
    /// Initialize environment from .env files.
    pub fn init() -> Result<Self, EnvError> {
        // Later files override earlier ones
        let _ = dotenvy::from_filename(".env");
        let _ = dotenvy::from_filename(".env.local");

        if let Ok(env) = env::var(vars::PIA_ENV) {
            let _ = dotenvy::from_filename(format!(".env.{}", env));
        }

        Ok(Self { _guard: () })
    }

    /// Get a required string variable.
    pub fn require(var: &str) -> Result<String, EnvError> {
        env::var(var).map_err(|_| EnvError::NotSet { var: var.to_string() })
    }

    /// Get an optional string variable.
    pub fn get(var: &str) -> Option<String> {
        env::var(var).ok()
    }

    /// Get a variable with a default value.
    pub fn get_or(var: &str, default: &str) -> String {
        env::var(var).unwrap_or_else(|_| default.to_string())
    }

    /// Get a boolean variable.
    pub fn get_bool(var: &str) -> Option<bool> {
        env::var(var)
            .ok()
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
    }

    /// Get an integer variable.
    pub fn get_int<T: std::str::FromStr>(var: &str) -> Result<Option<T>, EnvError> {
        match env::var(var) {
            Ok(v) => v.parse().map(Some).map_err(|_| EnvError::InvalidValue {
                var: var.to_string(),
                message: "expected integer".to_string(),
            }),
            Err(_) => Ok(None),
        }
    }

    /// Check if running in production mode.
    pub fn is_production() -> bool {
        env::var(vars::PIA_ENV)
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Apply `PIA_*` overrides on top of a loaded configuration.
    pub fn apply_overrides(config: &mut PiaConfig) -> Result<(), EnvError> {
        if let Some(locale) = Self::get(vars::PIA_LOCALE) {
            if pia_common_i18n::Locale::parse(&locale).is_none() {
                return Err(EnvError::InvalidValue {
                    var: vars::PIA_LOCALE.to_string(),
                    message: format!("unsupported locale {locale}"),
                });
            }
            config.locale = Some(locale);
        }

        if let Some(days) = Self::get_int::<u32>(vars::PIA_MAX_DAYS_AGO)? {
            config.revisions.max_days_ago = days;
        }

        if let Some(offset) = Self::get_int::<i32>(vars::PIA_UTC_OFFSET_MINUTES)? {
            config.revisions.utc_offset_minutes = offset;
        }

        Ok(())
    }
}
