//! Configuration loading from environment variables.
//!
//! Values are read once at startup with `std::env::var`, after an optional
//! `.env` file has been merged into the environment.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `ENHANCER_DEFAULT_UPSCALE_FACTOR`: factor used when a request omits one
//!   (default: 2). Must be finite and within (1, 4].
//! - `ENHANCER_LOG_FILTER`: tracing filter used when `RUST_LOG` is unset
//!   (default: "info,enhancer=debug")

use crate::domain::image::{validation::validate_upscale_factor, value_objects::UpscaleFactor};

pub const DEFAULT_LOG_FILTER: &str = "info,enhancer=debug";

/// Runtime settings for the enhancement pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Factor applied when a request does not carry one
    pub default_upscale_factor: UpscaleFactor,

    /// Fallback `tracing` filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_upscale_factor: UpscaleFactor::DEFAULT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if
    /// one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// default upscale factor is out of range.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let factor = env_or(
            "ENHANCER_DEFAULT_UPSCALE_FACTOR",
            UpscaleFactor::DEFAULT.value(),
        )?;
        let default_upscale_factor = validate_upscale_factor(factor)
            .map_err(|e| anyhow::anyhow!("Invalid ENHANCER_DEFAULT_UPSCALE_FACTOR: {}", e))?;

        Ok(Self {
            default_upscale_factor,
            log_filter: env_or("ENHANCER_LOG_FILTER", DEFAULT_LOG_FILTER.to_string())?,
        })
    }
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
