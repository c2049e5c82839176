//! Configuration management.
//!
//! Everything has a default; environment variables only override the simulated
//! timings and log verbosity for local experiments.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Artificial latency injected into the backend-less workflows: an ~800ms
/// feed fetch, an ~1200ms publish round-trip, and a ~2000ms success dwell
/// before the composer closes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    #[serde(default = "default_success_dwell_ms")]
    pub success_dwell_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: default_load_delay_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            success_dwell_ms: default_success_dwell_ms(),
        }
    }
}

impl SimulationConfig {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_dwell(&self) -> Duration {
        Duration::from_millis(self.success_dwell_ms)
    }
}

fn default_load_delay_ms() -> u64 {
    800
}

fn default_submit_delay_ms() -> u64 {
    1200
}

fn default_success_dwell_ms() -> u64 {
    2000
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            simulation: SimulationConfig {
                load_delay_ms: millis_var("FEED_LOAD_DELAY_MS", default_load_delay_ms())?,
                submit_delay_ms: millis_var("PUBLISH_SUBMIT_DELAY_MS", default_submit_delay_ms())?,
                success_dwell_ms: millis_var(
                    "PUBLISH_SUCCESS_DWELL_MS",
                    default_success_dwell_ms(),
                )?,
            },
        })
    }
}

fn millis_var(name: &str, default: u64) -> Result<u64> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be an integer millisecond count", name))),
        Err(_) => Ok(default),
    }
}
