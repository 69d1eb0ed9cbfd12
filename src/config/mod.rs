//! Configuration module for the print studio service

use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};
use std::path::PathBuf;
use std::time::Duration;

/// Main application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub print: PrintSettings,
    #[serde(default)]
    pub session: SessionSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Design catalog source
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// JSON file with an array of designs. Built-in designs are used when unset.
    pub path: Option<PathBuf>,
}

/// Print order settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    /// Artificial latency of the simulated print backend
    pub submission_delay_ms: u64,
    /// Currency symbol used in formatted cost figures
    pub currency: String,
}

/// Per-visit session housekeeping
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub idle_ttl_secs: u64,
    pub sweep_interval_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

impl Default for PrintSettings {
    fn default() -> Self {
        PrintSettings {
            submission_delay_ms: 2000,
            currency: "R$".to_string(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            idle_ttl_secs: 1800,
            sweep_interval_secs: 60,
        }
    }
}

impl PrintSettings {
    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }
}

impl SessionSettings {
    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        // tokio::time::interval panics on a zero period
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables (PRINT_STUDIO__<SECTION>__<KEY>)
    /// 2. config/local.toml (gitignored)
    /// 3. config/default.toml
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = std::env::var("CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"));

        let builder = Config::builder()
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // PRINT_STUDIO__SERVER__PORT, PRINT_STUDIO__PRINT__SUBMISSION_DELAY_MS, ...
            .add_source(
                Environment::with_prefix("PRINT_STUDIO")
                    .separator("__")
                    .try_parsing(true)
            );

        builder.build()?.try_deserialize()
    }

    /// Number of HTTP workers, 2 per CPU unless configured
    pub fn worker_count(&self) -> usize {
        self.server.workers.unwrap_or_else(|| num_cpus::get() * 2)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            server: ServerSettings::default(),
            catalog: CatalogSettings::default(),
            print: PrintSettings::default(),
            session: SessionSettings::default(),
        }
    }
}
