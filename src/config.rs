use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "PatientVisits";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const BIND_ADDR_VAR: &str = "VISITS_BIND_ADDR";
pub const DB_PATH_VAR: &str = "VISITS_DB_PATH";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {var} value {value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("Cannot determine a data directory; set VISITS_DB_PATH")]
    NoDataDir,
}

/// Runtime configuration for the visits server.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                var: BIND_ADDR_VAR,
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        let db_path = match lookup(DB_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => app_data_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join("visits.db"),
        };

        Ok(Self { bind_addr, db_path })
    }
}

/// Get the application data directory
/// `<platform data dir>/PatientVisits/`, falling back to `~/PatientVisits/`
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(APP_NAME))
}

/// Default `tracing` filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,patient_visits=debug"
    } else {
        "info"
    }
}
