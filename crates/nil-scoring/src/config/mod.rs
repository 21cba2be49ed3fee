use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::engines::lookups::{LookupError, LookupTables};

const DEFAULT_ANALYSIS_TIMEOUT_MS: u64 = 2_500;

/// Distinguishes runtime behavior for different stages of the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let lookups_path = env::var("NIL_LOOKUPS_PATH")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let analysis_timeout = match env::var("NIL_ANALYSIS_TIMEOUT_MS") {
            Ok(value) => parse_timeout(&value)?,
            Err(_) => Duration::from_millis(DEFAULT_ANALYSIS_TIMEOUT_MS),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring: ScoringConfig {
                lookups_path,
                analysis_timeout,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(millis) if millis > 0 => Ok(Duration::from_millis(millis)),
        _ => Err(ConfigError::InvalidAnalysisTimeout {
            value: value.to_string(),
        }),
    }
}

/// Lookup data and enrichment settings for the scoring engines.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub lookups_path: Option<PathBuf>,
    pub analysis_timeout: Duration,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            lookups_path: None,
            analysis_timeout: Duration::from_millis(DEFAULT_ANALYSIS_TIMEOUT_MS),
        }
    }
}

impl ScoringConfig {
    /// The configured lookup file, or the bundled tables when none is set.
    pub fn lookup_tables(&self) -> Result<LookupTables, LookupError> {
        match &self.lookups_path {
            Some(path) => LookupTables::from_path(path),
            None => LookupTables::bundled(),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAnalysisTimeout { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAnalysisTimeout { value } => write!(
                f,
                "NIL_ANALYSIS_TIMEOUT_MS must be a positive number of milliseconds (found '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("NIL_LOOKUPS_PATH");
        env::remove_var("NIL_ANALYSIS_TIMEOUT_MS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.scoring.lookups_path, None);
        assert_eq!(config.scoring.analysis_timeout, Duration::from_millis(2_500));
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.scoring.lookup_tables().is_ok());
    }

    #[test]
    fn reads_overrides_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        env::set_var("NIL_LOOKUPS_PATH", "/etc/nil/lookups.json");
        env::set_var("NIL_ANALYSIS_TIMEOUT_MS", "750");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(
            config.scoring.lookups_path,
            Some(PathBuf::from("/etc/nil/lookups.json"))
        );
        assert_eq!(config.scoring.analysis_timeout, Duration::from_millis(750));
    }

    #[test]
    fn rejects_zero_or_malformed_timeouts() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        for value in ["0", "soon", "-5"] {
            env::set_var("NIL_ANALYSIS_TIMEOUT_MS", value);
            let err = AppConfig::load().expect_err("timeout is rejected");
            assert!(matches!(err, ConfigError::InvalidAnalysisTimeout { .. }));
        }
        reset_env();
    }

    #[test]
    fn missing_lookup_file_surfaces_io_error() {
        let scoring = ScoringConfig {
            lookups_path: Some(PathBuf::from("/nonexistent/lookups.json")),
            ..ScoringConfig::default()
        };
        assert!(matches!(scoring.lookup_tables(), Err(LookupError::Io(_))));
    }
}
