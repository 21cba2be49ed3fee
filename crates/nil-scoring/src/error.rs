use crate::config::ConfigError;
use crate::engines::lookups::LookupError;
use crate::engines::subject::InputError;
use crate::scoring::{ScoringServiceError, SocialImportError};
use crate::telemetry::TelemetryError;
use std::fmt;

/// Error surfaced to the command-line entry point.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Import(SocialImportError),
    Lookup(LookupError),
    Input(InputError),
    Service(ScoringServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "json error: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::Lookup(err) => write!(f, "lookup error: {}", err),
            AppError::Input(err) => write!(f, "invalid input: {}", err),
            AppError::Service(err) => write!(f, "scoring error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Lookup(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::Service(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<SocialImportError> for AppError {
    fn from(value: SocialImportError) -> Self {
        Self::Import(value)
    }
}

impl From<LookupError> for AppError {
    fn from(value: LookupError) -> Self {
        Self::Lookup(value)
    }
}

impl From<InputError> for AppError {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}

impl From<ScoringServiceError> for AppError {
    fn from(value: ScoringServiceError) -> Self {
        Self::Service(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_prefixes_the_failing_layer() {
        let err = AppError::from(InputError::Blank { field: "deal.id" });
        assert_eq!(err.to_string(), "invalid input: deal.id must not be blank");
        assert!(err.source().is_some());

        let err = AppError::from(ScoringServiceError::BadRequest("athleteId"));
        assert_eq!(err.to_string(), "scoring error: athleteId is required");
    }
}
