use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::diagnosis::{CareerCatalogError, InvalidWeight};
use crate::workflows::survey::SurveyImportError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Survey(SurveyImportError),
    Profiles(CareerCatalogError),
    Weight(InvalidWeight),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Survey(err) => write!(f, "survey error: {}", err),
            AppError::Profiles(err) => write!(f, "career profile error: {}", err),
            AppError::Weight(err) => write!(f, "scoring error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Survey(err) => Some(err),
            AppError::Profiles(err) => Some(err),
            AppError::Weight(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Survey(_) | AppError::Profiles(_) | AppError::Weight(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            AppError::Survey(SurveyImportError::MissingColumns(columns)) => Json(json!({
                "error": self.to_string(),
                "missing_columns": columns,
            })),
            _ => Json(json!({ "error": self.to_string() })),
        };
        (status, body).into_response()
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

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<SurveyImportError> for AppError {
    fn from(value: SurveyImportError) -> Self {
        Self::Survey(value)
    }
}

impl From<CareerCatalogError> for AppError {
    fn from(value: CareerCatalogError) -> Self {
        Self::Profiles(value)
    }
}

impl From<InvalidWeight> for AppError {
    fn from(value: InvalidWeight) -> Self {
        Self::Weight(value)
    }
}
