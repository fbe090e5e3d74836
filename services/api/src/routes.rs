use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chaside::error::AppError;
use chaside::workflows::diagnosis::report::views::{DiagnosisSummary, RespondentView};
use chaside::workflows::diagnosis::{
    CareerCatalog, CareerProfile, DiagnosisEngine, ScoringWeights,
};
use chaside::workflows::survey::{SurveyImporter, SurveyLayout};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::atomic::Ordering;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct DiagnosisRequest {
    /// Questionnaire export as CSV text.
    pub(crate) csv: String,
    #[serde(default)]
    pub(crate) interest_weight: Option<f64>,
    #[serde(default)]
    pub(crate) layout: Option<SurveyLayout>,
    #[serde(default)]
    pub(crate) profiles: Option<Vec<CareerProfile>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DiagnosisResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) interest_weight: f64,
    pub(crate) aptitude_weight: f64,
    pub(crate) summary: DiagnosisSummary,
    pub(crate) respondents: Vec<RespondentView>,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/diagnosis", post(diagnosis_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn diagnosis_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<DiagnosisRequest>,
) -> Result<Json<DiagnosisResponse>, AppError> {
    let DiagnosisRequest {
        csv,
        interest_weight,
        layout,
        profiles,
    } = payload;

    let mut config = state.diagnosis.as_ref().clone();
    if let Some(weight) = interest_weight {
        config = config.with_weights(ScoringWeights::new(weight)?);
    }
    if let Some(profiles) = profiles {
        config = config.with_careers(CareerCatalog::new(profiles)?);
    }

    let layout = layout.unwrap_or_default();
    let rows = SurveyImporter::from_reader(
        Cursor::new(csv.into_bytes()),
        &layout,
        config.items.item_count(),
    )?;

    let weights = config.weights;
    let engine = DiagnosisEngine::new(config);
    let report = engine.diagnose_all(&rows);
    let summary = report.summary();
    info!(respondents = summary.total, "diagnosis request served");

    Ok(Json(DiagnosisResponse {
        generated_at: Utc::now(),
        interest_weight: weights.interest(),
        aptitude_weight: weights.aptitude(),
        summary,
        respondents: report.views(),
    }))
}
