use chaside::config::ScoringConfig;
use chaside::error::AppError;
use chaside::workflows::diagnosis::{CareerCatalog, DiagnosisConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    /// Reference data used when a request does not override it.
    pub(crate) diagnosis: Arc<DiagnosisConfig>,
}

/// Builds the engine configuration from env-derived scoring settings.
pub(crate) fn load_diagnosis_config(scoring: &ScoringConfig) -> Result<DiagnosisConfig, AppError> {
    let careers = match &scoring.profiles_path {
        Some(path) => {
            let catalog = CareerCatalog::from_path(path)?;
            info!(
                path = %path.display(),
                careers = catalog.profiles().len(),
                "loaded career profiles"
            );
            catalog
        }
        None => CareerCatalog::standard(),
    };

    Ok(DiagnosisConfig::default()
        .with_careers(careers)
        .with_weights(scoring.weights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chaside::workflows::diagnosis::ScoringWeights;
    use std::path::PathBuf;

    #[test]
    fn defaults_to_standard_catalog() {
        let scoring = ScoringConfig {
            weights: ScoringWeights::new(0.5).expect("valid weight"),
            profiles_path: None,
        };
        let config = load_diagnosis_config(&scoring).expect("config builds");
        assert_eq!(config.careers.profiles().len(), 10);
        assert!((config.weights.aptitude() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn missing_profile_file_is_an_error() {
        let scoring = ScoringConfig {
            weights: ScoringWeights::default(),
            profiles_path: Some(PathBuf::from("./no-such-profiles.json")),
        };
        assert!(matches!(
            load_diagnosis_config(&scoring),
            Err(AppError::Profiles(_))
        ));
    }
}
