//! Scoring and traffic-light classification for the CHASIDE inventory.
//!
//! Each respondent flows through normalization, area scoring, the validity
//! gate, dominance resolution, career coherence, and the composer. Rows never
//! read each other's results; [`DiagnosisReport`] aggregates once all rows
//! are classified.

mod composer;
mod config;
pub mod domain;
mod dominance;
mod items;
mod normalizer;
mod profiles;
pub mod report;
mod scoring;

pub use config::{DiagnosisConfig, InvalidWeight, ScoringWeights};
pub use domain::{
    AreaCode, CoherenceVerdict, Lens, PrimaryDiagnosis, ResponseVector, SurveyResponse,
    TrafficLight,
};
pub use dominance::{dominant_area, DominantAreas};
pub use items::{AreaItems, ItemMap, ItemMapError};
pub use normalizer::{normalize_response, normalize_responses};
pub use profiles::{canonicalize_career, CareerCatalog, CareerCatalogError, CareerProfile};
pub use report::DiagnosisReport;
pub use scoring::{is_invalid, score_areas, validity, AreaScore, AreaScoreSet, VALIDITY_THRESHOLD};

use serde::Serialize;
use tracing::{debug, info};

/// Coherence of each lens' dominant area with the declared career.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LensCoherence {
    pub interest: CoherenceVerdict,
    pub aptitude: CoherenceVerdict,
    pub total: CoherenceVerdict,
    pub weighted: CoherenceVerdict,
}

impl LensCoherence {
    fn evaluate(dominant: &DominantAreas, declared_career: &str, careers: &CareerCatalog) -> Self {
        Self {
            interest: careers.evaluate(dominant.interest, declared_career),
            aptitude: careers.evaluate(dominant.aptitude, declared_career),
            total: careers.evaluate(dominant.total, declared_career),
            weighted: careers.evaluate(dominant.weighted, declared_career),
        }
    }

    pub fn for_lens(&self, lens: Lens) -> CoherenceVerdict {
        match lens {
            Lens::Interest => self.interest,
            Lens::Aptitude => self.aptitude,
            Lens::Total => self.total,
            Lens::Weighted => self.weighted,
        }
    }
}

/// Fully derived result for one respondent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RespondentDiagnosis {
    pub name: String,
    pub declared_career: String,
    pub validity: f64,
    pub invalid: bool,
    pub scores: AreaScoreSet,
    pub dominant: DominantAreas,
    pub coherence: LensCoherence,
    pub suggested_career: String,
    pub primary: PrimaryDiagnosis,
    pub traffic_light: TrafficLight,
    pub recommendation: String,
}

/// Stateless engine applying one immutable configuration to every row.
pub struct DiagnosisEngine {
    config: DiagnosisConfig,
}

impl DiagnosisEngine {
    pub fn new(config: DiagnosisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiagnosisConfig {
        &self.config
    }

    pub fn diagnose(&self, response: &SurveyResponse) -> RespondentDiagnosis {
        let DiagnosisConfig {
            items,
            careers,
            weights,
        } = &self.config;

        let vector = normalize_responses(&response.responses);
        let scores = score_areas(&vector, items, weights);
        let validity = validity(&vector);
        let invalid = is_invalid(validity);

        let dominant = DominantAreas::resolve(&scores);
        let declared_career = response.declared_career.trim().to_string();
        let coherence = LensCoherence::evaluate(&dominant, &declared_career, careers);

        let composition = composer::compose(
            invalid,
            dominant.weighted,
            &declared_career,
            coherence.weighted,
            careers,
        );
        let recommendation = composer::recommendation(
            composition.traffic_light,
            &composition.primary,
            dominant.weighted,
            &declared_career,
        );

        debug!(
            respondent = %response.name,
            validity,
            weighted_area = %dominant.weighted,
            category = composition.traffic_light.label(),
            "respondent classified"
        );

        RespondentDiagnosis {
            name: response.name.trim().to_string(),
            declared_career,
            validity,
            invalid,
            scores,
            dominant,
            coherence,
            suggested_career: composition.suggested_career,
            primary: composition.primary,
            traffic_light: composition.traffic_light,
            recommendation,
        }
    }

    pub fn diagnose_all(&self, responses: &[SurveyResponse]) -> DiagnosisReport {
        let rows: Vec<RespondentDiagnosis> =
            responses.iter().map(|response| self.diagnose(response)).collect();

        let report = DiagnosisReport::new(rows);
        info!(
            respondents = report.rows().len(),
            interest_weight = self.config.weights.interest(),
            "diagnosis batch complete"
        );
        report
    }
}

#[cfg(test)]
mod tests;
