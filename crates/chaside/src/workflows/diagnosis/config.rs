use super::items::ItemMap;
use super::profiles::CareerCatalog;
use serde::{Deserialize, Serialize};

/// Share of the combined score taken from interest items; aptitude gets the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ScoringWeights {
    interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("interest weight must be a finite value between 0 and 1, got {0}")]
pub struct InvalidWeight(pub f64);

impl ScoringWeights {
    pub const DEFAULT_INTEREST: f64 = 0.8;

    pub fn new(interest: f64) -> Result<Self, InvalidWeight> {
        if !interest.is_finite() || !(0.0..=1.0).contains(&interest) {
            return Err(InvalidWeight(interest));
        }
        Ok(Self { interest })
    }

    pub fn interest(&self) -> f64 {
        self.interest
    }

    pub fn aptitude(&self) -> f64 {
        1.0 - self.interest
    }

    pub fn combine(&self, interest: u32, aptitude: u32) -> f64 {
        f64::from(interest) * self.interest() + f64::from(aptitude) * self.aptitude()
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interest: Self::DEFAULT_INTEREST,
        }
    }
}

impl TryFrom<f64> for ScoringWeights {
    type Error = InvalidWeight;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScoringWeights> for f64 {
    fn from(value: ScoringWeights) -> Self {
        value.interest
    }
}

/// Immutable reference data shared by every respondent in a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosisConfig {
    #[serde(default)]
    pub items: ItemMap,
    #[serde(default)]
    pub careers: CareerCatalog,
    #[serde(default)]
    pub weights: ScoringWeights,
}

impl DiagnosisConfig {
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_careers(mut self, careers: CareerCatalog) -> Self {
        self.careers = careers;
        self
    }
}
