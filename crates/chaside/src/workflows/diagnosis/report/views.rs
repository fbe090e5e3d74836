use super::super::domain::{AreaCode, TrafficLight};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaScoreView {
    pub area: AreaCode,
    pub interest: u32,
    pub aptitude: u32,
    pub combined: f64,
}

/// Dominant area and its coherence for one lens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LensView {
    pub lens: &'static str,
    pub area: AreaCode,
    pub coherence: &'static str,
}

/// Flat, label-resolved row for rendering or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RespondentView {
    pub name: String,
    pub declared_career: String,
    pub validity: f64,
    pub scores: Vec<AreaScoreView>,
    pub lenses: Vec<LensView>,
    pub suggested_career: String,
    pub diagnosis: String,
    pub category: TrafficLight,
    pub category_label: &'static str,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: TrafficLight,
    pub category_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerCount {
    pub category: TrafficLight,
    pub category_label: &'static str,
    pub career: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosisSummary {
    pub total: usize,
    pub category_counts: Vec<CategoryCount>,
    pub career_breakdown: Vec<CareerCount>,
}
