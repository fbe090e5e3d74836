use super::config::ScoringWeights;
use super::domain::{AreaCode, Lens, ResponseVector};
use super::items::ItemMap;
use serde::Serialize;

/// At or above this share of identical answers a row is not trusted.
pub const VALIDITY_THRESHOLD: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaScore {
    pub area: AreaCode,
    pub interest: u32,
    pub aptitude: u32,
    pub combined: f64,
}

impl AreaScore {
    pub fn total(&self) -> u32 {
        self.interest + self.aptitude
    }

    /// Score compared under the given lens.
    pub fn under(&self, lens: Lens) -> f64 {
        match lens {
            Lens::Interest => f64::from(self.interest),
            Lens::Aptitude => f64::from(self.aptitude),
            Lens::Total => f64::from(self.total()),
            Lens::Weighted => self.combined,
        }
    }
}

/// Per-area subtotals in `AreaCode::ordered()` order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaScoreSet {
    scores: Vec<AreaScore>,
}

impl AreaScoreSet {
    pub fn get(&self, area: AreaCode) -> &AreaScore {
        &self.scores[area.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &AreaScore> {
        self.scores.iter()
    }
}

pub fn score_areas(
    responses: &ResponseVector,
    items: &ItemMap,
    weights: &ScoringWeights,
) -> AreaScoreSet {
    let scores = AreaCode::ordered()
        .into_iter()
        .map(|area| {
            let entry = items.items_for(area);
            let interest = sum_items(responses, &entry.interest);
            let aptitude = sum_items(responses, &entry.aptitude);
            AreaScore {
                area,
                interest,
                aptitude,
                combined: weights.combine(interest, aptitude),
            }
        })
        .collect();

    AreaScoreSet { scores }
}

fn sum_items(responses: &ResponseVector, positions: &[usize]) -> u32 {
    positions
        .iter()
        .map(|position| u32::from(responses.item(*position)))
        .sum()
}

/// Share of the majority answer, `max(p_yes, 1 - p_yes)`; 0 for an empty row.
pub fn validity(responses: &ResponseVector) -> f64 {
    if responses.is_empty() {
        return 0.0;
    }
    let p_yes = responses.yes_count() as f64 / responses.len() as f64;
    p_yes.max(1.0 - p_yes)
}

pub fn is_invalid(validity: f64) -> bool {
    validity >= VALIDITY_THRESHOLD
}
