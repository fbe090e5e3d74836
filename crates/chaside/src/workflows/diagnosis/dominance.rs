use super::domain::{AreaCode, Lens};
use super::scoring::AreaScoreSet;
use serde::Serialize;

/// Strongest area under `lens`. Only a strictly greater score displaces the
/// current leader, so ties resolve to the earlier area in `CHASIDE` order.
pub fn dominant_area(scores: &AreaScoreSet, lens: Lens) -> AreaCode {
    let mut best = AreaCode::C;
    let mut best_score = scores.get(best).under(lens);

    for area in AreaCode::ordered().into_iter().skip(1) {
        let score = scores.get(area).under(lens);
        if score > best_score {
            best = area;
            best_score = score;
        }
    }

    best
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DominantAreas {
    pub interest: AreaCode,
    pub aptitude: AreaCode,
    pub total: AreaCode,
    pub weighted: AreaCode,
}

impl DominantAreas {
    pub fn resolve(scores: &AreaScoreSet) -> Self {
        Self {
            interest: dominant_area(scores, Lens::Interest),
            aptitude: dominant_area(scores, Lens::Aptitude),
            total: dominant_area(scores, Lens::Total),
            weighted: dominant_area(scores, Lens::Weighted),
        }
    }

    pub fn for_lens(&self, lens: Lens) -> AreaCode {
        match lens {
            Lens::Interest => self.interest,
            Lens::Aptitude => self.aptitude,
            Lens::Total => self.total,
            Lens::Weighted => self.weighted,
        }
    }
}
