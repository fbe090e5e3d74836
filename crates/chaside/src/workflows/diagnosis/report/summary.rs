use super::super::domain::{Lens, TrafficLight};
use super::super::RespondentDiagnosis;
use super::views::{
    AreaScoreView, CareerCount, CategoryCount, DiagnosisSummary, LensView, RespondentView,
};
use std::collections::HashMap;

/// Classified respondents in input order.
#[derive(Debug, Clone, Default)]
pub struct DiagnosisReport {
    rows: Vec<RespondentDiagnosis>,
}

/// Respondents sharing one traffic-light category.
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: TrafficLight,
    pub rows: Vec<&'a RespondentDiagnosis>,
}

impl DiagnosisReport {
    pub fn new(rows: Vec<RespondentDiagnosis>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[RespondentDiagnosis] {
        &self.rows
    }

    /// Rows sorted by category display order; input order is kept within a category.
    pub fn ordered_rows(&self) -> Vec<&RespondentDiagnosis> {
        let mut rows: Vec<&RespondentDiagnosis> = self.rows.iter().collect();
        rows.sort_by_key(|row| row.traffic_light.rank());
        rows
    }

    /// One group per category in display order, including empty ones.
    pub fn partition(&self) -> Vec<CategoryGroup<'_>> {
        TrafficLight::ordered()
            .into_iter()
            .map(|category| CategoryGroup {
                category,
                rows: self
                    .rows
                    .iter()
                    .filter(|row| row.traffic_light == category)
                    .collect(),
            })
            .collect()
    }

    pub fn summary(&self) -> DiagnosisSummary {
        let mut per_category: HashMap<TrafficLight, usize> = HashMap::new();
        let mut per_career: HashMap<(TrafficLight, &str), usize> = HashMap::new();

        for row in &self.rows {
            *per_category.entry(row.traffic_light).or_default() += 1;
            *per_career
                .entry((row.traffic_light, row.declared_career.as_str()))
                .or_default() += 1;
        }

        let category_counts = TrafficLight::ordered()
            .into_iter()
            .map(|category| CategoryCount {
                category,
                category_label: category.label(),
                count: per_category.get(&category).copied().unwrap_or(0),
            })
            .collect();

        let mut career_breakdown: Vec<CareerCount> = per_career
            .into_iter()
            .map(|((category, career), count)| CareerCount {
                category,
                category_label: category.label(),
                career: career.to_string(),
                count,
            })
            .collect();
        career_breakdown.sort_by(|a, b| {
            a.category
                .rank()
                .cmp(&b.category.rank())
                .then(b.count.cmp(&a.count))
                .then_with(|| a.career.cmp(&b.career))
        });

        DiagnosisSummary {
            total: self.rows.len(),
            category_counts,
            career_breakdown,
        }
    }

    pub fn views(&self) -> Vec<RespondentView> {
        self.ordered_rows().into_iter().map(RespondentDiagnosis::to_view).collect()
    }
}

impl RespondentDiagnosis {
    pub fn to_view(&self) -> RespondentView {
        RespondentView {
            name: self.name.clone(),
            declared_career: self.declared_career.clone(),
            validity: self.validity,
            scores: self
                .scores
                .iter()
                .map(|score| AreaScoreView {
                    area: score.area,
                    interest: score.interest,
                    aptitude: score.aptitude,
                    combined: score.combined,
                })
                .collect(),
            lenses: Lens::ordered()
                .into_iter()
                .map(|lens| LensView {
                    lens: lens.label(),
                    area: self.dominant.for_lens(lens),
                    coherence: self.coherence.for_lens(lens).label(),
                })
                .collect(),
            suggested_career: self.suggested_career.clone(),
            diagnosis: self.primary.summary(),
            category: self.traffic_light,
            category_label: self.traffic_light.label(),
            recommendation: self.recommendation.clone(),
        }
    }
}
