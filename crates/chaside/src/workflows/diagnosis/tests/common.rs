use crate::workflows::diagnosis::{
    AreaCode, AreaItems, CareerCatalog, CareerProfile, DiagnosisConfig, DiagnosisEngine, ItemMap,
    SurveyResponse,
};

/// Row answering "Sí" to the first `interest`/`aptitude` items of each listed area.
pub(super) fn row(name: &str, career: &str, picks: &[(AreaCode, usize, usize)]) -> SurveyResponse {
    let items = ItemMap::canonical();
    let mut answers = vec!["No".to_string(); items.item_count()];
    for (area, interest, aptitude) in picks {
        let entry = items.items_for(*area);
        for position in entry.interest.iter().take(*interest) {
            answers[position - 1] = "Sí".to_string();
        }
        for position in entry.aptitude.iter().take(*aptitude) {
            answers[position - 1] = "Sí".to_string();
        }
    }
    SurveyResponse {
        name: name.to_string(),
        declared_career: career.to_string(),
        responses: answers,
    }
}

/// Every item of `dominant` plus three interest and one aptitude item elsewhere:
/// 38 affirmative answers, well inside the validity window.
pub(super) fn balanced_row(name: &str, career: &str, dominant: AreaCode) -> SurveyResponse {
    let picks: Vec<(AreaCode, usize, usize)> = AreaCode::ordered()
        .into_iter()
        .map(|area| {
            if area == dominant {
                (area, 10, 4)
            } else {
                (area, 3, 1)
            }
        })
        .collect();
    row(name, career, &picks)
}

pub(super) fn uniform_row(name: &str, career: &str, answer: &str) -> SurveyResponse {
    SurveyResponse {
        name: name.to_string(),
        declared_career: career.to_string(),
        responses: vec![answer.to_string(); 98],
    }
}

pub(super) fn engine() -> DiagnosisEngine {
    DiagnosisEngine::new(DiagnosisConfig::default())
}

/// Catalog in which no career lists H as strong.
pub(super) fn catalog_without_h() -> CareerCatalog {
    CareerCatalog::new(vec![
        CareerProfile::new("Arquitectura", &[AreaCode::A, AreaCode::I], &[AreaCode::E]),
        CareerProfile::new("Contador Público", &[AreaCode::C, AreaCode::D], &[]),
    ])
    .expect("valid catalog")
}

/// Caller-supplied table with far more items per area than the inventory:
/// C owns items 1..=300 (200 interest, 100 aptitude), every other area 100.
pub(super) fn oversized_item_map() -> ItemMap {
    let mut entries = vec![AreaItems {
        area: AreaCode::C,
        interest: (1..=200).collect(),
        aptitude: (201..=300).collect(),
    }];
    for (offset, area) in AreaCode::ordered().into_iter().skip(1).enumerate() {
        let base = 300 + offset * 100;
        entries.push(AreaItems {
            area,
            interest: (base + 1..=base + 90).collect(),
            aptitude: (base + 91..=base + 100).collect(),
        });
    }
    ItemMap::new(entries).expect("oversized table is valid")
}
