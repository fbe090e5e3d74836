use super::common::*;
use crate::workflows::diagnosis::{AreaCode, DiagnosisReport, TrafficLight};

fn mixed_report() -> DiagnosisReport {
    engine().diagnose_all(&[
        balanced_row("Ana", "Arquitectura", AreaCode::S),
        balanced_row("Beto", "Contador Público", AreaCode::C),
        uniform_row("Carla", "Contador Público", "Sí"),
        balanced_row("Diego", "Contador Público", AreaCode::A),
        balanced_row("Elena", "Ingeniería Industrial", AreaCode::I),
        balanced_row("Fer", "Contador Público", AreaCode::C),
        balanced_row("Gabi", "Ingeniería Ambiental", AreaCode::A),
    ])
}

#[test]
fn category_counts_cover_all_five_in_display_order() {
    let summary = mixed_report().summary();

    let counts: Vec<(&str, usize)> = summary
        .category_counts
        .iter()
        .map(|entry| (entry.category_label, entry.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Verde", 3),
            ("Amarillo", 1),
            ("Rojo", 1),
            ("Sin sugerencia", 1),
            ("No aceptable", 1),
        ]
    );
    let total: usize = summary.category_counts.iter().map(|entry| entry.count).sum();
    assert_eq!(total, summary.total);
    assert_eq!(summary.total, 7);
}

#[test]
fn empty_categories_are_reported_with_zero() {
    let report = engine().diagnose_all(&[balanced_row("Ana", "Contador Público", AreaCode::C)]);
    let summary = report.summary();

    assert_eq!(summary.category_counts.len(), 5);
    assert_eq!(summary.category_counts[0].count, 1);
    assert!(summary.category_counts[1..].iter().all(|entry| entry.count == 0));
}

#[test]
fn career_breakdown_sorts_by_category_then_count() {
    let summary = mixed_report().summary();

    let breakdown: Vec<(TrafficLight, &str, usize)> = summary
        .career_breakdown
        .iter()
        .map(|entry| (entry.category, entry.career.as_str(), entry.count))
        .collect();
    assert_eq!(
        breakdown,
        vec![
            (TrafficLight::Verde, "Contador Público", 2),
            (TrafficLight::Verde, "Ingeniería Industrial", 1),
            (TrafficLight::Amarillo, "Contador Público", 1),
            (TrafficLight::Rojo, "Ingeniería Ambiental", 1),
            (TrafficLight::SinSugerencia, "Arquitectura", 1),
            (TrafficLight::NoAceptable, "Contador Público", 1),
        ]
    );
}

#[test]
fn ordered_rows_group_by_category_and_keep_input_order() {
    let report = mixed_report();
    let names: Vec<&str> = report
        .ordered_rows()
        .iter()
        .map(|row| row.name.as_str())
        .collect();
    assert_eq!(names, vec!["Beto", "Elena", "Fer", "Diego", "Gabi", "Ana", "Carla"]);

    // Aggregation is a read-only projection.
    let input_order: Vec<&str> = report.rows().iter().map(|row| row.name.as_str()).collect();
    assert_eq!(input_order[0], "Ana");
}

#[test]
fn partition_returns_one_group_per_category() {
    let report = mixed_report();
    let groups = report.partition();

    assert_eq!(groups.len(), 5);
    assert_eq!(groups[0].category, TrafficLight::Verde);
    assert_eq!(groups[0].rows.len(), 3);
    assert_eq!(groups[4].category, TrafficLight::NoAceptable);
    assert_eq!(groups[4].rows[0].name, "Carla");
}

#[test]
fn views_resolve_labels() {
    let report = engine().diagnose_all(&[balanced_row("Ana", "Ingeniería Ambiental", AreaCode::A)]);
    let view = report.views().pop().expect("one view");

    assert_eq!(view.category_label, "Rojo");
    assert_eq!(view.diagnosis, "Sugerencia: Arquitectura");
    assert_eq!(view.scores.len(), 7);
    assert_eq!(view.lenses.len(), 4);
    let weighted = view.lenses.last().expect("weighted lens");
    assert_eq!(weighted.lens, "Ponderada");
    assert_eq!(weighted.area, AreaCode::A);
    assert_eq!(weighted.coherence, "Requiere Orientación");

    let json = serde_json::to_value(&view).expect("view serializes");
    assert_eq!(json["category"], "rojo");
    assert_eq!(json["lenses"][3]["area"], "A");
}

#[test]
fn empty_report_summarizes_to_zero() {
    let summary = DiagnosisReport::default().summary();
    assert_eq!(summary.total, 0);
    assert!(summary.career_breakdown.is_empty());
    assert!(summary.category_counts.iter().all(|entry| entry.count == 0));
}
