use crate::cli::DiagnoseArgs;
use crate::infra::load_diagnosis_config;
use chaside::config::AppConfig;
use chaside::error::AppError;
use chaside::telemetry;
use chaside::workflows::diagnosis::{
    CareerCatalog, DiagnosisEngine, DiagnosisReport, ScoringWeights,
};
use chaside::workflows::survey::{ItemColumns, SurveyImporter, SurveyLayout};
use chrono::Utc;
use serde_json::json;
use std::fmt::Write;

pub(crate) fn run_diagnosis(args: DiagnoseArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let mut diagnosis = load_diagnosis_config(&config.scoring)?;
    if let Some(weight) = args.interest_weight {
        diagnosis = diagnosis.with_weights(ScoringWeights::new(weight)?);
    }
    if let Some(path) = &args.profiles {
        diagnosis = diagnosis.with_careers(CareerCatalog::from_path(path)?);
    }

    let layout = layout_from_args(&args);
    let rows = SurveyImporter::from_path(&args.input, &layout, diagnosis.items.item_count())?;

    let weights = diagnosis.weights;
    let report = DiagnosisEngine::new(diagnosis).diagnose_all(&rows);

    if args.json {
        let payload = json!({
            "generated_at": Utc::now(),
            "interest_weight": weights.interest(),
            "aptitude_weight": weights.aptitude(),
            "summary": report.summary(),
            "respondents": report.views(),
        });
        let rendered = serde_json::to_string_pretty(&payload)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
    } else {
        print!("{}", render_report(&report, weights, args.list_respondents));
    }

    Ok(())
}

fn layout_from_args(args: &DiagnoseArgs) -> SurveyLayout {
    let mut layout = SurveyLayout::default();
    if let Some(name) = &args.name_column {
        layout.name_column = name.clone();
    }
    if let Some(career) = &args.career_column {
        layout.career_column = career.clone();
    }
    if let Some(prefix) = &args.item_prefix {
        layout.items = ItemColumns::Prefix {
            prefix: prefix.clone(),
        };
    } else if let Some(start) = args.item_offset {
        layout.items = ItemColumns::Offset { start };
    }
    layout
}

fn render_report(report: &DiagnosisReport, weights: ScoringWeights, list_respondents: bool) -> String {
    let summary = report.summary();
    let mut out = String::new();

    let _ = writeln!(out, "Diagnóstico vocacional CHASIDE");
    let _ = writeln!(
        out,
        "Participantes: {} (peso de intereses {:.2}, peso de aptitudes {:.2})",
        summary.total,
        weights.interest(),
        weights.aptitude()
    );

    let _ = writeln!(out, "\nSemáforo");
    for entry in &summary.category_counts {
        let _ = writeln!(out, "- {}: {}", entry.category_label, entry.count);
    }

    if summary.career_breakdown.is_empty() {
        let _ = writeln!(out, "\nPor carrera declarada: ninguna");
    } else {
        let _ = writeln!(out, "\nPor carrera declarada");
        for entry in &summary.career_breakdown {
            let career = if entry.career.is_empty() {
                "(sin carrera)"
            } else {
                entry.career.as_str()
            };
            let _ = writeln!(out, "- [{}] {}: {}", entry.category_label, career, entry.count);
        }
    }

    if list_respondents {
        for group in report.partition() {
            if group.rows.is_empty() {
                continue;
            }
            let _ = writeln!(out, "\n{}", group.category.label());
            for row in group.rows {
                let _ = writeln!(
                    out,
                    "- {} | {} | área {} ({}) | {} | {}",
                    row.name,
                    row.declared_career,
                    row.dominant.weighted,
                    row.coherence.weighted.label(),
                    row.primary.summary(),
                    row.recommendation
                );
            }
        }
    }

    out
}
