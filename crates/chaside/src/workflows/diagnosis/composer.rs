use super::domain::{
    AreaCode, CoherenceVerdict, PrimaryDiagnosis, TrafficLight, NOT_ACCEPTABLE_TEXT,
    NO_CLEAR_SUGGESTION_TEXT,
};
use super::profiles::{canonicalize_career, CareerCatalog};

/// Result of the suggestion step and the traffic light derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Composition {
    pub primary: PrimaryDiagnosis,
    pub suggested_career: String,
    pub traffic_light: TrafficLight,
}

/// Runs the fixed-order decision: validity gate, career suggestion for the
/// weighted area, then the traffic light from suggestion and coherence.
pub(crate) fn compose(
    invalid: bool,
    weighted_area: AreaCode,
    declared_career: &str,
    weighted_coherence: CoherenceVerdict,
    careers: &CareerCatalog,
) -> Composition {
    if invalid {
        return Composition {
            primary: PrimaryDiagnosis::NotAcceptable,
            suggested_career: NOT_ACCEPTABLE_TEXT.to_string(),
            traffic_light: TrafficLight::NoAceptable,
        };
    }

    let declared_key = canonicalize_career(declared_career);
    let candidates = careers.candidates_for(weighted_area);

    let declared_is_candidate = candidates
        .iter()
        .any(|profile| canonicalize_career(&profile.name) == declared_key);

    let (primary, suggested_career) = if declared_is_candidate {
        (
            PrimaryDiagnosis::AdequateProfile,
            declared_career.trim().to_string(),
        )
    } else if !candidates.is_empty() {
        let joined = candidates
            .iter()
            .map(|profile| profile.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        (PrimaryDiagnosis::Suggestion(joined.clone()), joined)
    } else {
        return Composition {
            primary: PrimaryDiagnosis::NoClearSuggestion,
            suggested_career: NO_CLEAR_SUGGESTION_TEXT.to_string(),
            traffic_light: TrafficLight::SinSugerencia,
        };
    };

    Composition {
        traffic_light: traffic_light(&primary, weighted_coherence),
        primary,
        suggested_career,
    }
}

pub(crate) fn traffic_light(
    primary: &PrimaryDiagnosis,
    coherence: CoherenceVerdict,
) -> TrafficLight {
    match (primary, coherence) {
        (PrimaryDiagnosis::NotAcceptable, _) => TrafficLight::NoAceptable,
        (
            PrimaryDiagnosis::AdequateProfile | PrimaryDiagnosis::Suggestion(_),
            CoherenceVerdict::Coherent,
        ) => TrafficLight::Verde,
        (
            PrimaryDiagnosis::AdequateProfile | PrimaryDiagnosis::Suggestion(_),
            CoherenceVerdict::Neutral,
        ) => TrafficLight::Amarillo,
        (
            PrimaryDiagnosis::AdequateProfile | PrimaryDiagnosis::Suggestion(_),
            CoherenceVerdict::RequiresGuidance,
        ) => TrafficLight::Rojo,
        (PrimaryDiagnosis::NoClearSuggestion, _)
        | (
            PrimaryDiagnosis::AdequateProfile | PrimaryDiagnosis::Suggestion(_),
            CoherenceVerdict::NoProfile,
        ) => TrafficLight::SinSugerencia,
    }
}

/// Counselor-facing sentence for the final category.
pub(crate) fn recommendation(
    traffic_light: TrafficLight,
    primary: &PrimaryDiagnosis,
    weighted_area: AreaCode,
    declared_career: &str,
) -> String {
    let declared = declared_career.trim();
    match traffic_light {
        TrafficLight::Verde => match primary {
            PrimaryDiagnosis::AdequateProfile => format!(
                "El perfil {} respalda la elección de {declared}.",
                weighted_area.label()
            ),
            _ => format!(
                "El perfil {} es compatible con {declared}; {}.",
                weighted_area.label(),
                primary.summary()
            ),
        },
        TrafficLight::Amarillo => format!(
            "Perfil {} neutral para {declared}; conviene explorar: {}.",
            weighted_area.label(),
            primary.summary()
        ),
        TrafficLight::Rojo => format!(
            "El perfil {} contrasta con {declared}; se recomienda orientación vocacional.",
            weighted_area.label()
        ),
        TrafficLight::SinSugerencia => match primary {
            PrimaryDiagnosis::Suggestion(candidates) => format!(
                "La carrera {declared} no tiene perfil definido; considerar: {candidates}."
            ),
            _ => format!(
                "No hay una sugerencia clara para el área {}; revisar de forma individual.",
                weighted_area.letter()
            ),
        },
        TrafficLight::NoAceptable => {
            "Respuestas demasiado uniformes; repetir la aplicación del cuestionario.".to_string()
        }
    }
}
