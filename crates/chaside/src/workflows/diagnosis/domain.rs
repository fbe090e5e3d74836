use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven CHASIDE dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AreaCode {
    C,
    H,
    A,
    S,
    I,
    D,
    E,
}

impl AreaCode {
    /// Fixed iteration order. Ties during dominance resolution go to the earlier area.
    pub const fn ordered() -> [Self; 7] {
        [
            Self::C,
            Self::H,
            Self::A,
            Self::S,
            Self::I,
            Self::D,
            Self::E,
        ]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::C => 'C',
            Self::H => 'H',
            Self::A => 'A',
            Self::S => 'S',
            Self::I => 'I',
            Self::D => 'D',
            Self::E => 'E',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::C => "Administrativas y Contables",
            Self::H => "Humanísticas y Sociales",
            Self::A => "Artísticas",
            Self::S => "Ciencias de la Salud",
            Self::I => "Ingenierías y Computación",
            Self::D => "Defensa y Seguridad",
            Self::E => "Ciencias Exactas y Agrarias",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|area| area.letter() == letter.to_ascii_uppercase())
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Scoring perspective used to pick a dominant area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lens {
    Interest,
    Aptitude,
    /// Interest plus aptitude, unweighted.
    Total,
    /// Interest and aptitude blended with [`super::ScoringWeights`].
    Weighted,
}

impl Lens {
    pub const fn ordered() -> [Self; 4] {
        [Self::Interest, Self::Aptitude, Self::Total, Self::Weighted]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Interest => "Intereses",
            Self::Aptitude => "Aptitudes",
            Self::Total => "Ambos",
            Self::Weighted => "Ponderada",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoherenceVerdict {
    Coherent,
    Neutral,
    RequiresGuidance,
    NoProfile,
}

impl CoherenceVerdict {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Coherent => "Coherente",
            Self::Neutral => "Neutral",
            Self::RequiresGuidance => "Requiere Orientación",
            Self::NoProfile => "Sin perfil definido",
        }
    }
}

/// Final traffic-light category assigned to every respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLight {
    Verde,
    Amarillo,
    Rojo,
    SinSugerencia,
    NoAceptable,
}

impl TrafficLight {
    /// Display order used by reports and sorting.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Verde,
            Self::Amarillo,
            Self::Rojo,
            Self::SinSugerencia,
            Self::NoAceptable,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Verde => "Verde",
            Self::Amarillo => "Amarillo",
            Self::Rojo => "Rojo",
            Self::SinSugerencia => "Sin sugerencia",
            Self::NoAceptable => "No aceptable",
        }
    }

    pub const fn rank(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const NOT_ACCEPTABLE_TEXT: &str = "Información no aceptable";
pub const NO_CLEAR_SUGGESTION_TEXT: &str = "Sin sugerencia clara";

/// Primary vocational diagnosis before the coherence check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "candidates", rename_all = "snake_case")]
pub enum PrimaryDiagnosis {
    NotAcceptable,
    AdequateProfile,
    Suggestion(String),
    NoClearSuggestion,
}

impl PrimaryDiagnosis {
    pub fn summary(&self) -> String {
        match self {
            PrimaryDiagnosis::NotAcceptable => NOT_ACCEPTABLE_TEXT.to_string(),
            PrimaryDiagnosis::AdequateProfile => "Perfil adecuado".to_string(),
            PrimaryDiagnosis::Suggestion(candidates) => format!("Sugerencia: {candidates}"),
            PrimaryDiagnosis::NoClearSuggestion => NO_CLEAR_SUGGESTION_TEXT.to_string(),
        }
    }
}

/// Canonical 0/1 answers in item order; position `n` holds item `n + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseVector(Vec<u8>);

impl ResponseVector {
    /// Builds a vector from already-normalized answers. Any non-zero value counts as 1.
    pub fn from_bits<I: IntoIterator<Item = u8>>(bits: I) -> Self {
        Self(bits.into_iter().map(|bit| u8::from(bit != 0)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Answer to a 1-based item; items beyond the vector read as 0.
    pub fn item(&self, position: usize) -> u8 {
        position
            .checked_sub(1)
            .and_then(|index| self.0.get(index))
            .copied()
            .unwrap_or(0)
    }

    pub fn yes_count(&self) -> usize {
        self.0.iter().filter(|bit| **bit == 1).count()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

/// One questionnaire row as read from the survey export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub name: String,
    pub declared_career: String,
    /// Raw answers in item order (item 1 first).
    pub responses: Vec<String>,
}
