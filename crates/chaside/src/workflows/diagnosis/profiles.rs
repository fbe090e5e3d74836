use super::domain::{AreaCode, CoherenceVerdict};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

/// Canonical lookup key for a career name: case-folded, accents stripped,
/// whitespace collapsed. Applied to both catalog names and declared careers.
pub fn canonicalize_career(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect()
}

/// Decomposed input (`u` + U+0301) carries its accent as a separate mark.
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

/// Areas a career expects to be strong, and optionally areas that argue against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub name: String,
    pub strong: Vec<AreaCode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weak: Vec<AreaCode>,
}

impl CareerProfile {
    pub fn new(name: impl Into<String>, strong: &[AreaCode], weak: &[AreaCode]) -> Self {
        Self {
            name: name.into(),
            strong: strong.to_vec(),
            weak: weak.to_vec(),
        }
    }

    pub fn coherence(&self, area: AreaCode) -> CoherenceVerdict {
        if self.strong.contains(&area) {
            CoherenceVerdict::Coherent
        } else if self.weak.contains(&area) {
            CoherenceVerdict::RequiresGuidance
        } else {
            CoherenceVerdict::Neutral
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CareerCatalogError {
    #[error("career '{0}' is listed more than once")]
    DuplicateCareer(String),
    #[error("career name cannot be blank")]
    BlankName,
    #[error("failed to read career profiles: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid career profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Career profiles in display order, indexed by canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CareerCatalog {
    profiles: Vec<CareerProfile>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl CareerCatalog {
    pub fn new(profiles: Vec<CareerProfile>) -> Result<Self, CareerCatalogError> {
        let mut index = HashMap::with_capacity(profiles.len());
        for (position, profile) in profiles.iter().enumerate() {
            let key = canonicalize_career(&profile.name);
            if key.is_empty() {
                return Err(CareerCatalogError::BlankName);
            }
            if index.insert(key, position).is_some() {
                return Err(CareerCatalogError::DuplicateCareer(profile.name.clone()));
            }
        }
        Ok(Self { profiles, index })
    }

    /// The ten programs offered by the institution the inventory was built for.
    pub fn standard() -> Self {
        use AreaCode::*;

        let profiles = vec![
            CareerProfile::new("Arquitectura", &[A, I], &[E]),
            CareerProfile::new("Contador Público", &[C, H], &[D]),
            CareerProfile::new("Licenciatura en Administración", &[C, H], &[D]),
            CareerProfile::new("Ingeniería Ambiental", &[E, I], &[A]),
            CareerProfile::new("Ingeniería Bioquímica", &[E, I], &[A, S]),
            CareerProfile::new("Ingeniería en Gestión Empresarial", &[C, I], &[A]),
            CareerProfile::new("Ingeniería Industrial", &[I, C], &[A]),
            CareerProfile::new("Ingeniería en Inteligencia Artificial", &[I, E], &[H]),
            CareerProfile::new("Ingeniería Mecatrónica", &[I, E], &[H]),
            CareerProfile::new("Ingeniería en Sistemas Computacionales", &[I, E], &[H]),
        ];

        let index = profiles
            .iter()
            .enumerate()
            .map(|(position, profile)| (canonicalize_career(&profile.name), position))
            .collect();
        Self { profiles, index }
    }

    /// Reads a JSON array of `{ "name", "strong", "weak"? }` objects.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CareerCatalogError> {
        let profiles: Vec<CareerProfile> = serde_json::from_reader(reader)?;
        Self::new(profiles)
    }

    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, CareerCatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn profiles(&self) -> &[CareerProfile] {
        &self.profiles
    }

    pub fn lookup(&self, career: &str) -> Option<&CareerProfile> {
        self.index
            .get(&canonicalize_career(career))
            .map(|position| &self.profiles[*position])
    }

    pub fn evaluate(&self, area: AreaCode, declared_career: &str) -> CoherenceVerdict {
        match self.lookup(declared_career) {
            Some(profile) => profile.coherence(area),
            None => CoherenceVerdict::NoProfile,
        }
    }

    /// Careers listing `area` as strong, in catalog order.
    pub fn candidates_for(&self, area: AreaCode) -> Vec<&CareerProfile> {
        self.profiles
            .iter()
            .filter(|profile| profile.strong.contains(&area))
            .collect()
    }
}

impl Default for CareerCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'de> Deserialize<'de> for CareerCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let profiles = Vec::<CareerProfile>::deserialize(deserializer)?;
        CareerCatalog::new(profiles).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn canonicalization_folds_case_accents_and_spacing() {
        assert_eq!(
            canonicalize_career("\u{feff}  INGENIERÍA   en Gestión\tEmpresarial "),
            "ingenieria en gestion empresarial"
        );
        assert_eq!(canonicalize_career("Contador Publico"), "contador publico");
        assert_eq!(canonicalize_career("Diseño"), "diseno");
    }

    #[test]
    fn decomposed_accents_are_stripped() {
        assert_eq!(
            canonicalize_career("Contador Pu\u{0301}blico"),
            "contador publico"
        );
        assert_eq!(
            canonicalize_career("Ingenieri\u{0301}a Mecatro\u{0301}nica"),
            canonicalize_career("Ingeniería Mecatrónica")
        );
        assert_eq!(
            CareerCatalog::standard().evaluate(AreaCode::C, "Contador Pu\u{0301}blico"),
            CoherenceVerdict::Coherent
        );
    }

    #[test]
    fn lookup_matches_unaccented_declarations() {
        let catalog = CareerCatalog::standard();
        let profile = catalog
            .lookup("ingenieria  mecatronica")
            .expect("mecatrónica matched");
        assert_eq!(profile.name, "Ingeniería Mecatrónica");
    }

    #[test]
    fn evaluate_applies_strong_then_weak_then_neutral() {
        let catalog = CareerCatalog::standard();
        assert_eq!(
            catalog.evaluate(AreaCode::A, "Arquitectura"),
            CoherenceVerdict::Coherent
        );
        assert_eq!(
            catalog.evaluate(AreaCode::E, "Arquitectura"),
            CoherenceVerdict::RequiresGuidance
        );
        assert_eq!(
            catalog.evaluate(AreaCode::S, "Arquitectura"),
            CoherenceVerdict::Neutral
        );
    }

    #[test]
    fn unknown_career_has_no_profile_for_every_area() {
        let catalog = CareerCatalog::standard();
        for area in AreaCode::ordered() {
            assert_eq!(
                catalog.evaluate(area, "Medicina Veterinaria"),
                CoherenceVerdict::NoProfile
            );
        }
        assert_eq!(catalog.evaluate(AreaCode::C, ""), CoherenceVerdict::NoProfile);
    }

    #[test]
    fn weak_set_is_optional() {
        let catalog = CareerCatalog::from_json_reader(Cursor::new(
            r#"[{ "name": "Enfermería", "strong": ["S"] }]"#,
        ))
        .expect("profile without weak areas loads");
        assert_eq!(
            catalog.evaluate(AreaCode::H, "enfermeria"),
            CoherenceVerdict::Neutral
        );
        assert_eq!(
            catalog.evaluate(AreaCode::S, "Enfermería"),
            CoherenceVerdict::Coherent
        );
    }

    #[test]
    fn candidates_follow_catalog_order() {
        let catalog = CareerCatalog::standard();
        let names: Vec<&str> = catalog
            .candidates_for(AreaCode::C)
            .iter()
            .map(|profile| profile.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Contador Público",
                "Licenciatura en Administración",
                "Ingeniería en Gestión Empresarial",
                "Ingeniería Industrial",
            ]
        );
        assert!(catalog.candidates_for(AreaCode::S).is_empty());
    }

    #[test]
    fn rejects_duplicate_canonical_names() {
        let error = CareerCatalog::new(vec![
            CareerProfile::new("Arquitectura", &[AreaCode::A], &[]),
            CareerProfile::new("ARQUITECTURA ", &[AreaCode::I], &[]),
        ])
        .expect_err("duplicate after canonicalization");
        assert!(matches!(error, CareerCatalogError::DuplicateCareer(_)));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = CareerCatalog::from_path("./does-not-exist.json").expect_err("missing file");
        assert!(matches!(error, CareerCatalogError::Io(_)));
    }
}
