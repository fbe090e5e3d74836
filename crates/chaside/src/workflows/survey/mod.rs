mod layout;
mod parser;

pub use layout::{
    ItemColumns, SurveyLayout, DEFAULT_CAREER_COLUMN, DEFAULT_ITEM_OFFSET, DEFAULT_NAME_COLUMN,
};

use crate::workflows::diagnosis::SurveyResponse;
use parser::ParseError;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug)]
pub enum SurveyImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// Name and/or career columns are absent; no row can be classified.
    MissingColumns(Vec<String>),
}

impl std::fmt::Display for SurveyImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurveyImportError::Io(err) => write!(f, "failed to read survey export: {}", err),
            SurveyImportError::Csv(err) => write!(f, "invalid survey CSV data: {}", err),
            SurveyImportError::MissingColumns(columns) => write!(
                f,
                "survey export is missing required column(s): {}",
                columns
                    .iter()
                    .map(|column| format!("'{column}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

impl std::error::Error for SurveyImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurveyImportError::Io(err) => Some(err),
            SurveyImportError::Csv(err) => Some(err),
            SurveyImportError::MissingColumns(_) => None,
        }
    }
}

impl From<std::io::Error> for SurveyImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SurveyImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<ParseError> for SurveyImportError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Csv(err) => Self::Csv(err),
            ParseError::MissingColumns(columns) => Self::MissingColumns(columns),
        }
    }
}

/// Reads questionnaire exports into raw [`SurveyResponse`] rows.
pub struct SurveyImporter;

impl SurveyImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        layout: &SurveyLayout,
        item_count: usize,
    ) -> Result<Vec<SurveyResponse>, SurveyImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, layout, item_count)
    }

    /// Parses every row, extracting only the name, career, and item columns;
    /// any other column, including previously derived results, is ignored.
    pub fn from_reader<R: Read>(
        reader: R,
        layout: &SurveyLayout,
        item_count: usize,
    ) -> Result<Vec<SurveyResponse>, SurveyImportError> {
        let parsed = parser::parse_survey(reader, layout, item_count)?;

        let resolved = parsed.layout.resolved_items();
        if resolved < item_count {
            warn!(
                resolved,
                expected = item_count,
                "survey export has fewer item columns than the inventory; missing items score 0"
            );
        }
        info!(rows = parsed.responses.len(), "survey export loaded");

        Ok(parsed.responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn compact_layout() -> SurveyLayout {
        SurveyLayout {
            name_column: "Nombre".to_string(),
            career_column: "Carrera".to_string(),
            items: ItemColumns::Offset { start: 2 },
        }
    }

    #[test]
    fn reads_name_career_and_items() {
        let csv = "Nombre,Carrera,P1,P2,P3\nAna, Arquitectura ,Sí,No,x\n";
        let rows = SurveyImporter::from_reader(Cursor::new(csv), &compact_layout(), 3)
            .expect("import succeeds");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ana");
        assert_eq!(rows[0].declared_career, "Arquitectura");
        assert_eq!(rows[0].responses, vec!["Sí", "No", "x"]);
    }

    #[test]
    fn short_rows_fill_missing_cells_with_blanks() {
        let csv = "Nombre,Carrera,P1,P2,P3\nAna,Arquitectura,Sí\n";
        let rows = SurveyImporter::from_reader(Cursor::new(csv), &compact_layout(), 4)
            .expect("import succeeds");

        assert_eq!(rows[0].responses, vec!["Sí", "", "", ""]);
    }

    #[test]
    fn missing_required_columns_are_fatal() {
        let csv = "Alumno,Carrera,P1\nAna,Arquitectura,Sí\n";
        let error = SurveyImporter::from_reader(Cursor::new(csv), &compact_layout(), 1)
            .expect_err("name column missing");

        match error {
            SurveyImportError::MissingColumns(columns) => {
                assert_eq!(columns, vec!["Nombre".to_string()]);
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[test]
    fn missing_columns_message_names_each_field() {
        let error = SurveyImportError::MissingColumns(vec!["Nombre".into(), "Carrera".into()]);
        assert_eq!(
            error.to_string(),
            "survey export is missing required column(s): 'Nombre', 'Carrera'"
        );
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = SurveyImporter::from_path("./does-not-exist.csv", &compact_layout(), 98)
            .expect_err("expected io error");

        match error {
            SurveyImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
