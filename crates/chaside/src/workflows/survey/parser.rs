use super::layout::{clean_header, resolve, ResolvedLayout, SurveyLayout};
use crate::workflows::diagnosis::SurveyResponse;
use std::io::Read;

pub(crate) enum ParseError {
    Csv(csv::Error),
    MissingColumns(Vec<String>),
}

impl From<csv::Error> for ParseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub(crate) struct ParsedSurvey {
    pub responses: Vec<SurveyResponse>,
    pub layout: ResolvedLayout,
}

pub(crate) fn parse_survey<R: Read>(
    reader: R,
    layout: &SurveyLayout,
    item_count: usize,
) -> Result<ParsedSurvey, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let cleaned: Vec<&str> = headers.iter().map(clean_header).collect();
    let resolved =
        resolve(layout, &cleaned, item_count).map_err(ParseError::MissingColumns)?;

    let mut responses = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let cell = |index: usize| record.get(index).unwrap_or("").to_string();

        responses.push(SurveyResponse {
            name: cell(resolved.name),
            declared_career: cell(resolved.career),
            responses: resolved
                .items
                .iter()
                .map(|slot| slot.map(cell).unwrap_or_default())
                .collect(),
        });
    }

    Ok(ParsedSurvey {
        responses,
        layout: resolved,
    })
}
