use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME_COLUMN: &str = "Ingrese su nombre completo";
pub const DEFAULT_CAREER_COLUMN: &str = "¿A qué carrera desea ingresar?";
/// Form exports carry timestamp and contact columns before item 1 (column F).
pub const DEFAULT_ITEM_OFFSET: usize = 5;

/// How item numbers map to physical columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemColumns {
    /// Item 1 sits at zero-based column `start`, item 2 right after it, and so on.
    Offset { start: usize },
    /// Headers starting with `prefix`, in file order.
    Prefix { prefix: String },
    /// Header names listed in item order.
    Explicit { columns: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyLayout {
    pub name_column: String,
    pub career_column: String,
    pub items: ItemColumns,
}

impl Default for SurveyLayout {
    fn default() -> Self {
        Self {
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            career_column: DEFAULT_CAREER_COLUMN.to_string(),
            items: ItemColumns::Offset {
                start: DEFAULT_ITEM_OFFSET,
            },
        }
    }
}

/// Column indices for one header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedLayout {
    pub name: usize,
    pub career: usize,
    /// One slot per item; `None` when the file has no column for it.
    pub items: Vec<Option<usize>>,
}

impl ResolvedLayout {
    pub fn resolved_items(&self) -> usize {
        self.items.iter().filter(|slot| slot.is_some()).count()
    }
}

pub(crate) fn clean_header(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}' || c == '\u{200b}')
}

fn find_column(headers: &[&str], wanted: &str) -> Option<usize> {
    let wanted = clean_header(wanted);
    headers.iter().position(|header| *header == wanted)
}

/// Resolves the layout against cleaned headers. Errors list every missing
/// required field.
pub(crate) fn resolve(
    layout: &SurveyLayout,
    headers: &[&str],
    item_count: usize,
) -> Result<ResolvedLayout, Vec<String>> {
    let name = find_column(headers, &layout.name_column);
    let career = find_column(headers, &layout.career_column);

    let (name, career) = match (name, career) {
        (Some(name), Some(career)) => (name, career),
        (name, career) => {
            let mut missing = Vec::new();
            if name.is_none() {
                missing.push(layout.name_column.clone());
            }
            if career.is_none() {
                missing.push(layout.career_column.clone());
            }
            return Err(missing);
        }
    };

    let items = match &layout.items {
        ItemColumns::Offset { start } => (0..item_count)
            .map(|offset| Some(start + offset).filter(|index| *index < headers.len()))
            .collect(),
        ItemColumns::Prefix { prefix } => {
            let prefix = clean_header(prefix);
            let mut matches = headers
                .iter()
                .enumerate()
                .filter(|(_, header)| header.starts_with(prefix))
                .map(|(index, _)| index);
            (0..item_count).map(|_| matches.next()).collect()
        }
        ItemColumns::Explicit { columns } => (0..item_count)
            .map(|position| {
                columns
                    .get(position)
                    .and_then(|column| find_column(headers, column))
            })
            .collect(),
    };

    Ok(ResolvedLayout {
        name,
        career,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<&'static str> {
        vec!["Marca temporal", "Nombre", "Carrera", "P1", "P2", "P3", "Notas"]
    }

    fn layout(items: ItemColumns) -> SurveyLayout {
        SurveyLayout {
            name_column: "Nombre".to_string(),
            career_column: " Carrera ".to_string(),
            items,
        }
    }

    #[test]
    fn offset_layout_clips_to_available_columns() {
        let resolved =
            resolve(&layout(ItemColumns::Offset { start: 3 }), &headers(), 5).expect("resolves");
        assert_eq!(resolved.name, 1);
        assert_eq!(resolved.career, 2);
        assert_eq!(resolved.items, vec![Some(3), Some(4), Some(5), Some(6), None]);
        assert_eq!(resolved.resolved_items(), 4);
    }

    #[test]
    fn prefix_layout_follows_file_order() {
        let resolved = resolve(
            &layout(ItemColumns::Prefix {
                prefix: "P".to_string(),
            }),
            &headers(),
            4,
        )
        .expect("resolves");
        assert_eq!(resolved.items, vec![Some(3), Some(4), Some(5), None]);
    }

    #[test]
    fn explicit_layout_maps_names() {
        let resolved = resolve(
            &layout(ItemColumns::Explicit {
                columns: vec!["P3".to_string(), "P1".to_string(), "P9".to_string()],
            }),
            &headers(),
            3,
        )
        .expect("resolves");
        assert_eq!(resolved.items, vec![Some(5), Some(3), None]);
    }

    #[test]
    fn reports_every_missing_required_column() {
        let missing = resolve(&SurveyLayout::default(), &headers(), 98).expect_err("missing");
        assert_eq!(
            missing,
            vec![
                DEFAULT_NAME_COLUMN.to_string(),
                DEFAULT_CAREER_COLUMN.to_string()
            ]
        );
    }

    #[test]
    fn clean_header_strips_bom_and_spacing() {
        assert_eq!(clean_header("\u{feff} Nombre "), "Nombre");
    }

    #[test]
    fn layout_deserializes_from_tagged_json() {
        let parsed: SurveyLayout = serde_json::from_str(
            r#"{ "name_column": "Nombre", "career_column": "Carrera",
                 "items": { "kind": "prefix", "prefix": "P" } }"#,
        )
        .expect("layout parses");
        assert_eq!(
            parsed.items,
            ItemColumns::Prefix {
                prefix: "P".to_string()
            }
        );
    }
}
