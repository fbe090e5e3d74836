use super::domain::AreaCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Items that feed one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaItems {
    pub area: AreaCode,
    pub interest: Vec<usize>,
    pub aptitude: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemMapError {
    #[error("area {0} is missing from the item table")]
    MissingArea(AreaCode),
    #[error("area {0} appears more than once in the item table")]
    DuplicateArea(AreaCode),
    #[error("item positions are 1-based; area {0} lists item 0")]
    ZeroPosition(AreaCode),
    #[error("item {position} is assigned to both {first} and {second}")]
    SharedItem {
        position: usize,
        first: AreaCode,
        second: AreaCode,
    },
}

/// Item-to-area assignment, validated so every item feeds at most one subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemMap {
    areas: Vec<AreaItems>,
}

impl ItemMap {
    pub fn new(entries: Vec<AreaItems>) -> Result<Self, ItemMapError> {
        let mut owners: HashMap<usize, AreaCode> = HashMap::new();
        for entry in &entries {
            for position in entry.interest.iter().chain(entry.aptitude.iter()) {
                if *position == 0 {
                    return Err(ItemMapError::ZeroPosition(entry.area));
                }
                if let Some(first) = owners.insert(*position, entry.area) {
                    return Err(ItemMapError::SharedItem {
                        position: *position,
                        first,
                        second: entry.area,
                    });
                }
            }
        }

        let mut areas = Vec::with_capacity(entries.len());
        for area in AreaCode::ordered() {
            let mut matching = entries.iter().filter(|entry| entry.area == area);
            let entry = matching.next().ok_or(ItemMapError::MissingArea(area))?;
            if matching.next().is_some() {
                return Err(ItemMapError::DuplicateArea(area));
            }
            areas.push(entry.clone());
        }

        Ok(Self { areas })
    }

    /// The 98-item inventory: 10 interest and 4 aptitude items per area.
    pub fn canonical() -> Self {
        const TABLE: [(AreaCode, [usize; 10], [usize; 4]); 7] = [
            (
                AreaCode::C,
                [1, 12, 20, 53, 64, 71, 78, 85, 91, 98],
                [2, 15, 46, 51],
            ),
            (
                AreaCode::H,
                [9, 25, 34, 41, 56, 67, 74, 80, 89, 95],
                [30, 63, 72, 86],
            ),
            (
                AreaCode::A,
                [3, 11, 21, 28, 36, 45, 50, 57, 81, 96],
                [22, 39, 76, 82],
            ),
            (
                AreaCode::S,
                [8, 16, 23, 33, 44, 52, 62, 70, 87, 92],
                [4, 29, 40, 69],
            ),
            (
                AreaCode::I,
                [6, 19, 27, 38, 47, 54, 60, 75, 83, 97],
                [10, 26, 59, 90],
            ),
            (
                AreaCode::D,
                [5, 14, 24, 31, 37, 48, 58, 65, 73, 84],
                [13, 18, 43, 66],
            ),
            (
                AreaCode::E,
                [17, 32, 35, 42, 49, 61, 68, 77, 88, 93],
                [7, 55, 79, 94],
            ),
        ];

        Self {
            areas: TABLE
                .iter()
                .map(|(area, interest, aptitude)| AreaItems {
                    area: *area,
                    interest: interest.to_vec(),
                    aptitude: aptitude.to_vec(),
                })
                .collect(),
        }
    }

    pub fn areas(&self) -> &[AreaItems] {
        &self.areas
    }

    pub fn items_for(&self, area: AreaCode) -> &AreaItems {
        // `new` and `canonical` both store areas in `AreaCode::ordered()` order.
        &self.areas[area.index()]
    }

    /// Highest item position referenced, i.e. how many answers a row must carry.
    pub fn item_count(&self) -> usize {
        self.areas
            .iter()
            .flat_map(|entry| entry.interest.iter().chain(entry.aptitude.iter()))
            .copied()
            .max()
            .unwrap_or(0)
    }
}

impl Default for ItemMap {
    fn default() -> Self {
        Self::canonical()
    }
}

impl<'de> Deserialize<'de> for ItemMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            areas: Vec<AreaItems>,
        }

        let raw = Raw::deserialize(deserializer)?;
        ItemMap::new(raw.areas).map_err(serde::de::Error::custom)
    }
}
