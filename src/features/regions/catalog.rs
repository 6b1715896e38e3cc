//! In-memory region catalog
//!
//! The catalog is the flat dataset exactly as the provider ships it: three
//! lists with parent references. Lookups are linear scans; the dataset is
//! small and never mutated after load.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::features::regions::models::{District, Province, Regency};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionCatalog {
    #[serde(default, deserialize_with = "lenient_rows")]
    provinces: Vec<Province>,
    #[serde(default, deserialize_with = "lenient_rows")]
    regencies: Vec<Regency>,
    #[serde(default, deserialize_with = "lenient_rows")]
    districts: Vec<District>,
}

/// Accept a missing or null list as empty and skip rows that do not fit the model
fn lenient_rows<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    let raw = raw.unwrap_or_default();
    let total = raw.len();

    let rows: Vec<T> = raw
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();

    if rows.len() < total {
        let kind = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("row");
        tracing::warn!(
            "Skipped {} malformed {} rows out of {}",
            total - rows.len(),
            kind,
            total
        );
    }

    Ok(rows)
}

/// Case-insensitive partial name match; an empty or absent term matches everything
pub fn matches_search(name: &str, search: Option<&str>) -> bool {
    match search.map(str::trim) {
        Some(term) if !term.is_empty() => name.to_lowercase().contains(&term.to_lowercase()),
        _ => true,
    }
}

impl RegionCatalog {
    #[cfg(test)]
    pub fn new(
        provinces: Vec<Province>,
        regencies: Vec<Regency>,
        districts: Vec<District>,
    ) -> Self {
        Self {
            provinces,
            regencies,
            districts,
        }
    }

    /// Parse the provider document (`{ provinces, regencies, districts }`)
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty() && self.regencies.is_empty() && self.districts.is_empty()
    }

    /// All provinces in source order
    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn regencies(&self) -> &[Regency] {
        &self.regencies
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// Regencies of a province in source order; empty when no province is given
    pub fn regencies_of(&self, province_id: Option<i64>) -> Vec<&Regency> {
        let Some(province_id) = province_id else {
            return Vec::new();
        };
        self.regencies
            .iter()
            .filter(|r| r.province_id == province_id)
            .collect()
    }

    /// Districts of a regency in source order; empty when no regency is given
    pub fn districts_of(&self, regency_id: Option<i64>) -> Vec<&District> {
        let Some(regency_id) = regency_id else {
            return Vec::new();
        };
        self.districts
            .iter()
            .filter(|d| d.regency_id == regency_id)
            .collect()
    }

    pub fn find_province(&self, id: i64) -> Option<&Province> {
        self.provinces.iter().find(|p| p.id == id)
    }

    pub fn find_regency(&self, id: i64) -> Option<&Regency> {
        self.regencies.iter().find(|r| r.id == id)
    }

    pub fn find_district(&self, id: i64) -> Option<&District> {
        self.districts.iter().find(|d| d.id == id)
    }
}

/// Small two-province catalog shared by tests across features
#[cfg(test)]
pub fn sample_catalog() -> RegionCatalog {
    RegionCatalog::new(
        vec![
            Province {
                id: 1,
                name: "Jawa Barat".to_string(),
            },
            Province {
                id: 2,
                name: "Jawa Tengah".to_string(),
            },
        ],
        vec![
            Regency {
                id: 10,
                name: "Bandung".to_string(),
                province_id: 1,
            },
            Regency {
                id: 20,
                name: "Semarang".to_string(),
                province_id: 2,
            },
            Regency {
                id: 11,
                name: "Bogor".to_string(),
                province_id: 1,
            },
        ],
        vec![
            District {
                id: 100,
                name: "Coblong".to_string(),
                regency_id: 10,
            },
            District {
                id: 200,
                name: "Tembalang".to_string(),
                regency_id: 20,
            },
            District {
                id: 101,
                name: "Sukajadi".to_string(),
                regency_id: 10,
            },
            District {
                id: 110,
                name: "Cibinong".to_string(),
                regency_id: 11,
            },
        ],
    )
}
