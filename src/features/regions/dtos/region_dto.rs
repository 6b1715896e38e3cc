use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::{District, Province, Regency};
use crate::features::regions::services::CatalogStatus;

/// Query parameters for searching regions
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RegionSearchQuery {
    /// Search by name (case-insensitive, partial match)
    #[param(example = "jawa")]
    pub search: Option<String>,
}

/// Response DTO for province data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceResponseDto {
    pub id: i64,
    pub name: String,
}

impl From<Province> for ProvinceResponseDto {
    fn from(province: Province) -> Self {
        Self {
            id: province.id,
            name: province.name,
        }
    }
}

/// Response DTO for regency data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegencyResponseDto {
    pub id: i64,
    pub name: String,
    pub province_id: i64,
}

impl From<Regency> for RegencyResponseDto {
    fn from(regency: Regency) -> Self {
        Self {
            id: regency.id,
            name: regency.name,
            province_id: regency.province_id,
        }
    }
}

/// Response DTO for district data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictResponseDto {
    pub id: i64,
    pub name: String,
    pub regency_id: i64,
}

impl From<District> for DistrictResponseDto {
    fn from(district: District) -> Self {
        Self {
            id: district.id,
            name: district.name,
            regency_id: district.regency_id,
        }
    }
}

/// Catalog fetch state as seen by clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CatalogState {
    Loading,
    Ready,
    Unavailable,
}

/// Response DTO for the catalog status endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatusDto {
    pub state: CatalogState,
    /// True while the filters must stay blocked
    pub loading: bool,
    pub provinces: usize,
    pub regencies: usize,
    pub districts: usize,
}

impl From<&CatalogStatus> for CatalogStatusDto {
    fn from(status: &CatalogStatus) -> Self {
        let (state, counts) = match status {
            CatalogStatus::Loading => (CatalogState::Loading, (0, 0, 0)),
            CatalogStatus::Ready(catalog) => (
                CatalogState::Ready,
                (
                    catalog.provinces().len(),
                    catalog.regencies().len(),
                    catalog.districts().len(),
                ),
            ),
            CatalogStatus::Unavailable => (CatalogState::Unavailable, (0, 0, 0)),
        };

        Self {
            state,
            loading: status.is_loading(),
            provinces: counts.0,
            regencies: counts.1,
            districts: counts.2,
        }
    }
}
