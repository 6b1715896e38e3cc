use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::regions::dtos::{
    CatalogStatusDto, DistrictResponseDto, ProvinceResponseDto, RegencyResponseDto,
    RegionSearchQuery,
};
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

/// Report whether the region catalog has loaded
#[utoipa::path(
    get,
    path = "/api/regions/status",
    responses(
        (status = 200, description = "Catalog load state", body = ApiResponse<CatalogStatusDto>)
    ),
    tag = "regions"
)]
pub async fn get_catalog_status(
    State(service): State<Arc<RegionService>>,
) -> Json<ApiResponse<CatalogStatusDto>> {
    let dto = CatalogStatusDto::from(&service.status());
    Json(ApiResponse::success(Some(dto), None, None))
}

// ==================== Province Handlers ====================

/// List all provinces
#[utoipa::path(
    get,
    path = "/api/regions/provinces",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "List of provinces", body = ApiResponse<Vec<ProvinceResponseDto>>),
        (status = 503, description = "Region data is still loading")
    ),
    tag = "regions"
)]
pub async fn list_provinces(
    State(service): State<Arc<RegionService>>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<ProvinceResponseDto>>>> {
    let provinces = service.list_provinces(query.search.as_deref())?;
    let dtos: Vec<ProvinceResponseDto> = provinces.into_iter().map(Into::into).collect();
    let meta = Meta::total(dtos.len());
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

/// Get a province by id
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{id}",
    params(
        ("id" = i64, Path, description = "Province id")
    ),
    responses(
        (status = 200, description = "Province details", body = ApiResponse<ProvinceResponseDto>),
        (status = 404, description = "Province not found"),
        (status = 503, description = "Region data is still loading")
    ),
    tag = "regions"
)]
pub async fn get_province(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<ProvinceResponseDto>>> {
    let province = service.get_province(id)?;
    Ok(Json(ApiResponse::success(
        Some(province.into()),
        None,
        None,
    )))
}

/// List regencies in a province
#[utoipa::path(
    get,
    path = "/api/regions/provinces/{id}/regencies",
    params(
        ("id" = i64, Path, description = "Province id"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "Regencies of the province, empty for an unknown province", body = ApiResponse<Vec<RegencyResponseDto>>),
        (status = 503, description = "Region data is still loading")
    ),
    tag = "regions"
)]
pub async fn list_regencies_by_province(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<i64>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegencyResponseDto>>>> {
    let regencies = service.list_regencies_by_province(id, query.search.as_deref())?;
    let dtos: Vec<RegencyResponseDto> = regencies.into_iter().map(Into::into).collect();
    let meta = Meta::total(dtos.len());
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

// ==================== Regency Handlers ====================

/// Get a regency by id
#[utoipa::path(
    get,
    path = "/api/regions/regencies/{id}",
    params(
        ("id" = i64, Path, description = "Regency id")
    ),
    responses(
        (status = 200, description = "Regency details", body = ApiResponse<RegencyResponseDto>),
        (status = 404, description = "Regency not found"),
        (status = 503, description = "Region data is still loading")
    ),
    tag = "regions"
)]
pub async fn get_regency(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<RegencyResponseDto>>> {
    let regency = service.get_regency(id)?;
    Ok(Json(ApiResponse::success(Some(regency.into()), None, None)))
}

/// List districts in a regency
#[utoipa::path(
    get,
    path = "/api/regions/regencies/{id}/districts",
    params(
        ("id" = i64, Path, description = "Regency id"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "Districts of the regency, empty for an unknown regency", body = ApiResponse<Vec<DistrictResponseDto>>),
        (status = 503, description = "Region data is still loading")
    ),
    tag = "regions"
)]
pub async fn list_districts_by_regency(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<i64>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let districts = service.list_districts_by_regency(id, query.search.as_deref())?;
    let dtos: Vec<DistrictResponseDto> = districts.into_iter().map(Into::into).collect();
    let meta = Meta::total(dtos.len());
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

// ==================== District Handlers ====================

/// Get a district by id
#[utoipa::path(
    get,
    path = "/api/regions/districts/{id}",
    params(
        ("id" = i64, Path, description = "District id")
    ),
    responses(
        (status = 200, description = "District details", body = ApiResponse<DistrictResponseDto>),
        (status = 404, description = "District not found"),
        (status = 503, description = "Region data is still loading")
    ),
    tag = "regions"
)]
pub async fn get_district(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<DistrictResponseDto>>> {
    let district = service.get_district(id)?;
    Ok(Json(ApiResponse::success(
        Some(district.into()),
        None,
        None,
    )))
}
