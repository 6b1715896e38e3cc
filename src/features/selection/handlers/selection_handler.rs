use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::selection::dtos::{SelectionSnapshotDto, UpdateSelectionRequestDto};
use crate::features::selection::services::SelectionService;
use crate::shared::types::ApiResponse;

type SnapshotResponse = Result<Json<ApiResponse<SelectionSnapshotDto>>>;

fn respond(snapshot: SelectionSnapshotDto) -> Json<ApiResponse<SelectionSnapshotDto>> {
    Json(ApiResponse::success(Some(snapshot), None, None))
}

/// Current selection with breadcrumb, content panel and filter options
#[utoipa::path(
    get,
    path = "/api/selection",
    responses(
        (status = 200, description = "Current selection", body = ApiResponse<SelectionSnapshotDto>),
        (status = 503, description = "Region data is still loading")
    ),
    tag = "selection"
)]
pub async fn get_selection(State(service): State<Arc<SelectionService>>) -> SnapshotResponse {
    Ok(respond(service.snapshot()?))
}

/// Select a province; clears regency and district
#[utoipa::path(
    put,
    path = "/api/selection/province",
    request_body = UpdateSelectionRequestDto,
    responses(
        (status = 200, description = "Updated selection", body = ApiResponse<SelectionSnapshotDto>),
        (status = 400, description = "Malformed body or province not in the catalog"),
        (status = 503, description = "Region data is still loading")
    ),
    tag = "selection"
)]
pub async fn update_province(
    State(service): State<Arc<SelectionService>>,
    AppJson(request): AppJson<UpdateSelectionRequestDto>,
) -> SnapshotResponse {
    Ok(respond(service.set_province(request.id)?))
}

/// Select a regency of the selected province; clears district
#[utoipa::path(
    put,
    path = "/api/selection/regency",
    request_body = UpdateSelectionRequestDto,
    responses(
        (status = 200, description = "Updated selection", body = ApiResponse<SelectionSnapshotDto>),
        (status = 400, description = "Malformed body or regency not part of the selected province"),
        (status = 409, description = "No province selected"),
        (status = 503, description = "Region data is still loading")
    ),
    tag = "selection"
)]
pub async fn update_regency(
    State(service): State<Arc<SelectionService>>,
    AppJson(request): AppJson<UpdateSelectionRequestDto>,
) -> SnapshotResponse {
    Ok(respond(service.set_regency(request.id)?))
}

/// Select a district of the selected regency
#[utoipa::path(
    put,
    path = "/api/selection/district",
    request_body = UpdateSelectionRequestDto,
    responses(
        (status = 200, description = "Updated selection", body = ApiResponse<SelectionSnapshotDto>),
        (status = 400, description = "Malformed body or district not part of the selected regency"),
        (status = 409, description = "No regency selected"),
        (status = 503, description = "Region data is still loading")
    ),
    tag = "selection"
)]
pub async fn update_district(
    State(service): State<Arc<SelectionService>>,
    AppJson(request): AppJson<UpdateSelectionRequestDto>,
) -> SnapshotResponse {
    Ok(respond(service.set_district(request.id)?))
}

/// Clear the whole selection and forget it
#[utoipa::path(
    delete,
    path = "/api/selection",
    responses(
        (status = 200, description = "Empty selection", body = ApiResponse<SelectionSnapshotDto>),
        (status = 503, description = "Region data is still loading")
    ),
    tag = "selection"
)]
pub async fn reset_selection(State(service): State<Arc<SelectionService>>) -> SnapshotResponse {
    Ok(respond(service.reset()?))
}
