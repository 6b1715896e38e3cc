use utoipa::{Modify, OpenApi};

use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::features::selection::{
    dtos as selection_dtos, handlers as selection_handlers, state as selection_state,
    view as selection_view,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::get_catalog_status,
        regions_handlers::list_provinces,
        regions_handlers::get_province,
        regions_handlers::list_regencies_by_province,
        regions_handlers::get_regency,
        regions_handlers::list_districts_by_regency,
        regions_handlers::get_district,
        // Selection
        selection_handlers::get_selection,
        selection_handlers::update_province,
        selection_handlers::update_regency,
        selection_handlers::update_district,
        selection_handlers::reset_selection,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Regions
            regions_dtos::ProvinceResponseDto,
            regions_dtos::RegencyResponseDto,
            regions_dtos::DistrictResponseDto,
            regions_dtos::CatalogState,
            regions_dtos::CatalogStatusDto,
            ApiResponse<regions_dtos::CatalogStatusDto>,
            ApiResponse<regions_dtos::ProvinceResponseDto>,
            ApiResponse<regions_dtos::RegencyResponseDto>,
            ApiResponse<regions_dtos::DistrictResponseDto>,
            ApiResponse<Vec<regions_dtos::ProvinceResponseDto>>,
            ApiResponse<Vec<regions_dtos::RegencyResponseDto>>,
            ApiResponse<Vec<regions_dtos::DistrictResponseDto>>,
            // Selection
            selection_dtos::UpdateSelectionRequestDto,
            selection_dtos::SelectionDto,
            selection_dtos::SelectionSnapshotDto,
            selection_state::SelectionLevel,
            selection_view::RegionLevel,
            selection_view::BreadcrumbItem,
            selection_view::ContentSection,
            selection_view::EmptyState,
            selection_view::RegionContent,
            selection_view::FilterOption,
            selection_view::FilterField,
            selection_view::FilterForm,
            ApiResponse<selection_dtos::SelectionSnapshotDto>,
        )
    ),
    tags(
        (name = "regions", description = "Indonesian administrative regions (provinces, regencies, districts)"),
        (name = "selection", description = "Cascading region selection, persisted across restarts"),
    ),
    info(
        title = "Wilayah Picker API",
        version = "0.1.0",
        description = "Cascading province / regency / district selection for Indonesia",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
