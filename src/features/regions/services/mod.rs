mod data_provider;
mod region_service;

pub use data_provider::{
    load_catalog, provider_for, DataUnavailable, FileRegionDataProvider, HttpRegionDataProvider,
    RegionDataProvider,
};
pub use region_service::{CatalogStatus, RegionService};
