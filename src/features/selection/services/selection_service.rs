use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::error::{AppError, Result};
use crate::features::regions::{RegionCatalog, RegionService};
use crate::features::selection::dtos::SelectionSnapshotDto;
use crate::features::selection::persistence::SelectionPersistence;
use crate::features::selection::state::SelectionState;
use crate::features::selection::view;

/// Owns the one selection of this instance and applies user selection events.
///
/// Every operation is synchronous and short; the lock is never held across
/// an await point. Options outside the current parent are rejected, the way
/// a dropdown simply never offers them.
pub struct SelectionService {
    state: Mutex<SelectionState>,
    regions: Arc<RegionService>,
}

impl SelectionService {
    /// Restore the last selection from the store
    pub fn new(regions: Arc<RegionService>, persistence: SelectionPersistence) -> Self {
        Self {
            state: Mutex::new(SelectionState::restore(persistence)),
            regions,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, SelectionState>> {
        self.state
            .lock()
            .map_err(|_| AppError::Internal("Selection state lock poisoned".to_string()))
    }

    fn snapshot_of(catalog: &RegionCatalog, state: &SelectionState) -> SelectionSnapshotDto {
        let selection = state.selection();
        SelectionSnapshotDto {
            selection: selection.into(),
            level: state.level(),
            breadcrumb: view::breadcrumb(catalog, selection),
            content: view::region_content(catalog, selection),
            filters: view::filter_form(catalog, selection),
        }
    }

    pub fn snapshot(&self) -> Result<SelectionSnapshotDto> {
        let catalog = self.regions.catalog()?;
        let state = self.lock()?;
        Ok(Self::snapshot_of(&catalog, &state))
    }

    pub fn set_province(&self, id: Option<i64>) -> Result<SelectionSnapshotDto> {
        let catalog = self.regions.catalog()?;

        if let Some(id) = id {
            if catalog.find_province(id).is_none() {
                return Err(AppError::BadRequest(format!(
                    "Province with id '{}' is not in the catalog",
                    id
                )));
            }
        }

        let mut state = self.lock()?;
        state.set_province(id);
        tracing::info!("Province selected: {:?}", id);

        Ok(Self::snapshot_of(&catalog, &state))
    }

    pub fn set_regency(&self, id: Option<i64>) -> Result<SelectionSnapshotDto> {
        let catalog = self.regions.catalog()?;
        let mut state = self.lock()?;

        if let Some(id) = id {
            if state.selection().province.is_none() {
                return Err(AppError::Conflict(
                    "Select a province before choosing a regency".to_string(),
                ));
            }
            if !state.filtered_regencies(&catalog).iter().any(|r| r.id == id) {
                return Err(AppError::BadRequest(format!(
                    "Regency with id '{}' is not part of the selected province",
                    id
                )));
            }
        }

        state.set_regency(id);
        tracing::info!("Regency selected: {:?}", id);

        Ok(Self::snapshot_of(&catalog, &state))
    }

    pub fn set_district(&self, id: Option<i64>) -> Result<SelectionSnapshotDto> {
        let catalog = self.regions.catalog()?;
        let mut state = self.lock()?;

        if let Some(id) = id {
            if state.selection().regency.is_none() {
                return Err(AppError::Conflict(
                    "Select a regency before choosing a district".to_string(),
                ));
            }
            if !state.filtered_districts(&catalog).iter().any(|d| d.id == id) {
                return Err(AppError::BadRequest(format!(
                    "District with id '{}' is not part of the selected regency",
                    id
                )));
            }
        }

        state.set_district(id);
        tracing::info!("District selected: {:?}", id);

        Ok(Self::snapshot_of(&catalog, &state))
    }

    pub fn reset(&self) -> Result<SelectionSnapshotDto> {
        let catalog = self.regions.catalog()?;
        let mut state = self.lock()?;

        state.reset();
        tracing::info!("Selection reset");

        Ok(Self::snapshot_of(&catalog, &state))
    }
}
