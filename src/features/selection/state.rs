//! Three-level region selection with cascade-clear.
//!
//! Writes only ever clear downward: choosing a province clears the regency
//! and district, choosing a regency clears the district. The clear is
//! unconditional, even when the old child would still fit the new parent.
//! Every mutation is written through to the persistence adapter.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::regions::models::{District, Regency};
use crate::features::regions::RegionCatalog;
use crate::features::selection::persistence::{SelectionKey, SelectionPersistence};

/// Selected ids, one optional slot per level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub province: Option<i64>,
    pub regency: Option<i64>,
    pub district: Option<i64>,
}

impl Selection {
    /// Drop any level whose parent level is unset
    pub fn without_orphans(self) -> Self {
        let regency = self.province.and(self.regency);
        let district = regency.and(self.district);
        Self {
            province: self.province,
            regency,
            district,
        }
    }
}

/// How deep the selection currently goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SelectionLevel {
    Empty,
    ProvinceOnly,
    ProvinceAndRegency,
    FullySelected,
}

impl From<Selection> for SelectionLevel {
    fn from(selection: Selection) -> Self {
        match (selection.province, selection.regency, selection.district) {
            (None, _, _) => SelectionLevel::Empty,
            (Some(_), None, _) => SelectionLevel::ProvinceOnly,
            (Some(_), Some(_), None) => SelectionLevel::ProvinceAndRegency,
            (Some(_), Some(_), Some(_)) => SelectionLevel::FullySelected,
        }
    }
}

pub struct SelectionState {
    selection: Selection,
    persistence: SelectionPersistence,
}

impl SelectionState {
    /// Seed the selection from the store.
    ///
    /// Ids are not checked against the catalog; a stale id is kept and simply
    /// fails lookups later. A level stored without its parent level is dropped.
    pub fn restore(persistence: SelectionPersistence) -> Self {
        let stored = persistence.load_all();
        let selection = stored.without_orphans();

        if selection != stored {
            tracing::debug!(
                "Dropped orphaned stored levels: stored={:?}, kept={:?}",
                stored,
                selection
            );
        }

        tracing::info!(
            "Restored selection: province={:?}, regency={:?}, district={:?}",
            selection.province,
            selection.regency,
            selection.district
        );

        Self {
            selection,
            persistence,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn level(&self) -> SelectionLevel {
        self.selection.into()
    }

    /// Select a province (or clear it) and clear everything below
    pub fn set_province(&mut self, id: Option<i64>) {
        self.selection = Selection {
            province: id,
            regency: None,
            district: None,
        };

        self.persistence.write(SelectionKey::Province, id);
        self.persistence.delete(SelectionKey::Regency);
        self.persistence.delete(SelectionKey::District);
    }

    /// Select a regency (or clear it) and clear the district.
    ///
    /// Returns false without touching anything when an id is given but no
    /// province is selected.
    pub fn set_regency(&mut self, id: Option<i64>) -> bool {
        if id.is_some() && self.selection.province.is_none() {
            return false;
        }

        self.selection.regency = id;
        self.selection.district = None;

        self.persistence.write(SelectionKey::Regency, id);
        self.persistence.delete(SelectionKey::District);
        true
    }

    /// Select a district (or clear it).
    ///
    /// Returns false without touching anything when an id is given but no
    /// regency is selected.
    pub fn set_district(&mut self, id: Option<i64>) -> bool {
        if id.is_some() && self.selection.regency.is_none() {
            return false;
        }

        self.selection.district = id;
        self.persistence.write(SelectionKey::District, id);
        true
    }

    /// Clear all three levels and forget them in the store
    pub fn reset(&mut self) {
        self.selection = Selection::default();
        self.persistence.clear();
    }

    /// Regencies selectable under the current province
    pub fn filtered_regencies<'c>(&self, catalog: &'c RegionCatalog) -> Vec<&'c Regency> {
        catalog.regencies_of(self.selection.province)
    }

    /// Districts selectable under the current regency
    pub fn filtered_districts<'c>(&self, catalog: &'c RegionCatalog) -> Vec<&'c District> {
        catalog.districts_of(self.selection.regency)
    }
}
