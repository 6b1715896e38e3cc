use std::sync::Arc;

use tokio::sync::watch;

use crate::core::error::{AppError, Result};
use crate::features::regions::catalog::{matches_search, RegionCatalog};
use crate::features::regions::models::{District, Province, Regency};
use crate::features::regions::services::data_provider::{load_catalog, RegionDataProvider};

/// Where the one-shot catalog fetch stands
#[derive(Debug, Clone)]
pub enum CatalogStatus {
    Loading,
    Ready(Arc<RegionCatalog>),
    /// Fetch or parse failed; terminal, the catalog reads as empty
    Unavailable,
}

impl CatalogStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogStatus::Loading)
    }
}

/// Service for reading Indonesian administrative regions from the loaded catalog
pub struct RegionService {
    status: watch::Receiver<CatalogStatus>,
    empty: Arc<RegionCatalog>,
}

impl RegionService {
    /// Start the single background fetch and return a service that reports
    /// `Loading` until it settles
    pub fn spawn_load(provider: Arc<dyn RegionDataProvider>) -> Self {
        let (tx, rx) = watch::channel(CatalogStatus::Loading);

        tokio::spawn(async move {
            let status = match load_catalog(provider.as_ref()).await {
                Ok(catalog) => CatalogStatus::Ready(Arc::new(catalog)),
                Err(e) => {
                    tracing::error!("Error fetching region data: {}", e);
                    CatalogStatus::Unavailable
                }
            };
            // No receivers left means the server is already gone
            let _ = tx.send(status);
        });

        Self::with_receiver(rx)
    }

    fn with_receiver(status: watch::Receiver<CatalogStatus>) -> Self {
        Self {
            status,
            empty: Arc::new(RegionCatalog::default()),
        }
    }

    pub fn status(&self) -> CatalogStatus {
        self.status.borrow().clone()
    }

    /// The catalog to operate on. Fails while the fetch is pending; a failed
    /// fetch yields an empty catalog rather than an error.
    pub fn catalog(&self) -> Result<Arc<RegionCatalog>> {
        match &*self.status.borrow() {
            CatalogStatus::Loading => Err(AppError::CatalogLoading),
            CatalogStatus::Ready(catalog) => Ok(Arc::clone(catalog)),
            CatalogStatus::Unavailable => Ok(Arc::clone(&self.empty)),
        }
    }

    // ==================== Province Methods ====================

    /// List all provinces with optional search
    pub fn list_provinces(&self, search: Option<&str>) -> Result<Vec<Province>> {
        let catalog = self.catalog()?;
        Ok(catalog
            .provinces()
            .iter()
            .filter(|p| matches_search(&p.name, search))
            .cloned()
            .collect())
    }

    pub fn get_province(&self, id: i64) -> Result<Province> {
        self.catalog()?
            .find_province(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Province with id '{}' not found", id)))
    }

    // ==================== Regency Methods ====================

    /// List the regencies of a province; an unknown province has none
    pub fn list_regencies_by_province(
        &self,
        province_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<Regency>> {
        let catalog = self.catalog()?;
        Ok(catalog
            .regencies_of(Some(province_id))
            .into_iter()
            .filter(|r| matches_search(&r.name, search))
            .cloned()
            .collect())
    }

    pub fn get_regency(&self, id: i64) -> Result<Regency> {
        self.catalog()?
            .find_regency(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Regency with id '{}' not found", id)))
    }

    // ==================== District Methods ====================

    /// List the districts of a regency; an unknown regency has none
    pub fn list_districts_by_regency(
        &self,
        regency_id: i64,
        search: Option<&str>,
    ) -> Result<Vec<District>> {
        let catalog = self.catalog()?;
        Ok(catalog
            .districts_of(Some(regency_id))
            .into_iter()
            .filter(|d| matches_search(&d.name, search))
            .cloned()
            .collect())
    }

    pub fn get_district(&self, id: i64) -> Result<District> {
        self.catalog()?
            .find_district(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("District with id '{}' not found", id)))
    }
}

#[cfg(test)]
impl RegionService {
    /// Service over an already loaded catalog
    pub fn from_catalog(catalog: RegionCatalog) -> Self {
        let (_tx, rx) = watch::channel(CatalogStatus::Ready(Arc::new(catalog)));
        Self::with_receiver(rx)
    }

    /// Service stuck in `Loading` until the returned sender publishes a status
    pub fn pending() -> (Self, watch::Sender<CatalogStatus>) {
        let (tx, rx) = watch::channel(CatalogStatus::Loading);
        (Self::with_receiver(rx), tx)
    }

    /// Wait for the fetch to settle
    pub async fn wait_until_settled(&self) -> CatalogStatus {
        let mut rx = self.status.clone();
        let settled = rx.wait_for(|s| !s.is_loading()).await.map(|s| s.clone());
        settled.unwrap_or_else(|_| self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::catalog::sample_catalog;
    use crate::features::regions::services::data_provider::FileRegionDataProvider;

    #[test]
    fn test_catalog_blocked_while_loading() {
        let (service, tx) = RegionService::pending();
        assert!(service.status().is_loading());
        assert!(matches!(service.catalog(), Err(AppError::CatalogLoading)));
        assert!(matches!(
            service.list_provinces(None),
            Err(AppError::CatalogLoading)
        ));

        tx.send(CatalogStatus::Ready(Arc::new(sample_catalog())))
            .unwrap();
        assert_eq!(service.list_provinces(None).unwrap().len(), 2);
    }

    #[test]
    fn test_unavailable_reads_as_empty() {
        let (service, tx) = RegionService::pending();
        tx.send(CatalogStatus::Unavailable).unwrap();

        assert!(service.list_provinces(None).unwrap().is_empty());
        assert!(service.catalog().unwrap().is_empty());
        assert!(matches!(service.get_province(1), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_list_and_get() {
        let service = RegionService::from_catalog(sample_catalog());

        let regencies = service.list_regencies_by_province(1, None).unwrap();
        assert_eq!(regencies.len(), 2);

        let searched = service.list_regencies_by_province(1, Some("bog")).unwrap();
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].id, 11);

        assert!(service.list_regencies_by_province(999, None).unwrap().is_empty());
        assert_eq!(service.list_districts_by_regency(10, None).unwrap().len(), 2);

        assert_eq!(service.get_district(200).unwrap().name, "Tembalang");
        assert!(matches!(service.get_regency(999), Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_spawn_load_settles_ready() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("indonesia_regions.json");
        std::fs::write(
            &path,
            r#"{
                "provinces": [{ "id": 1, "name": "Jawa Barat" }],
                "regencies": [],
                "districts": []
            }"#,
        )
        .unwrap();

        let service = RegionService::spawn_load(Arc::new(FileRegionDataProvider::new(&path)));
        let status = service.wait_until_settled().await;

        assert!(matches!(status, CatalogStatus::Ready(_)));
        assert_eq!(service.get_province(1).unwrap().name, "Jawa Barat");
    }

    #[tokio::test]
    async fn test_spawn_load_settles_unavailable() {
        let service = RegionService::spawn_load(Arc::new(FileRegionDataProvider::new(
            "/definitely/not/here/regions.json",
        )));
        let status = service.wait_until_settled().await;

        assert!(matches!(status, CatalogStatus::Unavailable));
        assert!(service.list_provinces(None).unwrap().is_empty());
    }
}
