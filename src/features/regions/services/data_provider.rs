use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::config::CatalogSource;
use crate::features::regions::catalog::RegionCatalog;
use crate::shared::constants::HTTP_USER_AGENT;

/// The only failure the catalog can report: the data never arrived intact
#[derive(Debug, Error)]
pub enum DataUnavailable {
    #[error("Region data request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Region data request returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to read region data file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed region data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of the raw region document
#[async_trait]
pub trait RegionDataProvider: Send + Sync {
    /// Human-readable location, for logs
    fn describe(&self) -> String;

    /// Fetch the document once. Implementations never retry.
    async fn fetch(&self) -> Result<Vec<u8>, DataUnavailable>;
}

/// Fetches the document with a single HTTP GET
pub struct HttpRegionDataProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpRegionDataProvider {
    pub fn new(url: impl Into<String>) -> Result<Self, DataUnavailable> {
        let client = reqwest::Client::builder()
            .user_agent(HTTP_USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RegionDataProvider for HttpRegionDataProvider {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, DataUnavailable> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataUnavailable::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Reads the document from a local file
pub struct FileRegionDataProvider {
    path: PathBuf,
}

impl FileRegionDataProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RegionDataProvider for FileRegionDataProvider {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch(&self) -> Result<Vec<u8>, DataUnavailable> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| DataUnavailable::Read {
                path: self.path.clone(),
                source,
            })
    }
}

/// Build the provider for a configured source
pub fn provider_for(
    source: &CatalogSource,
) -> Result<Arc<dyn RegionDataProvider>, DataUnavailable> {
    Ok(match source {
        CatalogSource::Http(url) => Arc::new(HttpRegionDataProvider::new(url.clone())?),
        CatalogSource::File(path) => Arc::new(FileRegionDataProvider::new(path.clone())),
    })
}

/// Fetch and parse the catalog in a single attempt
pub async fn load_catalog(
    provider: &dyn RegionDataProvider,
) -> Result<RegionCatalog, DataUnavailable> {
    tracing::info!("Fetching region data from {}", provider.describe());

    let bytes = provider.fetch().await?;
    let catalog = RegionCatalog::from_slice(&bytes)?;

    if catalog.is_empty() {
        tracing::warn!("Region data from {} contains no regions", provider.describe());
    }

    tracing::info!(
        "Region data received: provinces={}, regencies={}, districts={}",
        catalog.provinces().len(),
        catalog.regencies().len(),
        catalog.districts().len()
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    const DOCUMENT: &str = r#"{
        "provinces": [{ "id": 1, "name": "Jawa Barat" }],
        "regencies": [{ "id": 10, "name": "Bandung", "province_id": 1 }],
        "districts": [{ "id": 100, "name": "Coblong", "regency_id": 10 }]
    }"#;

    /// Serve `router` on an ephemeral local port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_load_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("indonesia_regions.json");
        std::fs::write(&path, DOCUMENT).unwrap();

        let provider = FileRegionDataProvider::new(&path);
        let catalog = load_catalog(&provider).await.unwrap();

        assert_eq!(catalog.provinces()[0].name, "Jawa Barat");
        assert_eq!(catalog.districts_of(Some(10)).len(), 1);
    }

    #[tokio::test]
    async fn test_load_catalog_missing_file() {
        let provider = FileRegionDataProvider::new("/definitely/not/here/regions.json");
        let result = load_catalog(&provider).await;
        assert!(matches!(result, Err(DataUnavailable::Read { .. })));
    }

    #[tokio::test]
    async fn test_load_catalog_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("indonesia_regions.json");
        std::fs::write(&path, "<html>not found</html>").unwrap();

        let provider = FileRegionDataProvider::new(&path);
        let result = load_catalog(&provider).await;
        assert!(matches!(result, Err(DataUnavailable::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_catalog_over_http() {
        let base = serve(Router::new().route(
            "/data/indonesia_regions.json",
            get(|| async { DOCUMENT }),
        ))
        .await;

        let provider =
            HttpRegionDataProvider::new(format!("{}/data/indonesia_regions.json", base)).unwrap();
        let catalog = load_catalog(&provider).await.unwrap();

        assert_eq!(catalog.regencies_of(Some(1))[0].name, "Bandung");
    }

    #[tokio::test]
    async fn test_load_catalog_http_error_status() {
        let base = serve(Router::new().route(
            "/data/indonesia_regions.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;

        let provider =
            HttpRegionDataProvider::new(format!("{}/data/indonesia_regions.json", base)).unwrap();
        let result = load_catalog(&provider).await;

        match result {
            Err(DataUnavailable::Status(status)) => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected an error status, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_provider_for_source() {
        let file = provider_for(&CatalogSource::File(PathBuf::from("regions.json"))).unwrap();
        assert_eq!(file.describe(), "file regions.json");

        let source = CatalogSource::Http("http://localhost/regions.json".to_string());
        let http = provider_for(&source).unwrap();
        assert_eq!(http.describe(), "http://localhost/regions.json");
    }
}
