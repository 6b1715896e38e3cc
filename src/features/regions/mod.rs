//! Indonesian administrative regions (wilayah) feature.
//!
//! The catalog is a flat dataset fetched once at startup from a static JSON
//! document and kept in memory for the lifetime of the process.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Provinces (Provinsi)
//! - Level 2: Regencies/Cities (Kabupaten/Kota), referencing a province
//! - Level 3: Districts (Kecamatan), referencing a regency
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/status` | Catalog load state |
//! | GET | `/api/regions/provinces` | List all provinces |
//! | GET | `/api/regions/provinces/{id}` | Get province by id |
//! | GET | `/api/regions/provinces/{id}/regencies` | List regencies in a province |
//! | GET | `/api/regions/regencies/{id}` | Get regency by id |
//! | GET | `/api/regions/regencies/{id}/districts` | List districts in a regency |
//! | GET | `/api/regions/districts/{id}` | Get district by id |

pub mod catalog;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use catalog::RegionCatalog;
pub use services::RegionService;
