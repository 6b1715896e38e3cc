//! Cascading region selection (province → regency → district).
//!
//! One selection per service instance, restored from the key-value store at
//! startup and written back on every change.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/selection` | Current selection snapshot |
//! | PUT | `/api/selection/province` | Select or clear the province |
//! | PUT | `/api/selection/regency` | Select or clear the regency |
//! | PUT | `/api/selection/district` | Select or clear the district |
//! | DELETE | `/api/selection` | Reset all three levels |

pub mod dtos;
pub mod handlers;
pub mod persistence;
pub mod routes;
pub mod services;
pub mod state;
pub mod view;

pub use persistence::SelectionPersistence;
pub use services::SelectionService;
