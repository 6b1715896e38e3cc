//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for the services the selection model leans on.

pub mod storage;
