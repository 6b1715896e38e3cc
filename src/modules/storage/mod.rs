//! Key-value storage for small pieces of client state
//!
//! String keys and string values, no expiry. The file-backed store survives
//! process restarts; the in-memory store lives as long as the process.

mod kv_store;

pub use kv_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};
