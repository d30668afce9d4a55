//! Storage helpers for the service layer
//!
//! Contains the JSON file-backed map store used by the file data service.

pub mod json_map_store;
