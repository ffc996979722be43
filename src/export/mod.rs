//! Export module for finanzas-cli
//!
//! Serializes the full `{transactions, recurring expenses}` dataset to a
//! JSON document the user can save externally, and reads such documents
//! back for restore.

pub mod json;

pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
