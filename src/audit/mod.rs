//! Audit logging for finanzas-cli
//!
//! Every mutation (create, update, delete of transactions and recurring
//! expenses) is recorded to an append-only JSONL log with before/after
//! snapshots, so the history of the ledger stays reconstructible.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
