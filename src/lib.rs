//! finanzas-cli - Terminal-based personal finance dashboard
//!
//! This library provides the core functionality for the finanzas-cli
//! application: a personal-finance ledger of income/expense transactions
//! and recurring subscriptions, with derived dashboard views (headline
//! totals, category breakdowns, monthly trends, savings-goal progress,
//! and alerts) recomputed from scratch on every request.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, recurring expenses, money)
//! - `storage`: JSON snapshot storage layer with seed fallback
//! - `services`: Business logic, filtering, and the pure aggregations
//! - `audit`: Audit logging system
//! - `reports`: Terminal-renderable dashboard views
//! - `display`: Table formatting for lists
//! - `export`: Full-dataset JSON export and restore
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finanzas_cli::config::{paths::FinanzasPaths, settings::Settings};
//! use finanzas_cli::storage::Storage;
//!
//! let paths = FinanzasPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::FinanzasError;
