//! Configuration and path management for finanzas-cli

pub mod paths;
pub mod settings;

pub use paths::FinanzasPaths;
pub use settings::Settings;
