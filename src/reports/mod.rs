//! Reports module for finanzas-cli
//!
//! Provides the dashboard views as terminal-renderable reports: the
//! overview page, the category breakdown, and the monthly trend.

pub mod category_breakdown;
pub mod monthly_trend;
pub mod overview;

pub use category_breakdown::{CategoryBreakdownReport, CategoryRow};
pub use monthly_trend::{MonthlyTrendReport, Trend};
pub use overview::DashboardOverview;
