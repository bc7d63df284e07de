//! Static health-survey dashboards rendered from a fixed CSV dataset, with
//! schema validation, derived columns, and a small HTTP surface.

pub mod aggregate;
pub mod charts;
pub mod config;
pub mod dashboards;
pub mod derive;
pub mod error;
pub mod http;
pub mod loader;
pub mod lookups;
pub mod models;
pub mod render;
pub mod schema;

// Re-export the most common types for easier use
// Core types
pub use config::AppConfig;
pub use error::{DashboardError, Result};
pub use loader::load_dataset;
pub use models::HealthRecord;

// HTTP surface
pub use http::{AppState, DashboardId, build_router, resolve_slug};

// Page composition
pub use render::{DashboardPage, Panel};
