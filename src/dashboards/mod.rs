//! The four dashboard page builders.
//!
//! Each module independently re-derives its aggregates from the shared
//! record set at startup and assembles a [`DashboardPage`] of four charts.

pub mod covid;
pub mod demographics;
pub mod general;
pub mod obesity;

use crate::models::HealthRecord;
use crate::render::DashboardPage;

/// Build all four dashboards from the loaded record set
#[must_use]
pub fn build_all(records: &[HealthRecord]) -> Vec<DashboardPage> {
    vec![
        general::page(records),
        demographics::page(records),
        covid::page(records),
        obesity::page(records),
    ]
}

/// Group key for a categorical text cell; blank cells group nowhere
pub(crate) fn nonempty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
