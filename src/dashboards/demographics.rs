//! Demographics dashboard: where respondents live and how they break down
//! by race, age, and sex.

use crate::aggregate::{group_count, group_count_desc};
use crate::charts;
use crate::dashboards::nonempty;
use crate::models::HealthRecord;
use crate::render::{DashboardPage, Panel};

/// Assemble the demographics dashboard
#[must_use]
pub fn page(records: &[HealthRecord]) -> DashboardPage {
    let state_counts = respondents_by_state(records);
    let race_counts = category_counts(records, |record| nonempty(&record.race_ethnicity));
    let age_counts = category_counts(records, |record| nonempty(&record.age_category));
    let sex_counts = category_counts(records, |record| nonempty(&record.sex));

    DashboardPage {
        title: "Demographics Dashboard".to_string(),
        slug: "/dashboard2",
        panels: vec![
            Panel::new(
                "Number of People by State",
                charts::choropleth(&state_counts, "Number of People", "Number of People by State"),
            ),
            Panel::new(
                "Race Distribution",
                charts::pie(&race_counts, "Race Distribution"),
            ),
            Panel::new(
                "Age Distribution by Category",
                charts::bar_vertical(
                    &age_counts,
                    "Age Category",
                    "Count",
                    "Age Distribution by Category",
                ),
            ),
            Panel::new(
                "Gender Distribution",
                charts::donut(&sex_counts, "Gender Distribution"),
            ),
        ],
    }
}

/// Respondent count per state abbreviation
#[must_use]
pub fn respondents_by_state(records: &[HealthRecord]) -> Vec<(String, f64)> {
    group_count(records, |record| record.state_abbr.map(str::to_string))
        .into_iter()
        .map(|(code, count)| (code, count as f64))
        .collect()
}

/// Occurrence counts for one categorical column, most frequent first
fn category_counts<KF>(records: &[HealthRecord], key_fn: KF) -> Vec<(String, f64)>
where
    KF: Fn(&HealthRecord) -> Option<String>,
{
    group_count_desc(records, key_fn)
        .into_iter()
        .map(|(label, count)| (label, count as f64))
        .collect()
}
