//! General health dashboard: statewide averages, rating distributions, and
//! the relationship between mental and physical health.

use crate::aggregate::{group_count, group_count_desc, group_mean, with_percentages};
use crate::charts;
use crate::dashboards::nonempty;
use crate::models::HealthRecord;
use crate::render::{DashboardPage, Panel};

/// Assemble the general health dashboard
#[must_use]
pub fn page(records: &[HealthRecord]) -> DashboardPage {
    let state_means = state_health_mean(records);
    let label_counts = health_label_distribution(records);
    let bin_shares = mental_bin_percentages(records);
    let scatter = mental_vs_physical(records);

    DashboardPage {
        title: "General Health Dashboard".to_string(),
        slug: "/dashboard1",
        panels: vec![
            Panel::new(
                "Avg General Health by State",
                charts::choropleth(
                    &state_means,
                    "Avg General Health Score",
                    "Avg General Health Score by State",
                ),
            ),
            Panel::new(
                "Distribution of General Health Ratings",
                charts::pie(&label_counts, "Distribution of General Health Ratings"),
            ),
            Panel::new(
                "Percentage Distribution of Mental Health Data",
                charts::bar_vertical(
                    &bin_shares,
                    "Mental Health Rating",
                    "Percentage (%)",
                    "Percentage Distribution of Mental Health Ratings",
                ),
            ),
            Panel::new(
                "Relationship Between Mental and Physical Health",
                charts::scatter_regression(
                    &scatter,
                    "Mental Health Rating",
                    "Physical Health Rating",
                    "Relationship Between Mental and Physical Health Ratings",
                ),
            ),
        ],
    }
}

/// Mean general-health rank per state abbreviation
#[must_use]
pub fn state_health_mean(records: &[HealthRecord]) -> Vec<(String, f64)> {
    group_mean(
        records,
        |record| record.state_abbr.map(str::to_string),
        |record| record.health_rank.map(f64::from),
    )
}

/// How often each general-health label occurs, most frequent first
#[must_use]
pub fn health_label_distribution(records: &[HealthRecord]) -> Vec<(String, f64)> {
    group_count_desc(records, |record| nonempty(&record.general_health))
        .into_iter()
        .map(|(label, count)| (label, count as f64))
        .collect()
}

/// Share of respondents in each mental-health rating bin, largest share first
#[must_use]
pub fn mental_bin_percentages(records: &[HealthRecord]) -> Vec<(String, f64)> {
    let counts = group_count(records, |record| record.mental_health_bin);
    let mut shares = with_percentages(&counts);
    shares.sort_by(|a, b| b.1.total_cmp(&a.1));
    shares
        .into_iter()
        .map(|(bin, share)| (bin.to_string(), share))
        .collect()
}

/// Mean physical-health bin per mental-health bin
#[must_use]
pub fn mental_vs_physical(records: &[HealthRecord]) -> Vec<(f64, f64)> {
    group_mean(
        records,
        |record| record.mental_health_bin,
        |record| record.physical_health_bin.map(|bin| bin as f64),
    )
    .into_iter()
    .map(|(bin, mean)| (bin as f64, mean))
    .collect()
}
