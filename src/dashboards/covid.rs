//! COVID-19 dashboard: where cases landed, how they tracked mental health
//! through 2020, and how depressive disorder and age intersect.

use chrono::NaiveDate;

use crate::aggregate::{group_count, group_mean, merge_series, with_percentages};
use crate::charts;
use crate::dashboards::nonempty;
use crate::models::HealthRecord;
use crate::render::{DashboardPage, Panel};

/// Years the depressive-disorder comparison covers
const DEPRESSIVE_YEARS: [i32; 3] = [2019, 2020, 2021];

/// Year the monthly COVID/mental-health series is drawn from
const SERIES_YEAR: i32 = 2020;

/// Assemble the COVID-19 dashboard
#[must_use]
pub fn page(records: &[HealthRecord]) -> DashboardPage {
    let state_shares = case_share_by_state(records);
    let monthly = monthly_cases_and_mental_health(records);
    let depressive = depressive_share_by_year(records);
    let age_counts = cases_by_age(records);

    DashboardPage {
        title: "COVID-19 Dashboard".to_string(),
        slug: "/dashboard3",
        panels: vec![
            Panel::new(
                "COVID Cases by State",
                charts::choropleth(
                    &state_shares,
                    "Percentage of COVID Cases",
                    "Distribution of COVID Cases by State (Percentage)",
                ),
            ),
            Panel::new(
                "COVID Cases vs Mental Health",
                charts::dual_axis_series(
                    &monthly,
                    "COVID-19 Cases",
                    "Mental Health Rating",
                    "Month (2020)",
                    "COVID-19 Cases and Mental Health Rating",
                ),
            ),
            Panel::new(
                "Depressive Disorder Cases (2019-2021)",
                charts::bar_horizontal(
                    &depressive,
                    "Percentage (%)",
                    "Year",
                    "Percentage of Depressive Disorder Cases in 2019, 2020, and 2021",
                ),
            ),
            Panel::new(
                "COVID Distribution by Age",
                charts::bar_vertical(
                    &age_counts,
                    "Age Category",
                    "Number of COVID Cases",
                    "COVID Distribution by Age",
                ),
            ),
        ],
    }
}

/// Each state's share of all positive cases, as a percentage
#[must_use]
pub fn case_share_by_state(records: &[HealthRecord]) -> Vec<(String, f64)> {
    let positive: Vec<&HealthRecord> = records
        .iter()
        .filter(|record| record.is_covid_positive())
        .collect();
    let counts = group_count(&positive, |record| record.state_abbr.map(str::to_string));
    with_percentages(&counts)
}

/// Monthly positive cases merged with the monthly mean mental-health bin,
/// outer-joined on the month and zero-filled
#[must_use]
pub fn monthly_cases_and_mental_health(records: &[HealthRecord]) -> Vec<(NaiveDate, f64, f64)> {
    let positive_2020: Vec<&HealthRecord> = records
        .iter()
        .filter(|record| record.is_covid_positive() && record.year == Some(SERIES_YEAR))
        .collect();
    let cases: Vec<(NaiveDate, f64)> = group_count(&positive_2020, |record| record.year_month)
        .into_iter()
        .map(|(month, count)| (month, count as f64))
        .collect();

    let all_2020: Vec<&HealthRecord> = records
        .iter()
        .filter(|record| record.year == Some(SERIES_YEAR))
        .collect();
    let mental = group_mean(
        &all_2020,
        |record| record.year_month,
        |record| record.mental_health_bin.map(|bin| bin as f64),
    );

    merge_series(&cases, &mental)
}

/// Share of depressive-disorder cases per comparison year, as a percentage
#[must_use]
pub fn depressive_share_by_year(records: &[HealthRecord]) -> Vec<(String, f64)> {
    let cases: Vec<&HealthRecord> = records
        .iter()
        .filter(|record| {
            record.had_depressive_disorder == "Yes"
                && record.year.is_some_and(|year| DEPRESSIVE_YEARS.contains(&year))
        })
        .collect();
    let counts = group_count(&cases, |record| record.year);
    with_percentages(&counts)
        .into_iter()
        .map(|(year, share)| (year.to_string(), share))
        .collect()
}

/// Positive case counts per age bracket
#[must_use]
pub fn cases_by_age(records: &[HealthRecord]) -> Vec<(String, f64)> {
    let positive: Vec<&HealthRecord> = records
        .iter()
        .filter(|record| record.is_covid_positive())
        .collect();
    group_count(&positive, |record| nonempty(&record.age_category))
        .into_iter()
        .map(|(label, count)| (label, count as f64))
        .collect()
}
