//! Obesity and health dashboard: yearly health trends and how obesity
//! breaks down across race and sex.

use crate::aggregate::{group_count, group_mean, percent_where, with_percentages};
use crate::charts::{self, TrendPanel};
use crate::dashboards::nonempty;
use crate::models::HealthRecord;
use crate::render::{DashboardPage, Panel};

/// Assemble the obesity and health dashboard
#[must_use]
pub fn page(records: &[HealthRecord]) -> DashboardPage {
    let trends = yearly_trends(records);
    let race_shares = obesity_by_race(records);
    let overall = obesity_split(records);
    let obese_sexes = sex_distribution_among_obese(records);

    DashboardPage {
        title: "Obesity and Health Dashboard".to_string(),
        slug: "/dashboard4",
        panels: vec![
            Panel::new(
                "Obesity-Related Trends Over Time",
                charts::trend_grid(&trends, "Obesity-Related Trends Over Time"),
            ),
            Panel::new(
                "Obesity by Race/Ethnicity",
                charts::bar_horizontal(
                    &race_shares,
                    "Percentage (%)",
                    "Race/Ethnicity",
                    "Percentage of Obesity by Race/Ethnicity",
                ),
            ),
            Panel::new(
                "Percentage of Obese Individuals",
                charts::bar_vertical(
                    &overall,
                    "Category",
                    "Percentage (%)",
                    "Percentage of Obese Individuals",
                ),
            ),
            Panel::new(
                "Gender Distribution Among Obese Individuals",
                charts::donut(&obese_sexes, "Gender Distribution Among Obese Individuals"),
            ),
        ],
    }
}

/// The four yearly trend panels: mean BMI, mean mental-health rating, and
/// the shares of physically active and diabetic respondents
#[must_use]
pub fn yearly_trends(records: &[HealthRecord]) -> Vec<TrendPanel> {
    let panel = |title: &str, points: Vec<(i32, f64)>| TrendPanel {
        title: title.to_string(),
        points,
    };
    panel_data(records)
        .into_iter()
        .zip([
            "Average BMI",
            "Average Mental Health Rating",
            "Percentage of Physically Active",
            "Percentage of Diabetics",
        ])
        .map(|(points, title)| panel(title, points))
        .collect()
}

fn panel_data(records: &[HealthRecord]) -> [Vec<(i32, f64)>; 4] {
    let yearly = |value_fn: &dyn Fn(&HealthRecord) -> Option<f64>| {
        group_mean(records, |record| record.year, value_fn)
    };
    [
        yearly(&|record| record.bmi),
        yearly(&|record| record.mental_health_bin.map(|bin| bin as f64)),
        yearly(&|record| Some(yes_indicator(&record.physical_activities))),
        yearly(&|record| Some(yes_indicator(&record.had_diabetes))),
    ]
}

/// 100/0 indicator whose mean is a percentage
fn yes_indicator(answer: &str) -> f64 {
    if answer == "Yes" { 100.0 } else { 0.0 }
}

/// Share of obese respondents per race/ethnicity, as a percentage
#[must_use]
pub fn obesity_by_race(records: &[HealthRecord]) -> Vec<(String, f64)> {
    group_mean(
        records,
        |record| nonempty(&record.race_ethnicity),
        |record| record.obese.map(|obese| if obese { 100.0 } else { 0.0 }),
    )
}

/// Overall obese vs not-obese split, as percentages
#[must_use]
pub fn obesity_split(records: &[HealthRecord]) -> Vec<(String, f64)> {
    let obese = percent_where(records, |record| record.obese);
    vec![
        ("Obese".to_string(), obese),
        ("Not Obese".to_string(), 100.0 - obese),
    ]
}

/// Sex distribution among obese respondents, as a percentage share
#[must_use]
pub fn sex_distribution_among_obese(records: &[HealthRecord]) -> Vec<(String, f64)> {
    let obese: Vec<&HealthRecord> = records
        .iter()
        .filter(|record| record.obese == Some(true))
        .collect();
    let counts = group_count(&obese, |record| nonempty(&record.sex));
    with_percentages(&counts)
}
