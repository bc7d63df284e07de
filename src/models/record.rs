//! One row of the source table.

use chrono::NaiveDate;

use crate::derive::{health_day_bin, is_obese, year_month};
use crate::lookups::{health_rank, state_abbr};

/// A survey response, loaded verbatim from the source file plus derived
/// fields attached at load time. Records are never mutated afterward.
///
/// Numeric cells that were empty in the file stay `None`, and so do the
/// derived values that depend on them; the record itself is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthRecord {
    /// Full state name as it appears in the file
    pub state: String,
    /// General-health label (Poor .. Excellent)
    pub general_health: String,
    /// Days of poor mental health in the last month (0-30)
    pub mental_health_days: Option<i64>,
    /// Days of poor physical health in the last month (0-30)
    pub physical_health_days: Option<i64>,
    /// Race/ethnicity category
    pub race_ethnicity: String,
    /// Age bracket label
    pub age_category: String,
    /// Respondent sex
    pub sex: String,
    /// Body mass index
    pub bmi: Option<f64>,
    /// Survey year
    pub year: Option<i32>,
    /// Survey month (1-12)
    pub month: Option<u32>,
    /// Yes/no-style COVID test answer, kept as text
    pub covid_pos: String,
    /// Yes/no-style depressive-disorder answer, kept as text
    pub had_depressive_disorder: String,
    /// Yes/no-style diabetes answer, kept as text
    pub had_diabetes: String,
    /// Yes/no-style physical-activity answer, kept as text
    pub physical_activities: String,

    /// Derived: 2-letter state code, `None` when the name is not in the table
    pub state_abbr: Option<&'static str>,
    /// Derived: ordinal rank of the general-health label
    pub health_rank: Option<u8>,
    /// Derived: mental-health day count grouped into a rating bin
    pub mental_health_bin: Option<i64>,
    /// Derived: physical-health day count grouped into a rating bin
    pub physical_health_bin: Option<i64>,
    /// Derived: whether the BMI crosses the obesity threshold
    pub obese: Option<bool>,
    /// Derived: first day of the survey year + month
    pub year_month: Option<NaiveDate>,
}

impl HealthRecord {
    /// Fill in the derived fields from the raw columns.
    ///
    /// Pure and total: a missing or unrecognized input produces a `None`
    /// derived value, never an error.
    #[must_use]
    pub fn with_derived(mut self) -> Self {
        self.state_abbr = state_abbr(&self.state);
        self.health_rank = health_rank(&self.general_health);
        self.mental_health_bin = self.mental_health_days.map(health_day_bin);
        self.physical_health_bin = self.physical_health_days.map(health_day_bin);
        self.obese = self.bmi.map(is_obese);
        self.year_month = match (self.year, self.month) {
            (Some(year), Some(month)) => year_month(year, month),
            _ => None,
        };
        self
    }

    /// Whether the respondent reported a positive COVID test
    #[must_use]
    pub fn is_covid_positive(&self) -> bool {
        self.covid_pos == "Yes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let record = HealthRecord {
            state: "California".to_string(),
            general_health: "Very Good".to_string(),
            mental_health_days: Some(4),
            physical_health_days: Some(0),
            bmi: Some(31.2),
            year: Some(2020),
            month: Some(7),
            ..Default::default()
        }
        .with_derived();

        assert_eq!(record.state_abbr, Some("CA"));
        assert_eq!(record.health_rank, Some(3));
        assert_eq!(record.mental_health_bin, Some(2));
        assert_eq!(record.physical_health_bin, Some(1));
        assert_eq!(record.obese, Some(true));
        assert_eq!(
            record.year_month,
            Some(NaiveDate::from_ymd_opt(2020, 7, 1).unwrap())
        );
    }

    #[test]
    fn test_missing_inputs_stay_missing() {
        let record = HealthRecord {
            state: "Guam".to_string(),
            general_health: "Okay".to_string(),
            ..Default::default()
        }
        .with_derived();

        assert_eq!(record.state_abbr, None);
        assert_eq!(record.health_rank, None);
        assert_eq!(record.mental_health_bin, None);
        assert_eq!(record.obese, None);
        assert_eq!(record.year_month, None);
    }
}
