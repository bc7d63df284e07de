//! Pure derivations applied to each record at load time.

use chrono::NaiveDate;

/// BMI threshold above which a respondent counts as obese
pub const OBESITY_BMI_THRESHOLD: f64 = 30.0;

/// Group a count of unhealthy days into an ordinal rating bin.
///
/// Floor division: days 0-2 land in bin 1, 3-5 in bin 2, and 30 in bin 11.
/// Inputs outside [0, 30] produce out-of-range bins rather than an error.
#[must_use]
pub fn health_day_bin(days: i64) -> i64 {
    days.div_euclid(3) + 1
}

/// Whether a BMI reading crosses the obesity threshold
#[must_use]
pub fn is_obese(bmi: f64) -> bool {
    bmi >= OBESITY_BMI_THRESHOLD
}

/// Compose a year and month into the first day of that month.
///
/// Returns `None` for months outside 1-12, mirroring how other malformed
/// cells become missing derived values instead of dropping the record.
#[must_use]
pub fn year_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}
