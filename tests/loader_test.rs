//! Integration tests for CSV loading and schema validation.

use std::io::Write;
use std::path::Path;

use medboard::error::DashboardError;
use medboard::loader::load_dataset;
use tempfile::NamedTempFile;

const HEADER: &str = "State,GeneralHealth,MentalHealthDays,PhysicalHealthDays,RaceEthnicityCategory,AgeCategory,Sex,BMI,Year,Month,CovidPos,HadDepressiveDisorder,HadDiabetes,PhysicalActivities";

fn write_csv(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "{header}").expect("write header");
    for row in rows {
        writeln!(file, "{row}").expect("write row");
    }
    file.flush().expect("flush");
    file
}

#[test]
fn test_load_and_derive() {
    let file = write_csv(
        HEADER,
        &[
            "California,Good,4,2,White,Age 25 to 29,Female,27.5,2020,3,Yes,No,No,Yes",
            "Texas,Poor,30,29,Hispanic,Age 60 to 64,Male,31.0,2019,11,No,Yes,Yes,No",
            "Guam,Excellent,0,0,Other,Age 40 to 44,Female,22.1,2021,1,No,No,No,Yes",
        ],
    );

    let records = load_dataset(file.path(), 100).expect("load fixture");
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.state_abbr, Some("CA"));
    assert_eq!(first.health_rank, Some(2));
    assert_eq!(first.mental_health_bin, Some(2));
    assert_eq!(first.physical_health_bin, Some(1));
    assert_eq!(first.obese, Some(false));
    assert!(first.is_covid_positive());
    assert_eq!(
        first.year_month,
        Some(chrono::NaiveDate::from_ymd_opt(2020, 3, 1).unwrap())
    );

    let second = &records[1];
    assert_eq!(second.mental_health_bin, Some(11));
    assert_eq!(second.obese, Some(true));
    assert!(!second.is_covid_positive());

    // Unlisted regions keep their record but lose the derived code
    assert_eq!(records[2].state_abbr, None);
}

#[test]
fn test_empty_numeric_cells_stay_missing() {
    let file = write_csv(
        HEADER,
        &[
            "Texas,Fair,,0,White,Age 30 to 34,Male,,2020,5,No,No,No,Yes",
            "Texas,Fair,3,0,White,Age 30 to 34,Male,28.0,2020,5,No,No,No,Yes",
        ],
    );

    let records = load_dataset(file.path(), 100).expect("load fixture");
    assert_eq!(records[0].mental_health_days, None);
    assert_eq!(records[0].mental_health_bin, None);
    assert_eq!(records[0].bmi, None);
    assert_eq!(records[0].obese, None);
    assert_eq!(records[1].mental_health_bin, Some(2));
}

#[test]
fn test_integer_inferred_bmi_adapts_to_float() {
    let file = write_csv(
        HEADER,
        &["Ohio,Good,1,1,White,Age 50 to 54,Male,31,2020,2,No,No,No,Yes"],
    );

    let records = load_dataset(file.path(), 100).expect("load fixture");
    assert_eq!(records[0].bmi, Some(31.0));
    assert_eq!(records[0].obese, Some(true));
}

#[test]
fn test_missing_column_fails_fast() {
    // Header without the CovidPos column
    let header = HEADER.replace("CovidPos,", "");
    let file = write_csv(
        &header,
        &["Texas,Fair,3,0,White,Age 30 to 34,Male,28.0,2020,5,No,No,Yes"],
    );

    let error = load_dataset(file.path(), 100).expect_err("schema mismatch");
    assert!(matches!(error, DashboardError::Schema(_)));
    assert!(error.to_string().contains("CovidPos"));
}

#[test]
fn test_missing_file_is_fatal() {
    let error = load_dataset(Path::new("definitely/not/there.csv"), 100)
        .expect_err("missing file");
    assert!(matches!(error, DashboardError::Io { .. }));
    assert!(error.to_string().contains("not/there.csv"));
}
