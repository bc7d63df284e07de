//! CSV dataset loading.
//!
//! The dataset is read exactly once at startup: the file schema is inferred,
//! checked against the required column contract, and every row is decoded
//! into a [`HealthRecord`] with its derived fields attached. Any failure
//! here is fatal since every dashboard depends on the full table.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::array::{Array, Float64Array, Int64Array, StringArray};
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;
use log::{debug, info};

use crate::error::{DashboardError, Result};
use crate::models::HealthRecord;
use crate::schema;

/// Read the dataset into memory, validating the schema first.
///
/// `infer_rows` caps how many rows the CSV schema inference samples.
pub fn load_dataset(path: &Path, infer_rows: usize) -> Result<Vec<HealthRecord>> {
    let start = Instant::now();

    let format = Format::default().with_header(true);
    let (file_schema, _) = format
        .infer_schema(open_file(path)?, Some(infer_rows))
        .map_err(DashboardError::Decode)?;
    schema::validate(&file_schema)?;
    debug!("Validated schema with {} columns", file_schema.fields().len());

    let reader = ReaderBuilder::new(Arc::new(file_schema))
        .with_format(format)
        .build(open_file(path)?)
        .map_err(DashboardError::Decode)?;

    let mut records = Vec::new();
    for batch in reader {
        let batch = batch.map_err(DashboardError::Decode)?;
        extract_batch(&batch, &mut records)?;
    }

    info!(
        "Loaded {} records from {} in {:?}",
        records.len(),
        path.display(),
        start.elapsed()
    );
    Ok(records)
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| DashboardError::io(path, source))
}

/// Decode every row of a record batch into typed records
fn extract_batch(batch: &RecordBatch, records: &mut Vec<HealthRecord>) -> Result<()> {
    let columns = Columns::resolve(batch)?;
    records.reserve(batch.num_rows());
    for row in 0..batch.num_rows() {
        let record = HealthRecord {
            state: text_at(batch, columns.state, row),
            general_health: text_at(batch, columns.general_health, row),
            mental_health_days: integer_at(batch, columns.mental_health_days, row),
            physical_health_days: integer_at(batch, columns.physical_health_days, row),
            race_ethnicity: text_at(batch, columns.race_ethnicity, row),
            age_category: text_at(batch, columns.age_category, row),
            sex: text_at(batch, columns.sex, row),
            bmi: float_at(batch, columns.bmi, row),
            year: integer_at(batch, columns.year, row)
                .and_then(|value| i32::try_from(value).ok()),
            month: integer_at(batch, columns.month, row)
                .and_then(|value| u32::try_from(value).ok()),
            covid_pos: text_at(batch, columns.covid_pos, row),
            had_depressive_disorder: text_at(batch, columns.had_depressive_disorder, row),
            had_diabetes: text_at(batch, columns.had_diabetes, row),
            physical_activities: text_at(batch, columns.physical_activities, row),
            ..Default::default()
        }
        .with_derived();
        records.push(record);
    }
    Ok(())
}

/// Column indices resolved once per batch
struct Columns {
    state: usize,
    general_health: usize,
    mental_health_days: usize,
    physical_health_days: usize,
    race_ethnicity: usize,
    age_category: usize,
    sex: usize,
    bmi: usize,
    year: usize,
    month: usize,
    covid_pos: usize,
    had_depressive_disorder: usize,
    had_diabetes: usize,
    physical_activities: usize,
}

impl Columns {
    fn resolve(batch: &RecordBatch) -> Result<Self> {
        let schema = batch.schema();
        let index = |name: &str| -> Result<usize> {
            schema.index_of(name).map_err(|_| {
                DashboardError::schema(format!("column `{name}` disappeared after validation"))
            })
        };
        Ok(Self {
            state: index("State")?,
            general_health: index("GeneralHealth")?,
            mental_health_days: index("MentalHealthDays")?,
            physical_health_days: index("PhysicalHealthDays")?,
            race_ethnicity: index("RaceEthnicityCategory")?,
            age_category: index("AgeCategory")?,
            sex: index("Sex")?,
            bmi: index("BMI")?,
            year: index("Year")?,
            month: index("Month")?,
            covid_pos: index("CovidPos")?,
            had_depressive_disorder: index("HadDepressiveDisorder")?,
            had_diabetes: index("HadDiabetes")?,
            physical_activities: index("PhysicalActivities")?,
        })
    }
}

/// Text cell; nulls and non-string columns become the empty string
fn text_at(batch: &RecordBatch, column: usize, row: usize) -> String {
    let array = batch.column(column);
    match array.as_any().downcast_ref::<StringArray>() {
        Some(strings) if !strings.is_null(row) => strings.value(row).to_string(),
        _ => String::new(),
    }
}

/// Integer cell, adapting a float-inferred column back to whole numbers
fn integer_at(batch: &RecordBatch, column: usize, row: usize) -> Option<i64> {
    let array = batch.column(column);
    if let Some(ints) = array.as_any().downcast_ref::<Int64Array>() {
        return (!ints.is_null(row)).then(|| ints.value(row));
    }
    if let Some(floats) = array.as_any().downcast_ref::<Float64Array>() {
        return (!floats.is_null(row)).then(|| floats.value(row) as i64);
    }
    None
}

/// Float cell, adapting an integer-inferred column up to floats
fn float_at(batch: &RecordBatch, column: usize, row: usize) -> Option<f64> {
    let array = batch.column(column);
    if let Some(floats) = array.as_any().downcast_ref::<Float64Array>() {
        return (!floats.is_null(row)).then(|| floats.value(row));
    }
    if let Some(ints) = array.as_any().downcast_ref::<Int64Array>() {
        return (!ints.is_null(row)).then(|| ints.value(row) as f64);
    }
    None
}
