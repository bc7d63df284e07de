//! The typed column contract for the input dataset.
//!
//! Every aggregation downstream assumes these columns exist with these
//! kinds, so the contract is checked once at load time and a mismatch is a
//! fatal startup error naming the offending column.

use arrow::datatypes::{DataType, Schema};

use crate::error::{DashboardError, Result};

/// Broad kind a column must decode as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Categorical or free text
    Text,
    /// Whole-number counts and calendar fields
    Integer,
    /// Floating-point measurements
    Float,
}

/// One required column of the source file
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    /// Column name as it appears in the file header
    pub name: &'static str,
    /// Kind the column must decode as
    pub kind: ColumnKind,
}

const fn column(name: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec { name, kind }
}

/// Columns the dataset must carry; extra columns are ignored
pub const REQUIRED_COLUMNS: &[ColumnSpec] = &[
    column("State", ColumnKind::Text),
    column("GeneralHealth", ColumnKind::Text),
    column("MentalHealthDays", ColumnKind::Integer),
    column("PhysicalHealthDays", ColumnKind::Integer),
    column("RaceEthnicityCategory", ColumnKind::Text),
    column("AgeCategory", ColumnKind::Text),
    column("Sex", ColumnKind::Text),
    column("BMI", ColumnKind::Float),
    column("Year", ColumnKind::Integer),
    column("Month", ColumnKind::Integer),
    column("CovidPos", ColumnKind::Text),
    column("HadDepressiveDisorder", ColumnKind::Text),
    column("HadDiabetes", ColumnKind::Text),
    column("PhysicalActivities", ColumnKind::Text),
];

/// Whether an inferred Arrow type satisfies a column kind.
///
/// Numeric kinds accept both `Int64` and `Float64` so that inference drift
/// (an integer column sampled as floats, or the reverse) is adapted at
/// extraction instead of rejected here.
#[must_use]
pub fn kind_compatible(kind: ColumnKind, data_type: &DataType) -> bool {
    match kind {
        ColumnKind::Text => matches!(data_type, DataType::Utf8 | DataType::LargeUtf8),
        ColumnKind::Integer | ColumnKind::Float => {
            matches!(data_type, DataType::Int64 | DataType::Float64)
        }
    }
}

/// Validate an inferred file schema against the required column contract.
///
/// Fails with a descriptive error on the first missing or mistyped column;
/// there is no degraded mode since every dashboard depends on the full
/// schema.
pub fn validate(schema: &Schema) -> Result<()> {
    for spec in REQUIRED_COLUMNS {
        let Ok(field) = schema.field_with_name(spec.name) else {
            return Err(DashboardError::schema(format!(
                "required column `{}` is missing from the input file",
                spec.name
            )));
        };
        if !kind_compatible(spec.kind, field.data_type()) {
            return Err(DashboardError::schema(format!(
                "column `{}` has type {} but {:?} data was expected",
                spec.name,
                field.data_type(),
                spec.kind
            )));
        }
    }
    Ok(())
}
