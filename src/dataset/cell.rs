use calamine::Data;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::{macros::format_description, PrimitiveDateTime};

use super::dates::{from_excel_serial, parse_datetime};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(PrimitiveDateTime),
}

impl CellValue {
    /// Category label of the cell, `None` for missing values.
    pub fn label(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) if s.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
            CellValue::DateTime(dt) => {
                let formatted = dt
                    .format(format_description!(
                        "[year]-[month]-[day] [hour]:[minute]:[second]"
                    ))
                    .map_err(|_| fmt::Error)?;
                f.write_str(&formatted)
            }
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(x) => from_number(*x),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => from_excel_serial(dt.as_f64())
                .map(CellValue::DateTime)
                .unwrap_or(CellValue::Float(dt.as_f64())),
            Data::DateTimeIso(s) => parse_datetime(s)
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::Text(s.clone())),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(_) | Data::Empty => CellValue::Empty,
        }
    }
}

/// Workbooks store every number as a float; whole numbers are read back as
/// integers so an `id` column stays `1, 2, 3`.
fn from_number(x: f64) -> CellValue {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < MAX_EXACT_INTEGER {
        CellValue::Int(x as i64)
    } else {
        CellValue::Float(x)
    }
}

/// 2^53, the largest magnitude below which every integer is an exact f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;
