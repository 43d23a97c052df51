//! Subscription spreadsheets loaded into memory.

mod cell;
mod dates;
mod loader;

pub use cell::CellValue;
pub use dates::{coerce_datetime, parse_datetime};
pub use loader::LoadError;

use serde::{Deserialize, Serialize};
use std::io;
use time::PrimitiveDateTime;

pub const STATUS_COLUMN: &str = "estado";
pub const START_DATE_COLUMN: &str = "fecha_inicio";
pub const CANCELLATION_DATE_COLUMN: &str = "fecha_cancelacion";
pub const CANCELED_STATUS: &str = "cancelado";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    status_index: usize,
    start_index: usize,
    cancellation_index: usize,
}

/// Borrowed view over one row of a [`Dataset`].
#[derive(Clone, Copy, Debug)]
pub struct SubscriptionRecord<'a> {
    dataset: &'a Dataset,
    cells: &'a [CellValue],
}

impl Dataset {
    /// Builds a dataset from a header row and data rows.
    ///
    /// Short rows are padded with empty cells, and both date columns are
    /// coerced so that every cell holds either a timestamp or nothing.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self, LoadError> {
        let position = |name: &'static str| {
            columns
                .iter()
                .position(|column| column.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };

        let status_index = position(STATUS_COLUMN)?;
        let start_index = position(START_DATE_COLUMN)?;
        let cancellation_index = position(CANCELLATION_DATE_COLUMN)?;

        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                for index in [start_index, cancellation_index] {
                    row[index] = coerce_datetime(&row[index])
                        .map(CellValue::DateTime)
                        .unwrap_or(CellValue::Empty);
                }
                row
            })
            .collect();

        Ok(Self {
            columns,
            rows,
            status_index,
            start_index,
            cancellation_index,
        })
    }

    pub fn from_xlsx(bytes: &[u8]) -> Result<Self, LoadError> {
        loader::load_xlsx(bytes)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = SubscriptionRecord<'_>> {
        self.rows.iter().map(|cells| SubscriptionRecord {
            dataset: self,
            cells,
        })
    }

    pub fn head(&self, n: usize) -> impl Iterator<Item = SubscriptionRecord<'_>> {
        self.records().take(n)
    }

    /// Serializes the header and the first `limit` rows as CSV.
    pub fn to_csv(&self, limit: usize) -> Result<String, csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(&self.columns)?;
        for record in self.head(limit) {
            writer.write_record(record.cells().iter().map(|cell| cell.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;

        String::from_utf8(bytes)
            .map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

impl<'a> SubscriptionRecord<'a> {
    pub fn cells(&self) -> &'a [CellValue] {
        self.cells
    }

    pub fn status(&self) -> Option<String> {
        self.cells[self.dataset.status_index].label()
    }

    pub fn is_canceled(&self) -> bool {
        self.status().as_deref() == Some(CANCELED_STATUS)
    }

    pub fn started_at(&self) -> Option<PrimitiveDateTime> {
        self.timestamp(self.dataset.start_index)
    }

    pub fn canceled_at(&self) -> Option<PrimitiveDateTime> {
        self.timestamp(self.dataset.cancellation_index)
    }

    fn timestamp(&self, index: usize) -> Option<PrimitiveDateTime> {
        match self.cells[index] {
            CellValue::DateTime(dt) => Some(dt),
            _ => None,
        }
    }
}
