use super::{CellValue, Dataset};
use calamine::{Reader, Xlsx, XlsxError};
use std::io::Cursor;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("The file is not a readable spreadsheet")]
    Spreadsheet(#[from] XlsxError),
    #[error("The workbook has no worksheets")]
    NoWorksheet,
    #[error("Required column `{0}` is missing")]
    MissingColumn(&'static str),
}

#[tracing::instrument(name = "Load subscriptions spreadsheet", skip(bytes), fields(size = bytes.len()))]
pub(super) fn load_xlsx(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::NoWorksheet)??;

    let mut rows = range.rows();
    let columns = rows
        .next()
        .map(|header| {
            header
                .iter()
                .map(|cell| CellValue::from(cell).to_string())
                .collect()
        })
        .unwrap_or_default();
    let rows = rows
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect();

    let dataset = Dataset::new(columns, rows)?;
    tracing::info!(rows = dataset.len(), "Spreadsheet loaded");

    Ok(dataset)
}
