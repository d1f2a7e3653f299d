//! Spreadsheet writer backed by `rust_xlsxwriter`.

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use thiserror::Error;

use super::TableWriter;
use crate::pipeline::ExportRow;

const SHEET_NAME: &str = "Stories";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write spreadsheet: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Writes rows into a single-sheet `.xlsx` workbook with a bold header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxTableWriter;

impl TableWriter for XlsxTableWriter {
    fn write_table(&self, rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, name) in ExportRow::COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *name, &header)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            sheet.write_string(r, 0, &row.stories)?;
            sheet.write_string(r, 1, &row.description)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_a_zip_container() {
        let rows = vec![ExportRow {
            stories: "Login with email".to_string(),
            description: "must log in".to_string(),
        }];
        let bytes = XlsxTableWriter.write_table(&rows).unwrap();

        // xlsx files are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn writes_header_only_workbook_for_no_rows() {
        let bytes = XlsxTableWriter.write_table(&[]).unwrap();
        assert!(!bytes.is_empty());
    }
}
