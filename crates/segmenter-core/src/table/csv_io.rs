// crates/segmenter-core/src/table/csv_io.rs
//
// Delimited-text codec for tables.
// Output: comma separated, header row first, no index column, LF terminated.

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use crate::error::{Result, SegError};
use crate::table::{Cell, Table};

/// Serialize a table to CSV text. Cells are written as-is (no normalization).
pub fn to_csv(table: &Table) -> Result<String> {
    let mut w = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(64 * (table.n_rows() + 1)));

    w.write_record(table.columns())?;
    for row in table.rows() {
        w.write_record(row.iter().map(Cell::to_string))?;
    }

    let bytes = w.into_inner().map_err(|e| SegError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| SegError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Parse already-decoded CSV text. The first record is the header.
pub fn from_csv_str(text: &str) -> Result<Table> {
    let mut r = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = r.headers()?.iter().map(str::to_owned).collect();

    let mut rows = Vec::new();
    for rec in r.records() {
        let rec = rec?;
        rows.push(rec.iter().map(Cell::from_field).collect());
    }

    Table::new(columns, rows)
}
