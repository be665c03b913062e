// crates/segmenter-core/src/table/mod.rs
//
// Rectangular, order-preserving table of lead records.
// Rows are stored as cell vectors aligned with `columns`.

pub mod cell;
pub mod csv_io;

use std::ops::Range;

use crate::error::{Result, SegError};

pub use cell::Cell;

#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table, rejecting rows whose width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let expected = columns.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(SegError::RaggedRow {
                row,
                expected,
                found: r.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns), header excluded.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Column name -> cell view of one row.
    pub fn row_map(&self, row: usize) -> Option<Vec<(&str, &Cell)>> {
        let r = self.rows.get(row)?;
        Some(
            self.columns
                .iter()
                .map(String::as_str)
                .zip(r.iter())
                .collect(),
        )
    }

    /// Contiguous sub-table. The range is clipped to the table bounds.
    pub fn slice(&self, range: Range<usize>) -> Table {
        let end = range.end.min(self.rows.len());
        let start = range.start.min(end);
        Table {
            columns: self.columns.clone(),
            rows: self.rows[start..end].to_vec(),
        }
    }

    pub fn head(&self, n: usize) -> Table {
        self.slice(0..n)
    }

    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.rows.is_empty() || self.columns.is_empty() {
            return Err(SegError::EmptyTable);
        }
        Ok(())
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.rows.iter_mut().flat_map(|r| r.iter_mut())
    }
}
