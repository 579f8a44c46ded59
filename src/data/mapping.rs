//! Sample metadata mapping tables.

use crate::error::{Result, SieveError};
use std::collections::HashSet;

/// A sample metadata table in mapping-file layout.
///
/// The first column holds the sample identifier and the final column holds a
/// free-text description; the columns in between carry metadata values. All
/// cells are strings, aligned to the header.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingTable {
    /// Column names; `header[0]` is the sample identifier column.
    header: Vec<String>,
    /// Rows of cells, each exactly `header.len()` long.
    rows: Vec<Vec<String>>,
}

impl MappingTable {
    /// Create a new MappingTable from a header and rows.
    ///
    /// Requires at least two columns (identifier plus description), every row
    /// as wide as the header, and unique sample identifiers.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if header.len() < 2 {
            return Err(SieveError::EmptyData(
                "Mapping header must have an identifier and a description column".to_string(),
            ));
        }
        for row in &rows {
            if row.len() != header.len() {
                return Err(SieveError::DimensionMismatch {
                    expected: header.len(),
                    actual: row.len(),
                });
            }
        }
        let mut seen = HashSet::new();
        for row in &rows {
            if !seen.insert(row[0].as_str()) {
                return Err(SieveError::DuplicateSampleId(row[0].clone()));
            }
        }
        Ok(Self { header, rows })
    }

    /// Column names.
    #[inline]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Rows of cells.
    #[inline]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of samples (rows).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.header.len()
    }

    /// Sample identifiers (first cell of each row), in row order.
    pub fn sample_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row[0].as_str()).collect()
    }

    /// Position of a column name in the header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// All values of one column, in row order.
    pub fn column(&self, index: usize) -> Result<Vec<&str>> {
        if index >= self.header.len() {
            return Err(SieveError::InvalidParameter(format!(
                "Column index {} out of bounds",
                index
            )));
        }
        Ok(self.rows.iter().map(|row| row[index].as_str()).collect())
    }
}
