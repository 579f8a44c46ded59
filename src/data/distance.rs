//! Labeled pairwise distance matrices.

use crate::error::{Result, SieveError};
use nalgebra::DMatrix;
use std::collections::HashSet;

/// A square matrix of pairwise sample distances with one label per axis entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    /// Sample identifiers, one per row/column.
    sample_ids: Vec<String>,
    /// Square distance matrix aligned to `sample_ids` on both axes.
    data: DMatrix<f64>,
}

impl DistanceMatrix {
    /// Create a new DistanceMatrix from labels and a square matrix.
    ///
    /// Requires a square matrix, one label per axis entry, and unique labels.
    pub fn new(sample_ids: Vec<String>, data: DMatrix<f64>) -> Result<Self> {
        let (nrows, ncols) = data.shape();
        if nrows != ncols {
            return Err(SieveError::DimensionMismatch {
                expected: nrows,
                actual: ncols,
            });
        }
        if sample_ids.len() != nrows {
            return Err(SieveError::DimensionMismatch {
                expected: nrows,
                actual: sample_ids.len(),
            });
        }
        let mut seen = HashSet::new();
        for id in &sample_ids {
            if !seen.insert(id.as_str()) {
                return Err(SieveError::DuplicateSampleId(id.clone()));
            }
        }
        Ok(Self { sample_ids, data })
    }

    /// Sample identifiers.
    #[inline]
    pub fn sample_ids(&self) -> &[String] {
        &self.sample_ids
    }

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.sample_ids.len()
    }

    /// The underlying dense matrix.
    #[inline]
    pub fn data(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Distance between the samples at positions `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[(i, j)]
    }

    /// Subset to the specified samples (by index), applied to rows and
    /// columns jointly so the result stays a valid labeled sub-matrix.
    pub fn subset(&self, indices: &[usize]) -> Result<Self> {
        for &idx in indices {
            if idx >= self.n_samples() {
                return Err(SieveError::InvalidParameter(format!(
                    "Sample index {} out of bounds",
                    idx
                )));
            }
        }

        let n = indices.len();
        let mut data = DMatrix::zeros(n, n);
        for (new_row, &old_row) in indices.iter().enumerate() {
            for (new_col, &old_col) in indices.iter().enumerate() {
                data[(new_row, new_col)] = self.data[(old_row, old_col)];
            }
        }
        let sample_ids = indices.iter().map(|&i| self.sample_ids[i].clone()).collect();

        Self::new(sample_ids, data)
    }
}
