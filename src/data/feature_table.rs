//! Feature abundance tables with sparse storage.

use crate::error::{Result, SieveError};
use rayon::prelude::*;
use sprs::{CsMat, TriMat};
use std::collections::HashMap;

/// A sparse table of feature counts across samples.
///
/// Rows represent features (OTUs/taxa), columns represent samples. Uses CSR
/// (Compressed Sparse Row) format for efficient row-wise operations. Each
/// feature may carry an optional metadata string (e.g. a consensus lineage)
/// that travels with it through filtering.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    /// Sparse matrix in CSR format (features × samples)
    data: CsMat<u64>,
    /// Feature identifiers (row names)
    feature_ids: Vec<String>,
    /// Sample identifiers (column names)
    sample_ids: Vec<String>,
    /// Optional per-feature metadata, aligned to `feature_ids`
    feature_metadata: Option<Vec<String>>,
}

impl FeatureTable {
    /// Create a new FeatureTable from a sparse matrix and identifiers.
    pub fn new(
        data: CsMat<u64>,
        feature_ids: Vec<String>,
        sample_ids: Vec<String>,
    ) -> Result<Self> {
        let (nrows, ncols) = data.shape();
        if nrows != feature_ids.len() {
            return Err(SieveError::DimensionMismatch {
                expected: nrows,
                actual: feature_ids.len(),
            });
        }
        if ncols != sample_ids.len() {
            return Err(SieveError::DimensionMismatch {
                expected: ncols,
                actual: sample_ids.len(),
            });
        }
        Ok(Self {
            data,
            feature_ids,
            sample_ids,
            feature_metadata: None,
        })
    }

    /// Attach one metadata string per feature (e.g. consensus lineage).
    pub fn with_feature_metadata(mut self, metadata: Vec<String>) -> Result<Self> {
        if metadata.len() != self.n_features() {
            return Err(SieveError::DimensionMismatch {
                expected: self.n_features(),
                actual: metadata.len(),
            });
        }
        self.feature_metadata = Some(metadata);
        Ok(self)
    }

    /// Get the value at (row, col), returning 0 for missing entries.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.data.get(row, col).copied().unwrap_or(0)
    }

    /// Number of features (rows).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.data.rows()
    }

    /// Number of samples (columns).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.data.cols()
    }

    /// Total number of non-zero entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.data.nnz()
    }

    /// Feature identifiers.
    #[inline]
    pub fn feature_ids(&self) -> &[String] {
        &self.feature_ids
    }

    /// Sample identifiers.
    #[inline]
    pub fn sample_ids(&self) -> &[String] {
        &self.sample_ids
    }

    /// Per-feature metadata, if attached.
    #[inline]
    pub fn feature_metadata(&self) -> Option<&[String]> {
        self.feature_metadata.as_deref()
    }

    /// Get the underlying sparse matrix.
    #[inline]
    pub fn data(&self) -> &CsMat<u64> {
        &self.data
    }

    /// Iterate over rows (features) as sparse vectors.
    pub fn row_iter(&self) -> impl Iterator<Item = sprs::CsVecViewI<'_, u64, usize>> + '_ {
        self.data.outer_iterator()
    }

    /// Get a dense vector for a specific row (feature).
    pub fn row_dense(&self, row: usize) -> Vec<u64> {
        let mut dense = vec![0u64; self.n_samples()];
        if let Some(row_vec) = self.data.outer_view(row) {
            for (col, &val) in row_vec.iter() {
                dense[col] = val;
            }
        }
        dense
    }

    /// Get a dense vector for a specific column (sample).
    pub fn col_dense(&self, col: usize) -> Vec<u64> {
        (0..self.n_features())
            .map(|row| self.get(row, col))
            .collect()
    }

    /// Compute row sums (total counts per feature).
    pub fn row_sums(&self) -> Vec<u64> {
        (0..self.n_features())
            .into_par_iter()
            .map(|row| {
                self.data
                    .outer_view(row)
                    .map(|v| v.iter().map(|(_, &val)| val).sum())
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Compute column sums (library sizes per sample).
    pub fn col_sums(&self) -> Vec<u64> {
        let mut sums = vec![0u64; self.n_samples()];
        for row_vec in self.data.outer_iterator() {
            for (col, &val) in row_vec.iter() {
                sums[col] += val;
            }
        }
        sums
    }

    /// Subset the table to include only specified features (by index).
    ///
    /// Feature metadata, when attached, is subset alongside.
    pub fn subset_features(&self, indices: &[usize]) -> Result<Self> {
        let n_features = indices.len();
        let n_samples = self.n_samples();

        let mut triplets = Vec::new();
        let mut new_feature_ids = Vec::with_capacity(n_features);
        let mut new_metadata = self
            .feature_metadata
            .as_ref()
            .map(|_| Vec::with_capacity(n_features));

        for (new_row, &old_row) in indices.iter().enumerate() {
            if old_row >= self.n_features() {
                return Err(SieveError::InvalidParameter(format!(
                    "Feature index {} out of bounds",
                    old_row
                )));
            }
            new_feature_ids.push(self.feature_ids[old_row].clone());
            if let (Some(new_md), Some(metadata)) = (&mut new_metadata, &self.feature_metadata) {
                new_md.push(metadata[old_row].clone());
            }

            if let Some(row_vec) = self.data.outer_view(old_row) {
                for (col, &val) in row_vec.iter() {
                    triplets.push((new_row, col, val));
                }
            }
        }

        let mut tri_mat = TriMat::new((n_features, n_samples));
        for (row, col, val) in triplets {
            tri_mat.add_triplet(row, col, val);
        }

        let mut table = Self::new(tri_mat.to_csr(), new_feature_ids, self.sample_ids.clone())?;
        table.feature_metadata = new_metadata;
        Ok(table)
    }

    /// Subset the table to include only specified samples (by index).
    pub fn subset_samples(&self, indices: &[usize]) -> Result<Self> {
        let n_features = self.n_features();
        let n_samples = indices.len();

        // Build column index mapping
        let col_map: HashMap<usize, usize> = indices
            .iter()
            .enumerate()
            .map(|(new_idx, &old_idx)| (old_idx, new_idx))
            .collect();

        let mut new_sample_ids = Vec::with_capacity(n_samples);
        for &old_col in indices {
            if old_col >= self.n_samples() {
                return Err(SieveError::InvalidParameter(format!(
                    "Sample index {} out of bounds",
                    old_col
                )));
            }
            new_sample_ids.push(self.sample_ids[old_col].clone());
        }

        let mut triplets = Vec::new();
        for (row, row_vec) in self.data.outer_iterator().enumerate() {
            for (old_col, &val) in row_vec.iter() {
                if let Some(&new_col) = col_map.get(&old_col) {
                    triplets.push((row, new_col, val));
                }
            }
        }

        let mut tri_mat = TriMat::new((n_features, n_samples));
        for (row, col, val) in triplets {
            tri_mat.add_triplet(row, col, val);
        }

        let mut table = Self::new(tri_mat.to_csr(), self.feature_ids.clone(), new_sample_ids)?;
        table.feature_metadata = self.feature_metadata.clone();
        Ok(table)
    }

    /// Keep the features for which the predicate returns true.
    ///
    /// The predicate sees each feature's dense counts across samples, its
    /// identifier, and its metadata string when attached. Refuses to return a
    /// table with no features left.
    pub fn filter_features<F>(&self, mut predicate: F) -> Result<Self>
    where
        F: FnMut(&[u64], &str, Option<&str>) -> bool,
    {
        let metadata = self.feature_metadata.as_deref();
        let keep_indices: Vec<usize> = (0..self.n_features())
            .filter(|&row| {
                let values = self.row_dense(row);
                let md = metadata.map(|m| m[row].as_str());
                predicate(&values, &self.feature_ids[row], md)
            })
            .collect();

        if keep_indices.is_empty() {
            return Err(SieveError::EmptyData(
                "No features match the filter criteria".to_string(),
            ));
        }

        self.subset_features(&keep_indices)
    }

    /// Keep the samples for which the predicate returns true.
    ///
    /// The predicate sees each sample's dense counts across features and its
    /// identifier. Refuses to return a table with no samples left.
    pub fn filter_samples<F>(&self, mut predicate: F) -> Result<Self>
    where
        F: FnMut(&[u64], &str) -> bool,
    {
        let keep_indices: Vec<usize> = (0..self.n_samples())
            .filter(|&col| {
                let values = self.col_dense(col);
                predicate(&values, &self.sample_ids[col])
            })
            .collect();

        if keep_indices.is_empty() {
            return Err(SieveError::EmptyData(
                "No samples match the filter criteria".to_string(),
            ));
        }

        self.subset_samples(&keep_indices)
    }
}
