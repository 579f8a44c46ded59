//! Membership filtering of distance matrices.

use crate::data::DistanceMatrix;
use crate::error::Result;
use crate::filter::membership::{keep_identifier, IdentifierSet};

/// Filter a distance matrix down to the samples passing a membership filter.
///
/// The membership decision is the same as for sequence filtering (normalized
/// identifier, keep/negate polarity) and applies to rows and columns jointly,
/// so the result is a valid labeled sub-matrix. Label order is preserved.
///
/// # Arguments
/// * `dm` - The distance matrix to filter
/// * `ids_to_keep` - Normalized identifiers to keep (or drop, under `negate`)
/// * `negate` - When true, keep exactly the samples NOT in `ids_to_keep`
///
/// # Returns
/// A new DistanceMatrix over the surviving samples. May be empty.
pub fn filter_samples_from_distance_matrix(
    dm: &DistanceMatrix,
    ids_to_keep: &IdentifierSet,
    negate: bool,
) -> Result<DistanceMatrix> {
    let keep_indices: Vec<usize> = dm
        .sample_ids()
        .iter()
        .enumerate()
        .filter(|(_, id)| keep_identifier(id, ids_to_keep, negate))
        .map(|(idx, _)| idx)
        .collect();

    dm.subset(&keep_indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::membership::identifier_lookup;
    use nalgebra::DMatrix;

    fn create_test_matrix() -> DistanceMatrix {
        let sample_ids = vec![
            "S1".to_string(),
            "S2".to_string(),
            "S3".to_string(),
            "S4".to_string(),
        ];
        let data = DMatrix::from_row_slice(
            4,
            4,
            &[
                0.0, 0.1, 0.2, 0.3, //
                0.1, 0.0, 0.4, 0.5, //
                0.2, 0.4, 0.0, 0.6, //
                0.3, 0.5, 0.6, 0.0,
            ],
        );
        DistanceMatrix::new(sample_ids, data).unwrap()
    }

    #[test]
    fn test_filter_keeps_rows_and_columns_jointly() {
        let dm = create_test_matrix();
        let ids = identifier_lookup(["S2", "S4"]);

        let filtered = filter_samples_from_distance_matrix(&dm, &ids, false).unwrap();

        assert_eq!(filtered.sample_ids(), &["S2", "S4"]);
        assert_eq!(filtered.get(0, 0), 0.0);
        assert_eq!(filtered.get(0, 1), 0.5);
        assert_eq!(filtered.get(1, 0), 0.5);
        assert_eq!(filtered.get(1, 1), 0.0);
    }

    #[test]
    fn test_filter_negate_drops_listed_samples() {
        let dm = create_test_matrix();
        let ids = identifier_lookup(["S2", "S4"]);

        let filtered = filter_samples_from_distance_matrix(&dm, &ids, true).unwrap();

        assert_eq!(filtered.sample_ids(), &["S1", "S3"]);
        assert_eq!(filtered.get(0, 1), 0.2);
    }

    #[test]
    fn test_filter_normalizes_labels() {
        let sample_ids = vec!["S1 replicate".to_string(), "S2".to_string()];
        let data = DMatrix::from_row_slice(2, 2, &[0.0, 0.7, 0.7, 0.0]);
        let dm = DistanceMatrix::new(sample_ids, data).unwrap();

        let ids = identifier_lookup(["S1"]);
        let filtered = filter_samples_from_distance_matrix(&dm, &ids, false).unwrap();

        assert_eq!(filtered.sample_ids(), &["S1 replicate"]);
        assert_eq!(filtered.n_samples(), 1);
    }

    #[test]
    fn test_filter_may_leave_nothing() {
        let dm = create_test_matrix();
        let ids = identifier_lookup(["absent"]);

        let filtered = filter_samples_from_distance_matrix(&dm, &ids, false).unwrap();
        assert_eq!(filtered.n_samples(), 0);
    }
}
