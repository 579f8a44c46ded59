//! Count-bounded membership filtering for feature tables.

use crate::data::FeatureTable;
use crate::error::{Result, SieveError};
use crate::filter::membership::IdentifierSet;

/// Decide whether one table axis entry passes a count-bounded membership
/// filter.
///
/// Membership is an exact set test on the identifier (table axis identifiers
/// are already canonical, so no normalization is applied), flipped by
/// `negate_ids`. The count test requires `min_count <= sum(values)` and, when
/// `max_count` is given, `sum(values) <= max_count`; both bounds are
/// inclusive, and `None` means unbounded above. Both halves must pass;
/// `negate_ids` flips only the membership half.
pub fn count_bounded_keep(
    values: &[u64],
    identifier: &str,
    ids_to_keep: &IdentifierSet,
    min_count: u64,
    max_count: Option<u64>,
    negate_ids: bool,
) -> bool {
    let in_set = ids_to_keep.contains(identifier);
    let membership = if negate_ids { !in_set } else { in_set };

    let total: u64 = values.iter().sum();
    let within_bounds = total >= min_count && max_count.map_or(true, |max| total <= max);

    membership && within_bounds
}

/// Filter the samples of a feature table by membership and library size.
///
/// # Arguments
/// * `table` - The feature table to filter
/// * `ids_to_keep` - Sample identifiers to keep (or drop, under `negate_ids`)
/// * `min_count` - Minimum total count (library size), inclusive
/// * `max_count` - Maximum total count, inclusive; None for no upper limit
/// * `negate_ids` - When true, keep exactly the samples NOT in `ids_to_keep`
///
/// # Returns
/// A new FeatureTable containing only the samples meeting the criteria; an
/// error if none do.
pub fn filter_samples_from_table(
    table: &FeatureTable,
    ids_to_keep: &IdentifierSet,
    min_count: u64,
    max_count: Option<u64>,
    negate_ids: bool,
) -> Result<FeatureTable> {
    validate_bounds(min_count, max_count)?;

    table.filter_samples(|values, sample_id| {
        count_bounded_keep(values, sample_id, ids_to_keep, min_count, max_count, negate_ids)
    })
}

/// Filter the features of a feature table by membership and total count.
///
/// The predicate receives each feature's metadata string too (when attached)
/// but the decision here rests on identifier and counts alone; metadata rides
/// along into the result unchanged.
///
/// # Arguments
/// * `table` - The feature table to filter
/// * `ids_to_keep` - Feature identifiers to keep (or drop, under `negate_ids`)
/// * `min_count` - Minimum total count across samples, inclusive
/// * `max_count` - Maximum total count, inclusive; None for no upper limit
/// * `negate_ids` - When true, keep exactly the features NOT in `ids_to_keep`
///
/// # Returns
/// A new FeatureTable containing only the features meeting the criteria; an
/// error if none do.
pub fn filter_features_from_table(
    table: &FeatureTable,
    ids_to_keep: &IdentifierSet,
    min_count: u64,
    max_count: Option<u64>,
    negate_ids: bool,
) -> Result<FeatureTable> {
    validate_bounds(min_count, max_count)?;

    table.filter_features(|values, feature_id, _metadata| {
        count_bounded_keep(values, feature_id, ids_to_keep, min_count, max_count, negate_ids)
    })
}

fn validate_bounds(min_count: u64, max_count: Option<u64>) -> Result<()> {
    if let Some(max) = max_count {
        if max < min_count {
            return Err(SieveError::InvalidParameter(format!(
                "max_count ({}) cannot be less than min_count ({})",
                max, min_count
            )));
        }
    }
    Ok(())
}
