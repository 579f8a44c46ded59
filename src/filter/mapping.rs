//! Row and column pruning of mapping tables.

use crate::data::MappingTable;
use crate::error::{Result, SieveError};
use crate::filter::membership::IdentifierSet;
use std::collections::HashSet;

/// Prune a mapping table to a set of samples, dropping uninformative columns.
///
/// Rows survive when their identifier cell is in `ids_to_keep` (matched
/// verbatim; a caller with a drop-list inverts the set first). The identifier
/// column and the final description column always survive. An interior column
/// survives when `include_repeat_cols` is true or it holds more than one
/// distinct value among the surviving rows.
///
/// `rename_column = Some(k)` designates the k-th interior column (1-based)
/// as the new identifier column: its values move into the identifier
/// position, under the identifier column's original header text, and the old
/// identifiers are demoted to a regular column headed
/// `SampleID_was_<renamed column's header>` in the renamed column's place.
/// The designated column must hold unique values across the surviving rows.
///
/// # Arguments
/// * `table` - The mapping table to prune
/// * `ids_to_keep` - Sample identifiers whose rows survive
/// * `include_repeat_cols` - Keep interior columns with only one distinct value
/// * `rename_column` - Interior column (1-based) to promote to identifier
///
/// # Returns
/// A new MappingTable; an error if no row survives, the rename index is out
/// of range, or the designated column is not unique.
pub fn filter_mapping_table(
    table: &MappingTable,
    ids_to_keep: &IdentifierSet,
    include_repeat_cols: bool,
    rename_column: Option<usize>,
) -> Result<MappingTable> {
    let kept_rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .filter(|row| ids_to_keep.contains(row[0].as_str()))
        .cloned()
        .collect();

    if kept_rows.is_empty() {
        return Err(SieveError::EmptyData(
            "No samples remain in the mapping table".to_string(),
        ));
    }

    let header = table.header();
    let n_interior = header.len() - 2;

    // 1-based among interior columns; 0 never designates a column.
    let rename_index = match rename_column {
        Some(k) if k == 0 || k > n_interior => {
            return Err(SieveError::InvalidParameter(format!(
                "rename_column {} is out of range for {} interior column(s)",
                k, n_interior
            )));
        }
        Some(k) => Some(k - 1),
        None => None,
    };

    let kept = MappingTable::new(header.to_vec(), kept_rows)?;
    let n_kept = kept.n_samples();

    let mut out_header: Vec<String> = vec![header[0].clone()];
    let mut out_columns: Vec<Vec<&str>> = vec![kept.column(0)?];

    for interior in 0..n_interior {
        let col_index = interior + 1;
        let values = kept.column(col_index)?;
        let distinct: HashSet<&str> = values.iter().copied().collect();

        if rename_index == Some(interior) {
            if distinct.len() != n_kept {
                return Err(SieveError::NonUniqueIdentifier(header[col_index].clone()));
            }
            // Promote: the designated values become the identifier column,
            // the old identifiers take the designated column's slot.
            let old_ids = std::mem::replace(&mut out_columns[0], values);
            out_header.push(format!("SampleID_was_{}", header[col_index]));
            out_columns.push(old_ids);
        } else if include_repeat_cols || distinct.len() > 1 {
            out_header.push(header[col_index].clone());
            out_columns.push(values);
        }
    }

    out_header.push(header[header.len() - 1].clone());
    out_columns.push(kept.column(header.len() - 1)?);

    // Back to row-major cells.
    let rows: Vec<Vec<String>> = (0..n_kept)
        .map(|row| {
            out_columns
                .iter()
                .map(|column| column[row].to_string())
                .collect()
        })
        .collect();

    MappingTable::new(out_header, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::membership::identifier_lookup;

    fn create_test_table() -> MappingTable {
        let header = vec![
            "SampleID".to_string(),
            "Barcode".to_string(),
            "Study".to_string(),
            "Depth".to_string(),
            "Description".to_string(),
        ];
        let rows = vec![
            vec![
                "S1".to_string(),
                "AACC".to_string(),
                "Dog".to_string(),
                "10".to_string(),
                "dog palm".to_string(),
            ],
            vec![
                "S2".to_string(),
                "GGTT".to_string(),
                "Dog".to_string(),
                "10".to_string(),
                "dog stool".to_string(),
            ],
            vec![
                "S3".to_string(),
                "ACGT".to_string(),
                "Cat".to_string(),
                "10".to_string(),
                "cat palm".to_string(),
            ],
        ];
        MappingTable::new(header, rows).unwrap()
    }

    #[test]
    fn test_row_filtering_keeps_outer_columns() {
        let table = create_test_table();
        let ids = identifier_lookup(["S1", "S3"]);

        let pruned = filter_mapping_table(&table, &ids, true, None).unwrap();

        assert_eq!(pruned.sample_ids(), vec!["S1", "S3"]);
        assert_eq!(pruned.header()[0], "SampleID");
        assert_eq!(
            pruned.header().last().map(String::as_str),
            Some("Description")
        );
        assert_eq!(pruned.column(pruned.n_columns() - 1).unwrap(), vec![
            "dog palm", "cat palm"
        ]);
    }

    #[test]
    fn test_constant_column_dropped() {
        let table = create_test_table();
        let ids = identifier_lookup(["S1", "S2", "S3"]);

        // Depth is constant; Barcode and Study vary.
        let pruned = filter_mapping_table(&table, &ids, false, None).unwrap();
        assert_eq!(
            pruned.header(),
            &["SampleID", "Barcode", "Study", "Description"]
        );
    }

    #[test]
    fn test_constant_column_kept_on_request() {
        let table = create_test_table();
        let ids = identifier_lookup(["S1", "S2", "S3"]);

        let pruned = filter_mapping_table(&table, &ids, true, None).unwrap();
        assert_eq!(
            pruned.header(),
            &["SampleID", "Barcode", "Study", "Depth", "Description"]
        );
    }

    #[test]
    fn test_column_becomes_constant_after_row_filter() {
        let table = create_test_table();
        // Only the two Dog rows survive, so Study collapses to one value.
        let ids = identifier_lookup(["S1", "S2"]);

        let pruned = filter_mapping_table(&table, &ids, false, None).unwrap();
        assert_eq!(pruned.header(), &["SampleID", "Barcode", "Description"]);
    }

    #[test]
    fn test_all_distinct_column_survives() {
        let table = create_test_table();
        let ids = identifier_lookup(["S1", "S2", "S3"]);

        // Barcode differs in every row; it is informative and stays.
        let pruned = filter_mapping_table(&table, &ids, false, None).unwrap();
        assert!(pruned.column_index("Barcode").is_some());
    }

    #[test]
    fn test_rename_promotes_column() {
        let table = create_test_table();
        let ids = identifier_lookup(["S1", "S2", "S3"]);

        // Promote Barcode (interior column 1) to identifier.
        let pruned = filter_mapping_table(&table, &ids, true, Some(1)).unwrap();

        assert_eq!(
            pruned.header(),
            &[
                "SampleID",
                "SampleID_was_Barcode",
                "Study",
                "Depth",
                "Description"
            ]
        );
        assert_eq!(pruned.sample_ids(), vec!["AACC", "GGTT", "ACGT"]);
        assert_eq!(pruned.column(1).unwrap(), vec!["S1", "S2", "S3"]);
        assert_eq!(pruned.column(2).unwrap(), vec!["Dog", "Dog", "Cat"]);
    }

    #[test]
    fn test_rename_slot_follows_surviving_columns() {
        let table = create_test_table();
        let ids = identifier_lookup(["S1", "S2", "S3"]);

        // With repeat columns dropped, Depth disappears and the demoted
        // identifiers still sit in Barcode's output slot.
        let pruned = filter_mapping_table(&table, &ids, false, Some(1)).unwrap();
        assert_eq!(
            pruned.header(),
            &["SampleID", "SampleID_was_Barcode", "Study", "Description"]
        );
    }

    #[test]
    fn test_rename_requires_unique_values() {
        let table = create_test_table();
        let ids = identifier_lookup(["S1", "S2", "S3"]);

        // Study holds Dog twice.
        let result = filter_mapping_table(&table, &ids, true, Some(2));
        assert!(matches!(result, Err(SieveError::NonUniqueIdentifier(col)) if col == "Study"));
    }

    #[test]
    fn test_rename_unique_after_row_filter() {
        let table = create_test_table();
        // Dropping S2 leaves Study values {Dog, Cat}, unique again.
        let ids = identifier_lookup(["S1", "S3"]);

        let pruned = filter_mapping_table(&table, &ids, true, Some(2)).unwrap();
        assert_eq!(pruned.sample_ids(), vec!["Dog", "Cat"]);
    }

    #[test]
    fn test_rename_out_of_range() {
        let table = create_test_table();
        let ids = identifier_lookup(["S1", "S2", "S3"]);

        assert!(matches!(
            filter_mapping_table(&table, &ids, true, Some(0)),
            Err(SieveError::InvalidParameter(_))
        ));
        assert!(matches!(
            filter_mapping_table(&table, &ids, true, Some(4)),
            Err(SieveError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_no_surviving_rows() {
        let table = create_test_table();
        let ids = identifier_lookup(["S9"]);

        let result = filter_mapping_table(&table, &ids, false, None);
        assert!(matches!(result, Err(SieveError::EmptyData(_))));
    }

    #[test]
    fn test_membership_is_exact() {
        let table = create_test_table();
        // Identifier cells are matched verbatim; "S1 extra" matches nothing.
        let ids: IdentifierSet = ["S1 extra".to_string()].into_iter().collect();

        let result = filter_mapping_table(&table, &ids, false, None);
        assert!(matches!(result, Err(SieveError::EmptyData(_))));
    }
}
