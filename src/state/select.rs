//! Sample selection by metadata state.

use crate::data::MappingTable;
use crate::error::{Result, SieveError};
use crate::state::StateConstraints;
use std::collections::HashSet;

/// Return the sample identifiers whose metadata satisfies the constraints.
///
/// Every constrained column must exist in the table header. A row is
/// selected when each constrained column holds a listed value (the wildcard
/// `*` accepts any) and none of the column's `!`-prefixed tokens names the
/// row's value; exclusion wins over the wildcard. Columns the constraints do
/// not mention never affect the outcome. Row order is preserved.
///
/// # Arguments
/// * `table` - The mapping table to select from
/// * `constraints` - The parsed state description
///
/// # Returns
/// The matching sample identifiers, in table row order. May be empty.
pub fn matching_sample_ids(
    table: &MappingTable,
    constraints: &StateConstraints,
) -> Result<Vec<String>> {
    // Resolve every constrained column before touching any row.
    let mut resolved: Vec<(usize, &HashSet<String>)> = Vec::with_capacity(constraints.len());
    for (column, tokens) in constraints.iter() {
        let index = table
            .column_index(column)
            .ok_or_else(|| SieveError::ColumnNotFound(column.to_string()))?;
        resolved.push((index, tokens));
    }

    let mut sample_ids = Vec::new();
    for row in table.rows() {
        let selected = resolved.iter().all(|&(index, tokens)| {
            let cell = row[index].as_str();
            let included = tokens.contains(cell) || tokens.contains("*");
            let excluded = tokens.contains(&format!("!{}", cell));
            included && !excluded
        });
        if selected {
            sample_ids.push(row[0].clone());
        }
    }

    Ok(sample_ids)
}

/// Parse a state description and select matching samples in one call.
///
/// # Examples
/// ```
/// use microsieve::data::MappingTable;
/// use microsieve::state::sample_ids_from_metadata_description;
///
/// let table = MappingTable::new(
///     vec!["SampleID".into(), "Study".into(), "Description".into()],
///     vec![
///         vec!["S1".into(), "Dog".into(), "dog".into()],
///         vec!["S2".into(), "Hand".into(), "hand".into()],
///     ],
/// ).unwrap();
///
/// let ids = sample_ids_from_metadata_description(&table, "Study:Dog").unwrap();
/// assert_eq!(ids, vec!["S1"]);
/// ```
pub fn sample_ids_from_metadata_description(
    table: &MappingTable,
    description: &str,
) -> Result<Vec<String>> {
    let constraints = StateConstraints::parse(description)?;
    matching_sample_ids(table, &constraints)
}
