//! State description parsing for metadata-based sample selection.

use crate::error::{Result, SieveError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A parsed state description: allowed value tokens per metadata column.
///
/// State descriptions are compact boolean conditions over mapping-file
/// columns:
///
/// - `Study:Dog` - the Study column must equal `Dog`
/// - `Study:Dog,Hand` - Study must equal `Dog` or `Hand`
/// - `Study:Dog;BodySite:Palm` - Study must equal `Dog` AND BodySite `Palm`
/// - `Study:*,!Dog` - any Study value except `Dog`
///
/// Within one column the listed values combine with OR; columns combine with
/// AND. The wildcard token `*` accepts any value, and a `!`-prefixed token
/// excludes its value even when the wildcard is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateConstraints {
    /// Allowed tokens per constrained column.
    constraints: BTreeMap<String, HashSet<String>>,
}

impl StateConstraints {
    /// Parse a state description string.
    ///
    /// Segments are separated by `;`; within a segment the first `:` separates
    /// the column name from its comma-separated tokens. Column names and
    /// tokens are trimmed of surrounding whitespace. A segment without a `:`
    /// (including the empty segment left by a trailing `;`) is an error.
    ///
    /// Naming the same column in several segments is allowed; the last
    /// segment wins. An empty token (as in `Col:`) is a legal literal that
    /// matches the empty cell value.
    ///
    /// # Examples
    /// ```
    /// use microsieve::state::StateConstraints;
    /// let c = StateConstraints::parse("Study:Dog,Hand;BodySite:Palm").unwrap();
    /// assert_eq!(c.len(), 2);
    /// assert!(c.tokens("Study").unwrap().contains("Hand"));
    /// ```
    pub fn parse(description: &str) -> Result<Self> {
        let mut constraints = BTreeMap::new();

        for segment in description.split(';') {
            let segment = segment.trim();
            let (column, values) = segment.split_once(':').ok_or_else(|| {
                SieveError::StateDescription(format!(
                    "Segment '{}' has no ':' separating the column name from its values",
                    segment
                ))
            })?;

            let tokens: HashSet<String> = values
                .split(',')
                .map(|token| token.trim().to_string())
                .collect();
            constraints.insert(column.trim().to_string(), tokens);
        }

        Ok(Self { constraints })
    }

    /// Iterate over (column name, allowed tokens) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.constraints
            .iter()
            .map(|(column, tokens)| (column.as_str(), tokens))
    }

    /// Number of constrained columns.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether no column is constrained.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// The tokens allowed for a column, if it is constrained.
    pub fn tokens(&self, column: &str) -> Option<&HashSet<String>> {
        self.constraints.get(column)
    }
}
