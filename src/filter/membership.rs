//! Identifier membership predicates and lookup construction.

use crate::data::SequenceRecord;
use crate::error::Result;
use std::collections::HashSet;
use std::io::BufRead;

/// The lookup set driving membership filters.
pub type IdentifierSet = HashSet<String>;

/// The identifier proper: the token before the first whitespace.
///
/// Sequence headers often carry a description after the identifier
/// (`"Seq1 length=120"`); membership is decided on `"Seq1"` alone. A
/// whitespace-only input normalizes to the empty string.
#[inline]
pub fn short_id(raw: &str) -> &str {
    raw.split_whitespace().next().unwrap_or("")
}

/// Decide whether an identifier passes a membership filter.
///
/// With `negate` false, keep identifiers whose normalized form is in `ids`;
/// with `negate` true, keep exactly the others.
pub fn keep_identifier(identifier: &str, ids: &IdentifierSet, negate: bool) -> bool {
    let in_set = ids.contains(short_id(identifier));
    if negate {
        !in_set
    } else {
        in_set
    }
}

/// Build an [`IdentifierSet`] from raw identifiers, normalizing each one.
pub fn identifier_lookup<I, S>(ids: I) -> IdentifierSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .map(|id| short_id(id.as_ref()).to_string())
        .collect()
}

/// Read an [`IdentifierSet`] from a reader with one identifier per line.
///
/// Blank lines and lines starting with `#` are skipped; only the first
/// whitespace-separated token of each remaining line is kept.
pub fn ids_from_reader<R: BufRead>(reader: R) -> Result<IdentifierSet> {
    let mut ids = IdentifierSet::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        ids.insert(short_id(line).to_string());
    }
    Ok(ids)
}

/// Build an [`IdentifierSet`] from the identifiers of parsed records.
pub fn ids_from_records<'a, I>(records: I) -> IdentifierSet
where
    I: IntoIterator<Item = &'a SequenceRecord>,
{
    records
        .into_iter()
        .map(|record| short_id(&record.id).to_string())
        .collect()
}
