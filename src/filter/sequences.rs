//! Membership filtering of sequence record streams.

use crate::data::{SequenceRecord, SequenceSink};
use crate::error::Result;
use crate::filter::membership::{keep_identifier, short_id, IdentifierSet};
use serde::{Deserialize, Serialize};

/// Counts from one sequence filtering pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceFilterStats {
    /// Number of records consumed.
    pub n_input: usize,
    /// Number of records written to the sink.
    pub n_kept: usize,
    /// Number of records dropped.
    pub n_discarded: usize,
}

impl std::fmt::Display for SequenceFilterStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sequence Filter Result")?;
        writeln!(f, "  Records input:     {}", self.n_input)?;
        writeln!(f, "  Records kept:      {}", self.n_kept)?;
        writeln!(f, "  Records discarded: {}", self.n_discarded)?;
        Ok(())
    }
}

/// Stream records through a membership filter into a sink.
///
/// Records are consumed one at a time and survivors written immediately;
/// the stream is never buffered. Membership is decided on the normalized
/// identifier (the token before the first whitespace), and that normalized
/// identifier is what reaches the sink - description suffixes are dropped,
/// and quality, when present, is not forwarded.
///
/// # Arguments
/// * `records` - The record stream to filter
/// * `sink` - Destination for surviving records
/// * `ids_to_keep` - Normalized identifiers to keep (or drop, under `negate`)
/// * `negate` - When true, keep exactly the records NOT in `ids_to_keep`
///
/// # Returns
/// Counts of records seen, kept, and discarded. A sink error aborts the pass.
pub fn filter_sequences<I, S>(
    records: I,
    sink: &mut S,
    ids_to_keep: &IdentifierSet,
    negate: bool,
) -> Result<SequenceFilterStats>
where
    I: IntoIterator<Item = SequenceRecord>,
    S: SequenceSink,
{
    let mut stats = SequenceFilterStats {
        n_input: 0,
        n_kept: 0,
        n_discarded: 0,
    };

    for record in records {
        stats.n_input += 1;
        if keep_identifier(&record.id, ids_to_keep, negate) {
            sink.write(short_id(&record.id), &record.seq)?;
            stats.n_kept += 1;
        } else {
            stats.n_discarded += 1;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FastaWriter;
    use crate::error::SieveError;
    use crate::filter::membership::identifier_lookup;

    fn create_test_records() -> Vec<SequenceRecord> {
        vec![
            SequenceRecord::new("A some description", "ACGT"),
            SequenceRecord::new("B", "TTTT"),
            SequenceRecord::new("C gut sample", "GGCC"),
        ]
    }

    #[test]
    fn test_filter_writes_normalized_ids() {
        let ids = identifier_lookup(["A"]);
        let mut sink = FastaWriter::new(Vec::new());

        let records = vec![
            SequenceRecord::new("A desc", "ACGT"),
            SequenceRecord::new("B", "TTTT"),
        ];
        let stats = filter_sequences(records, &mut sink, &ids, false).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, ">A\nACGT\n");
        assert_eq!(stats.n_input, 2);
        assert_eq!(stats.n_kept, 1);
        assert_eq!(stats.n_discarded, 1);
    }

    #[test]
    fn test_filter_negate() {
        let ids = identifier_lookup(["A"]);
        let mut sink = FastaWriter::new(Vec::new());

        let stats = filter_sequences(create_test_records(), &mut sink, &ids, true).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, ">B\nTTTT\n>C\nGGCC\n");
        assert_eq!(stats.n_kept, 2);
    }

    #[test]
    fn test_filter_drops_quality() {
        let ids = identifier_lookup(["Q1"]);
        let mut sink = FastaWriter::new(Vec::new());

        let records = vec![SequenceRecord::new("Q1", "ACGT").with_quality("IIII")];
        filter_sequences(records, &mut sink, &ids, false).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, ">Q1\nACGT\n");
    }

    #[test]
    fn test_filter_empty_set_keeps_nothing() {
        let ids = IdentifierSet::new();
        let mut sink = FastaWriter::new(Vec::new());

        let stats = filter_sequences(create_test_records(), &mut sink, &ids, false).unwrap();

        assert!(sink.into_inner().is_empty());
        assert_eq!(stats.n_kept, 0);
        assert_eq!(stats.n_discarded, 3);
    }

    #[test]
    fn test_sink_error_aborts() {
        struct FailingSink;

        impl SequenceSink for FailingSink {
            fn write(&mut self, _id: &str, _seq: &str) -> Result<()> {
                Err(SieveError::Io(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "sink closed",
                )))
            }
        }

        let ids = identifier_lookup(["A"]);
        let mut sink = FailingSink;

        let result = filter_sequences(create_test_records(), &mut sink, &ids, false);
        assert!(matches!(result, Err(SieveError::Io(_))));
    }

    #[test]
    fn test_stats_display() {
        let stats = SequenceFilterStats {
            n_input: 3,
            n_kept: 2,
            n_discarded: 1,
        };
        let rendered = stats.to_string();
        assert!(rendered.contains("Records input:     3"));
        assert!(rendered.contains("Records kept:      2"));
    }
}
