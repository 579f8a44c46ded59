//! Sequence records and output sinks.

use crate::error::Result;
use std::io::Write;

/// One parsed sequence record.
///
/// Quality is optional: records parsed from FASTA leave it `None`, records
/// parsed from FASTQ carry it. Downstream filtering treats both the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Identifier line content (identifier plus optional description).
    pub id: String,
    /// The sequence itself.
    pub seq: String,
    /// Quality string, when the source format provides one.
    pub qual: Option<String>,
}

impl SequenceRecord {
    /// Create a record without quality.
    pub fn new(id: impl Into<String>, seq: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            seq: seq.into(),
            qual: None,
        }
    }

    /// Attach a quality string.
    pub fn with_quality(mut self, qual: impl Into<String>) -> Self {
        self.qual = Some(qual.into());
        self
    }
}

/// Destination for sequence records that survive filtering.
pub trait SequenceSink {
    /// Write one surviving record.
    fn write(&mut self, id: &str, seq: &str) -> Result<()>;
}

/// A [`SequenceSink`] that writes FASTA (`>id` line followed by the sequence).
#[derive(Debug)]
pub struct FastaWriter<W: Write> {
    inner: W,
}

impl<W: Write> FastaWriter<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> SequenceSink for FastaWriter<W> {
    fn write(&mut self, id: &str, seq: &str) -> Result<()> {
        writeln!(self.inner, ">{}", id)?;
        writeln!(self.inner, "{}", seq)?;
        Ok(())
    }
}
