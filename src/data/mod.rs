//! Data structures for sample and feature filtering.

mod distance;
mod feature_table;
mod mapping;
mod sequence;

pub use distance::DistanceMatrix;
pub use feature_table::FeatureTable;
pub use mapping::MappingTable;
pub use sequence::{FastaWriter, SequenceRecord, SequenceSink};
