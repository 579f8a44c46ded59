//! Microsieve: membership- and metadata-driven filtering for microbiome
//! datasets.
//!
//! This library filters the in-memory structures of a typical amplicon
//! workflow - sequence record streams, sample-metadata mapping tables,
//! pairwise distance matrices, and feature abundance tables - down to a
//! subset of samples or features. The subset is named either directly, as a
//! set of identifiers, or declaratively, as a *state description* over
//! mapping-file columns (`"Study:Dog,Hand;BodySite:Palm"`).
//!
//! # Overview
//!
//! The library is organized into three modules:
//!
//! - **data**: Core data structures (MappingTable, FeatureTable,
//!   DistanceMatrix, SequenceRecord)
//! - **state**: The state-description language and metadata-driven sample
//!   selection
//! - **filter**: Filtering primitives (identifier membership, count bounds)
//!   applied to each data shape
//!
//! Parsing and formatting of the on-disk formats stay outside the library:
//! callers construct the data structures, filter them, and hand the results
//! to their own formatters. The one exception is sequence output, where
//! filtering writes survivors straight to a [`data::SequenceSink`].
//!
//! # Example
//!
//! ```
//! use microsieve::prelude::*;
//!
//! let table = MappingTable::new(
//!     vec![
//!         "SampleID".into(),
//!         "Study".into(),
//!         "BodySite".into(),
//!         "Description".into(),
//!     ],
//!     vec![
//!         vec!["S1".into(), "Dog".into(), "Palm".into(), "dog palm".into()],
//!         vec!["S2".into(), "Hand".into(), "Stool".into(), "hand stool".into()],
//!         vec!["S3".into(), "Cat".into(), "Palm".into(), "cat palm".into()],
//!     ],
//! )
//! .unwrap();
//!
//! // Select samples by metadata state, then filter sequences to match.
//! let ids = sample_ids_from_metadata_description(&table, "Study:Dog,Hand").unwrap();
//! assert_eq!(ids, vec!["S1", "S2"]);
//!
//! let keep = identifier_lookup(&ids);
//! let records = vec![
//!     SequenceRecord::new("S1 forward read", "ACGT"),
//!     SequenceRecord::new("S2", "TTAA"),
//!     SequenceRecord::new("S3", "GGCC"),
//! ];
//! let mut sink = FastaWriter::new(Vec::new());
//! let stats = filter_sequences(records, &mut sink, &keep, false).unwrap();
//!
//! assert_eq!(stats.n_kept, 2);
//! let fasta = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(fasta, ">S1\nACGT\n>S2\nTTAA\n");
//! ```

pub mod data;
pub mod error;
pub mod filter;
pub mod state;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::data::{
        DistanceMatrix, FastaWriter, FeatureTable, MappingTable, SequenceRecord, SequenceSink,
    };
    pub use crate::error::{Result, SieveError};
    pub use crate::filter::{
        // Membership primitives
        identifier_lookup, ids_from_reader, ids_from_records, keep_identifier, short_id,
        IdentifierSet,
        // Per-shape filters
        count_bounded_keep, filter_features_from_table, filter_mapping_table,
        filter_samples_from_distance_matrix, filter_samples_from_table, filter_sequences,
        SequenceFilterStats,
    };
    pub use crate::state::{
        matching_sample_ids, sample_ids_from_metadata_description, StateConstraints,
    };
}
