//! Filtering primitives for sequences, tables, and distance matrices.

pub mod abundance;
pub mod distance;
pub mod mapping;
pub mod membership;
pub mod sequences;

pub use abundance::{count_bounded_keep, filter_features_from_table, filter_samples_from_table};
pub use distance::filter_samples_from_distance_matrix;
pub use mapping::filter_mapping_table;
pub use membership::{
    identifier_lookup, ids_from_reader, ids_from_records, keep_identifier, short_id, IdentifierSet,
};
pub use sequences::{filter_sequences, SequenceFilterStats};
