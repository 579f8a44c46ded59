//! Metadata state descriptions and sample selection.

mod description;
mod select;

pub use description::StateConstraints;
pub use select::{matching_sample_ids, sample_ids_from_metadata_description};
