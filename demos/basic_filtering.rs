//! Basic example demonstrating metadata-driven dataset filtering.
//!
//! This example shows how to:
//! 1. Create a synthetic survey dataset
//! 2. Select samples with a metadata state description
//! 3. Filter a sequence stream, feature table, and distance matrix to the selection
//! 4. Prune the mapping table to match the surviving samples

use microsieve::prelude::*;
use nalgebra::DMatrix;
use sprs::TriMat;

fn main() -> Result<()> {
    println!("=== Microsieve Example ===\n");

    let mapping = create_example_mapping();
    let table = create_example_table(&mapping);
    let distances = create_example_distances(&mapping);
    let records = create_example_records(&mapping);

    println!("Data dimensions:");
    println!("  Samples:   {}", mapping.n_samples());
    println!("  Features:  {}", table.n_features());
    println!("  Sequences: {}", records.len());
    println!();

    // Select samples by metadata state
    println!("=== Sample Selection ===\n");

    let description = "Treatment:Fast;BodySite:*,!Palm";
    println!("State description: {}", description);

    let selected = sample_ids_from_metadata_description(&mapping, description)?;
    println!(
        "Selected {} of {} samples:",
        selected.len(),
        mapping.n_samples()
    );
    for id in &selected {
        println!("  {}", id);
    }
    println!();

    let ids = identifier_lookup(&selected);

    // Stream reads through the membership filter
    println!("=== Sequence Filtering ===\n");

    let mut writer = FastaWriter::new(Vec::new());
    let stats = filter_sequences(records, &mut writer, &ids, false)?;
    println!("{}", stats);

    let fasta = String::from_utf8(writer.into_inner()).unwrap();
    println!("Filtered FASTA:");
    for line in fasta.lines() {
        println!("  {}", line);
    }
    println!();

    // Feature table: membership plus a library-size floor
    println!("=== Feature Table Filtering ===\n");

    let filtered = filter_samples_from_table(&table, &ids, 25, None, false)?;
    println!(
        "Samples: {} -> {} (minimum total count 25)",
        table.n_samples(),
        filtered.n_samples()
    );
    println!("  Kept sample ids: {:?}", filtered.sample_ids());
    println!("  Library sizes:   {:?}", filtered.col_sums());
    println!();

    // Distance matrix: rows and columns drop together
    println!("=== Distance Matrix Filtering ===\n");

    let dm = filter_samples_from_distance_matrix(&distances, &ids, false)?;
    println!(
        "Samples: {} -> {} ({}x{} matrix)",
        distances.n_samples(),
        dm.n_samples(),
        dm.n_samples(),
        dm.n_samples()
    );
    println!();

    // Mapping table: drop columns left constant by the row filter
    println!("=== Mapping Table Pruning ===\n");

    let pruned = filter_mapping_table(&mapping, &ids, false, None)?;
    println!("Columns: {} -> {}", mapping.n_columns(), pruned.n_columns());
    println!("Retained header: {:?}", pruned.header());

    Ok(())
}

/// Create a twelve-sample mapping table spanning two treatments and three body sites.
fn create_example_mapping() -> MappingTable {
    let header = vec![
        "SampleID".to_string(),
        "Treatment".to_string(),
        "BodySite".to_string(),
        "DaysSinceStart".to_string(),
        "Description".to_string(),
    ];

    let sites = ["Gut", "Palm", "Tongue"];
    let rows: Vec<Vec<String>> = (0..12)
        .map(|i| {
            let treatment = if i < 6 { "Control" } else { "Fast" };
            let site = sites[i % 3];
            vec![
                format!("S{:02}", i + 1),
                treatment.to_string(),
                site.to_string(),
                "0".to_string(),
                format!("{} subject, {} sample", treatment, site.to_lowercase()),
            ]
        })
        .collect();

    MappingTable::new(header, rows).unwrap()
}

/// Create a synthetic feature table with pseudo-random counts.
fn create_example_table(mapping: &MappingTable) -> FeatureTable {
    let sample_ids: Vec<String> = mapping.sample_ids().iter().map(|s| s.to_string()).collect();
    let n_samples = sample_ids.len();
    let n_features = 8;

    let mut tri_mat = TriMat::new((n_features, n_samples));
    let mut seed = 42u64;

    let rand_uniform = |s: &mut u64| -> f64 {
        *s = s.wrapping_mul(1103515245).wrapping_add(12345);
        ((*s >> 16) & 0x7FFF) as f64 / 32768.0
    };

    for feat in 0..n_features {
        for sample in 0..n_samples {
            // S10 is a failed library with no reads at all.
            if sample == 9 {
                continue;
            }

            // Feature 0 is ubiquitous and deep; the rest are patchy.
            let (prevalence, base) = match feat {
                0 => (1.0, 25.0),
                1..=4 => (0.7, 4.0),
                _ => (0.4, 1.0),
            };

            if rand_uniform(&mut seed) > prevalence {
                continue;
            }

            let count = (base + 15.0 * rand_uniform(&mut seed)).round() as u64;
            tri_mat.add_triplet(feat, sample, count);
        }
    }

    let feature_ids: Vec<String> = (0..n_features).map(|i| format!("otu_{}", i + 1)).collect();
    let lineages: Vec<String> = (0..n_features)
        .map(|i| format!("Bacteria; Phylum_{}", i % 3 + 1))
        .collect();

    FeatureTable::new(tri_mat.to_csr(), feature_ids, sample_ids)
        .unwrap()
        .with_feature_metadata(lineages)
        .unwrap()
}

/// Create a synthetic symmetric distance matrix over the mapping's samples.
fn create_example_distances(mapping: &MappingTable) -> DistanceMatrix {
    let sample_ids: Vec<String> = mapping.sample_ids().iter().map(|s| s.to_string()).collect();
    let n = sample_ids.len();
    let data = DMatrix::from_fn(n, n, |i, j| ((i as f64) - (j as f64)).abs().sqrt() * 0.25);
    DistanceMatrix::new(sample_ids, data).unwrap()
}

/// Create one read per sample, with FASTA-style description suffixes on the ids.
fn create_example_records(mapping: &MappingTable) -> Vec<SequenceRecord> {
    const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

    mapping
        .sample_ids()
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let seq: String = (0..20).map(|j| BASES[(i * 7 + j * 3) % 4]).collect();
            SequenceRecord::new(format!("{} subject_{} day_0", id, i / 3 + 1), seq)
        })
        .collect()
}
