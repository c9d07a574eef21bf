#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//! # mmtf-features Library
//!
//! This library turns protein structures and sequences into machine-learning features.
//! Sequence encoders work on a column of a Polars DataFrame and add a feature-vector
//! column next to it, while the mappers split structures read from PDB and mmCIF files
//! into polymer chains whose sequences can be fed to the encoders.

pub mod alphabet;
mod chains;
mod encoder;
mod mappers;
pub mod properties;
mod residues;
mod utils;

// Re-export key public types
pub use chains::ChainExt;
pub use encoder::{blosum62, one_hot, properties, EncodingMethod, ProteinSequenceEncoder};
pub use mappers::{
    count_polymer_chains, polymer_chains_to_df, structure_to_polymer_chains, PolymerChain,
};
pub use residues::{PolymerKind, ResidueExt};
pub use utils::{
    load_structure, log_pdb_errors, run_with_threads, structure_id, write_df_to_file,
    DataFrameFileType,
};

use polars::prelude::*;
use rayon::prelude::*;
use tracing::{debug, error};

/// Load structure files in parallel and collect their polymer chains into a DataFrame.
///
/// Files that fail to parse are logged and skipped. Only chains of `kind` are kept when
/// it is given.
///
/// # Arguments
///
/// * `input_files` - Paths to PDB or mmCIF files
/// * `exclude_duplicates` - Keep only the first chain of each distinct sequence per structure
/// * `kind` - Restrict the output to one polymer type
///
/// # Returns
///
/// A Polars DataFrame with columns:
/// - structure_chain_id, chain, polymer_type, length, sequence
///
/// # Example
///
/// ```no_run
/// use mmtf_features::{get_polymer_sequences, PolymerKind, ProteinSequenceEncoder};
///
/// let files = vec!["path/to/1stp.cif".to_string()];
/// let df = get_polymer_sequences(&files, false, Some(PolymerKind::Protein)).unwrap();
/// let features = ProteinSequenceEncoder::default().one_hot_encode(&df).unwrap();
/// println!("Encoded {} chains", features.height());
/// ```
pub fn get_polymer_sequences(
    input_files: &[String],
    exclude_duplicates: bool,
    kind: Option<PolymerKind>,
) -> PolarsResult<DataFrame> {
    let chains = input_files
        .par_iter()
        .flat_map_iter(|input_file| match load_structure(input_file) {
            Ok((pdb, warnings)) => {
                log_pdb_errors(input_file, &warnings);
                structure_to_polymer_chains(&structure_id(input_file), &pdb, exclude_duplicates)
            }
            Err(errors) => {
                error!("Failed to load {input_file}");
                log_pdb_errors(input_file, &errors);
                Vec::new()
            }
        })
        .filter(|c| kind.is_none_or(|k| c.kind == k))
        .collect::<Vec<PolymerChain>>();
    debug!(
        "Collected {} polymer chains from {} file(s)",
        chains.len(),
        input_files.len()
    );

    polymer_chains_to_df(&chains)
}

/// Encode the protein chains of structure files into a feature-vector column.
///
/// Sequences come from the `sequence` column of [`get_polymer_sequences`]. If
/// `output_col` names one of its other columns, that column is replaced by the features.
///
/// # Example
///
/// ```no_run
/// use mmtf_features::{get_polymer_features, EncodingMethod};
///
/// let files = vec!["path/to/4hhb.cif".to_string()];
/// let df = get_polymer_features(&files, true, EncodingMethod::Blosum62, "features").unwrap();
/// println!("Encoded {} chains", df.height());
/// ```
pub fn get_polymer_features(
    input_files: &[String],
    exclude_duplicates: bool,
    method: EncodingMethod,
    output_col: &str,
) -> PolarsResult<DataFrame> {
    let df = get_polymer_sequences(input_files, exclude_duplicates, Some(PolymerKind::Protein))?;
    ProteinSequenceEncoder::new("sequence", output_col).encode(&df, method)
}
