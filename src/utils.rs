use pdbtbx::*;
use polars::prelude::*;
use std::path::Path;
use tracing::{error, warn};

/// Run `f` inside a rayon thread pool with `num_threads` workers.
///
/// `0` lets rayon pick the number of threads, which is one per logical core.
pub fn run_with_threads<T, F>(num_threads: usize, f: F) -> Result<T, rayon::ThreadPoolBuildError>
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()?;
    Ok(pool.install(f))
}

/// Open an atomic data file with [`pdbtbx::ReadOptions`].
///
/// Unlike a plain [`pdbtbx::open`], all residues are kept, including waters, ligands
/// and nucleotides, so that chains can be classified afterwards.
pub fn load_structure(input_file: &str) -> Result<(PDB, Vec<PDBError>), Vec<PDBError>> {
    pdbtbx::ReadOptions::default()
        .set_only_atomic_coords(true)
        .set_level(pdbtbx::StrictnessLevel::Loose)
        .read(input_file)
}

/// Identifier for a structure file: its upper-cased file stem, e.g. `1stp.cif` -> `1STP`.
pub fn structure_id(input_file: &str) -> String {
    Path::new(input_file)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}

/// Log parser warnings at a level matching their severity.
pub fn log_pdb_errors(input_file: &str, errors: &[PDBError]) {
    for e in errors {
        match e.level() {
            pdbtbx::ErrorLevel::BreakingError => error!("{input_file}: {e}"),
            pdbtbx::ErrorLevel::InvalidatingError => error!("{input_file}: {e}"),
            _ => warn!("{input_file}: {e}"),
        }
    }
}

/// Write a DataFrame to disk in the given format.
///
/// Feature vectors are list columns, so only formats that can hold nested data are offered.
pub fn write_df_to_file(
    df: &mut DataFrame,
    file_path: &Path,
    file_type: DataFrameFileType,
) -> PolarsResult<()> {
    let mut file = std::fs::File::create(file_path)?;
    match file_type {
        DataFrameFileType::Parquet => {
            ParquetWriter::new(&mut file).finish(df)?;
        }
        DataFrameFileType::Json => {
            JsonWriter::new(&mut file)
                .with_json_format(JsonFormat::Json)
                .finish(df)?;
        }
        DataFrameFileType::NDJson => {
            JsonWriter::new(&mut file)
                .with_json_format(JsonFormat::JsonLines)
                .finish(df)?;
        }
    }
    Ok(())
}

/// File format for writing DataFrames.
#[derive(clap::ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum DataFrameFileType {
    /// Parquet columnar storage
    Parquet,
    /// Standard JSON
    Json,
    /// Newline-delimited JSON
    #[value(name = "ndjson")]
    NDJson,
}

impl std::fmt::Display for DataFrameFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DataFrameFileType::Parquet => write!(f, "parquet"),
            DataFrameFileType::Json => write!(f, "json"),
            DataFrameFileType::NDJson => write!(f, "ndjson"),
        }
    }
}
