use clap::Parser;
use mmtf_features::{
    get_polymer_features, run_with_threads, write_df_to_file, DataFrameFileType,
    EncodingMethod,
};
use std::path::PathBuf;
use tracing::{debug, error, info, trace, warn};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Path to the PDB or mmCIF files to be encoded
    #[arg(short, long, num_args = 1.., required = true)]
    input: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Name of the output file
    #[arg(short = 'f', long = "filename", default_value_t = String::from("features"))]
    filename: String,

    /// Output file type
    #[arg(short = 't', long, default_value_t = DataFrameFileType::Parquet)]
    output_format: DataFrameFileType,

    /// Feature encoding applied to each protein sequence
    #[arg(short, long, default_value_t = EncodingMethod::OneHot)]
    method: EncodingMethod,

    /// Name of the column the feature vectors are written to
    #[arg(long = "output-col", default_value_t = String::from("features"))]
    output_col: String,

    /// Only encode the first chain of each distinct sequence per structure
    #[arg(long = "exclude-duplicates", default_value_t = false)]
    exclude_duplicates: bool,

    /// Number of threads to use for parallel processing, 0 for all cores
    #[arg(short = 'j', long = "num-threads", default_value_t = 0)]
    num_threads: usize,
}

pub(crate) fn run(args: &Args) {
    trace!("{args:?}");

    let output_path = match std::path::absolute(&args.output) {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to resolve the output directory: {}", e);
            return;
        }
    };
    let input_files = args
        .input
        .iter()
        .map(|f| f.to_string_lossy().to_string())
        .collect::<Vec<String>>();

    let result = run_with_threads(args.num_threads, || {
        debug!("Using {} thread(s)", rayon::current_num_threads());
        get_polymer_features(
            &input_files,
            args.exclude_duplicates,
            args.method,
            &args.output_col,
        )
    });
    let mut df_features = match result {
        Ok(Ok(df)) => df,
        Ok(Err(e)) => {
            error!("Failed to encode sequences: {e}");
            return;
        }
        Err(e) => {
            error!("Failed to build the thread pool: {e}");
            return;
        }
    };

    if df_features.height() == 0 {
        warn!("No protein chains found in the input files");
    }
    info!(
        "Encoded {} protein chain(s) with {} encoding\n{}",
        df_features.height(),
        args.method,
        df_features
    );

    // Prepare output directory
    let _ = std::fs::create_dir_all(&output_path);
    let output_file = output_path
        .join(args.filename.clone())
        .with_extension(args.output_format.to_string());

    match write_df_to_file(&mut df_features, &output_file, args.output_format) {
        Ok(()) => info!("Results saved to {}", output_file.display()),
        Err(e) => error!("Failed to write {}: {e}", output_file.display()),
    }
}
