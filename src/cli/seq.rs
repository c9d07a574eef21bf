use clap::Parser;
use mmtf_features::{load_structure, log_pdb_errors, structure_id, structure_to_polymer_chains};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Path to the PDB or mmCIF files to be read
    input: Vec<PathBuf>,

    /// Only print the first chain of each distinct sequence per structure
    #[arg(long = "exclude-duplicates", default_value_t = false)]
    exclude_duplicates: bool,
}

pub(crate) fn run(args: &Args) {
    for f in &args.input {
        let input_file = f.to_string_lossy();

        let (pdb, warnings) = match load_structure(&input_file) {
            Ok(res) => res,
            Err(errors) => {
                error!("Failed to load {input_file}");
                log_pdb_errors(&input_file, &errors);
                continue;
            }
        };
        log_pdb_errors(&input_file, &warnings);

        let chains =
            structure_to_polymer_chains(&structure_id(&input_file), &pdb, args.exclude_duplicates);
        for chain in chains {
            println!(">{} {}\n{}", chain.key, chain.kind, chain.sequence);
        }
    }
}
