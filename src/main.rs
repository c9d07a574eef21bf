mod cli;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity of the program:
    /// -v for info, -vv for debug, and -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode the protein chains of structure files into feature vectors
    Encode(cli::encode::Args),

    /// Print the polymer chain sequences of structure files
    Seq(cli::seq::Args),
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Encode(args) => cli::encode::run(args),
        Commands::Seq(args) => cli::seq::run(args),
    }
}
