use clap::Parser;
use std::path::PathBuf;

use fstprep::io::pairs_file::write_pairs_file;
use fstprep::io::population::{default_populations, load_population_csv};

/// Generates the list of pairwise population combinations consumed by the
/// downstream Fst analysis.
#[derive(Parser)]
struct Args {
    #[arg(
        short,
        long,
        default_value = "input.file",
        help = "Output file (overwritten if present)"
    )]
    output: PathBuf,

    #[arg(
        short,
        long,
        help = "CSV file with a `population` column; defaults to the built-in panel"
    )]
    populations: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let populations = match &args.populations {
        Some(path) => load_population_csv(path)?,
        None => default_populations(),
    };

    let count = write_pairs_file(&args.output, &populations)?;

    println!(
        "Successfully generated '{}' with {} pairs.",
        args.output.display(),
        count
    );

    Ok(())
}
