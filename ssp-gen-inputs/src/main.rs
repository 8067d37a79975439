use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ssp_gen_core::io::{normalize_folder, read_input_file};
use ssp_gen_core::model::generation_input::DEFAULT_MAX_ATTEMPTS;
use ssp_gen_core::{Battery, DEFAULT_SEED, FixtureCatalog, Progress};

/// Generates input files for shortest-superstring solvers.
///
/// Without a subcommand, writes the fixture battery into the output folder.
#[derive(Parser)]
#[command(name = "ssp-gen-inputs", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Folder receiving the generated files.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Seed of the random generator shared by all fixtures.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Consecutive rejected candidates tolerated before a fixture is declared infeasible.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// JSON catalog replacing the built-in battery.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Check that input files follow the count-then-sorted-records format.
    Check {
        /// Files to check.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the built-in battery as JSON (usable with --catalog).
    Catalog,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Check { files }) => check(&files),
        Some(Command::Catalog) => {
            println!("{}", FixtureCatalog::standard().to_json()?);
            Ok(())
        }
        None => generate(&cli),
    }
}

fn generate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match &cli.catalog {
        Some(path) => FixtureCatalog::load(path)?,
        None => FixtureCatalog::standard(),
    };
    let folder = normalize_folder(&cli.output_dir);

    println!("=== SSP input generator (seed {}) ===", cli.seed);
    log::debug!("writing {} fixtures into {}", catalog.len(), folder.display());

    let mut battery = Battery::new(cli.seed).max_attempts(cli.max_attempts);
    let reports = battery.run_with(&catalog, &folder, |progress| match progress {
        Progress::Started { index, fixture } => println!("\n{}. {}", index + 1, fixture),
        Progress::Written { report, .. } => {
            println!("Generated: {} ({} strings)", report.path.display(), report.count)
        }
    })?;

    println!("\n{} files written to {}", reports.len(), folder.display());
    Ok(())
}

fn check(files: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    for path in files {
        let file = read_input_file(path)
            .and_then(|file| file.validate().map(|()| file))
            .map_err(|e| format!("{}: {}", path.display(), e))?;

        match file.length_range() {
            Some((shortest, longest)) => println!(
                "{}: ok, {} strings, length {}..={}",
                path.display(),
                file.len(),
                shortest,
                longest
            ),
            None => println!("{}: ok, empty", path.display()),
        }
    }
    Ok(())
}
