//! CLI tool to generate a random member roster.
//!
//! Usage:
//!   roster-gen [count] [output]
//!   roster-gen 1000 test_data/large.txt --seed 42

use chrono::Local;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use roster_gen::{DEFAULT_COUNT, DEFAULT_OUTPUT, GenError, RosterStats, generate_members, write_roster};
use std::path::PathBuf;
use std::process;
use tracing::debug;

/// Generate a random tab-delimited member roster.
///
/// 60% of members join within the last 60 months, 90% are full-time, and
/// 10% have 1-9 months on leave. Rows are sorted by join date.
#[derive(Parser)]
#[command(name = "roster-gen")]
struct Cli {
    /// Number of members to generate
    #[arg(default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Output roster file
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed for a reproducible roster
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), GenError> {
    if cli.count == 0 {
        return Err(GenError::EmptyRoster);
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    debug!("seed {seed}");

    let today = Local::now().date_naive();
    let mut rng = StdRng::seed_from_u64(seed);
    let members = generate_members(&mut rng, cli.count, today);
    write_roster(&cli.output, &members)?;

    println!("Generated {} test members:", cli.count);
    println!("  Output: {}", cli.output.display());
    println!();
    print!("{}", RosterStats::from_members(&members, today));
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
