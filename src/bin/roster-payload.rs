//! CLI tool to convert a member roster into batched import payloads.
//!
//! Usage:
//!   roster-payload <roster.txt>
//!   roster-payload <roster.txt> -o <payloads.txt>
//!
//! Payloads go to stdout (or the output file), one per line. Warnings and
//! batch summaries go to stderr. `RUST_LOG` can add other targets but never
//! drops this tool's own diagnostics below info.

use clap::Parser;
use roster_payload::{
    BATCH_SIZE, Batch, RosterError, Skipped, batch_count, build_batches, read_roster,
};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info, warn};

/// Convert a tab-delimited roster into hex import payloads.
///
/// Roster format: address<TAB>YYYY-MM-DD<TAB>weight<TAB>months-on-leave
#[derive(Parser)]
#[command(name = "roster-payload")]
struct Cli {
    /// Roster file (tab-delimited)
    input: PathBuf,

    /// Write payloads to file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Members per payload (1-250)
    #[arg(long, default_value_t = BATCH_SIZE)]
    batch_size: usize,

    /// Show per-member detail on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), RosterError> {
    let parsed = read_roster(&cli.input)?;

    for skipped in &parsed.skipped {
        match skipped {
            Skipped::FieldCount { line, found } => {
                warn!("Skipping line {line} (expected 4 fields, got {found})")
            }
            Skipped::Excluded { line, address } => {
                info!("Skipping org member: {address} (line {line})")
            }
        }
    }

    let batches = build_batches(&parsed.rows, cli.batch_size)?;
    for row in &parsed.rows {
        debug!("line {}: {row}", row.line);
    }

    info!(
        "Processing {} members in {} batch(es) of up to {} members each",
        parsed.rows.len(),
        batch_count(parsed.rows.len(), cli.batch_size),
        cli.batch_size
    );

    let mut output = String::new();
    for (i, batch) in batches.iter().enumerate() {
        output.push_str(&batch.payload());
        output.push('\n');
        report_batch(i + 1, batch);
    }

    match &cli.output {
        Some(path) => write_file(path, &output),
        None => io::stdout()
            .write_all(output.as_bytes())
            .map_err(|source| RosterError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}

fn report_batch(index: usize, batch: &Batch) {
    info!(
        "Batch {index}: {} members, {} characters",
        batch.len(),
        batch.payload_len()
    );
}

fn write_file(path: &Path, contents: &str) -> Result<(), RosterError> {
    let write_err = |source| RosterError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)
}

/// Diagnostics go to stderr. Exclusion notices and batch summaries are
/// part of the output contract, so this crate's target stays at info or
/// lower whatever `RUST_LOG` says.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let level = if verbose { "debug" } else { "info" };
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    if let Ok(own) = format!("{}={level}", env!("CARGO_CRATE_NAME")).parse() {
        filter = filter.add_directive(own);
    }

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
