//! Command-line front end for the ossim simulators.
//!
//! This binary collects a problem instance from its arguments, runs one engine, and prints
//! the result. It provides:
//! 1. **Round-Robin:** `ossim rr --process 0:5 --process 1:3 --quantum 2`
//! 2. **LRU:** `ossim lru --pages "1, 2, 3, 1, 4, 5" --capacity 3`
//!
//! Either result can be printed as a text report (default) or as JSON (`--json`).
//! Missing quantum/capacity values come from `--config <file.json>` or built-in defaults.

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use ossim_core::config::Config;
use ossim_core::input::{self, CacheInput, Page, SchedulerInput};
use ossim_core::report::{CACHE_SECTIONS, CacheReport, SCHEDULE_SECTIONS, ScheduleReport};
use ossim_core::stats::{CacheStats, ScheduleStats};
use ossim_core::{CacheResult, ScheduleResult};

#[derive(Parser, Debug)]
#[command(
    name = "ossim",
    version,
    about = "Step-by-step Round-Robin scheduling and LRU page-replacement simulator",
    long_about = "Computes the trace and summary statistics for a small scheduling or \
                  page-replacement problem.\n\nExamples:\n  ossim rr -p 0:5 -p 1:3 -q 2\n  \
                  ossim lru --pages \"1, 2, 3, 1, 4, 5\" -c 3\n  ossim --config run.json lru --pages 7,0,1,2 --json"
)]
struct Cli {
    /// JSON file supplying the default quantum and capacity.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Round-Robin CPU scheduling.
    Rr {
        /// Process as ARRIVAL:BURST; repeat in input order (ids are assigned 1, 2, ...).
        #[arg(short, long = "process", value_name = "ARRIVAL:BURST", required = true)]
        processes: Vec<String>,

        /// Time quantum (defaults to the configured value).
        #[arg(short, long, allow_hyphen_values = true)]
        quantum: Option<String>,

        /// Print JSON instead of a text report.
        #[arg(long)]
        json: bool,

        /// Report sections to print (processes, gantt, summary); default all.
        #[arg(long, value_delimiter = ',')]
        sections: Vec<String>,
    },

    /// LRU page replacement.
    Lru {
        /// Comma-separated page references, e.g. "1, 2, 3, 1".
        #[arg(short, long, allow_hyphen_values = true)]
        pages: String,

        /// Number of page frames (defaults to the configured value).
        #[arg(short, long, allow_hyphen_values = true)]
        capacity: Option<String>,

        /// Print JSON instead of a text report.
        #[arg(long)]
        json: bool,

        /// Report sections to print (summary, steps); default all.
        #[arg(long, value_delimiter = ',')]
        sections: Vec<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleOutput<'a> {
    quantum: u64,
    result: &'a ScheduleResult,
    stats: ScheduleStats,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CacheOutput<'a> {
    capacity: usize,
    result: &'a CacheResult<Page>,
    stats: CacheStats,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, or by `-v` when unset.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Rr {
            processes,
            quantum,
            json,
            sections,
        } => cmd_rr(&config, &processes, quantum.as_deref(), json, &sections),
        Commands::Lru {
            pages,
            capacity,
            json,
            sections,
        } => cmd_lru(&config, &pages, capacity.as_deref(), json, &sections),
    }
}

/// Validates the process list and quantum, runs Round-Robin, and prints the result.
fn cmd_rr(
    config: &Config,
    processes: &[String],
    quantum: Option<&str>,
    json: bool,
    sections: &[String],
) -> Result<(), Box<dyn Error>> {
    check_sections(sections, SCHEDULE_SECTIONS)?;
    let table = input::parse_processes(processes)?;
    let quantum = input::quantum_or_default(quantum, &config.scheduler)?;
    let sim_input = SchedulerInput::new(table, quantum)?;
    let result = sim_input.run();

    if json {
        let out = ScheduleOutput {
            quantum: quantum.get(),
            result: &result,
            stats: ScheduleStats::from_result(&result),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Time quantum: {quantum}");
        print!("{}", ScheduleReport::new(&result).sections(sections));
    }
    Ok(())
}

/// Validates the reference string and capacity, runs LRU, and prints the result.
fn cmd_lru(
    config: &Config,
    pages: &str,
    capacity: Option<&str>,
    json: bool,
    sections: &[String],
) -> Result<(), Box<dyn Error>> {
    check_sections(sections, CACHE_SECTIONS)?;
    let capacity = input::capacity_or_default(capacity, &config.cache)?;
    let pages = input::parse_pages(pages)?;
    let sim_input = CacheInput::new(capacity, pages)?;
    let result = sim_input.run();

    if json {
        let out = CacheOutput {
            capacity,
            result: &result,
            stats: CacheStats::from_result(&result),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Capacity: {capacity}");
        print!("{}", CacheReport::new(&result).sections(sections));
    }
    Ok(())
}

fn check_sections(requested: &[String], known: &[&str]) -> Result<(), Box<dyn Error>> {
    if let Some(bad) = requested.iter().find(|s| !known.contains(&s.as_str())) {
        return Err(format!("unknown section {bad:?} (expected one of: {})", known.join(", ")).into());
    }
    Ok(())
}
