//! Sort trace command-line front end.
//!
//! Provides the `sortrace` binary:
//! - `list` prints the supported algorithms and their characteristics.
//! - `trace` runs one algorithm over the given values and prints every
//!   step, or the whole trace as JSON.
//! - `bench` runs a benchmark session and prints summaries and insights.
//!
//! The engine trusts its caller, so input validation happens here.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use sortrace_bench::{ArrayKind, BenchConfig, BenchmarkStore, MAX_INPUT_LEN};
use sortrace_core::{engine, Algorithm, Step};

/// Largest input `trace` accepts by default.
const DEFAULT_MAX_LEN: usize = MAX_INPUT_LEN;
/// Largest magnitude `trace` accepts.
const MAX_MAGNITUDE: f64 = 1e9;

/// Step-by-step sorting algorithm traces.
#[derive(Parser)]
#[command(name = "sortrace", about = "Step-by-step sorting algorithm traces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List supported algorithms.
    List,

    /// Trace one algorithm over a list of numbers.
    Trace {
        /// Algorithm key (bubble, selection, insertion, quick, merge, heap,
        /// shell, counting, radix, bucket, tim).
        algorithm: String,

        /// Values to sort, separated by spaces or commas.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,

        /// Print the full trace as JSON instead of narrated steps.
        #[arg(long)]
        json: bool,

        /// Maximum number of values accepted.
        #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
        max_len: usize,
    },

    /// Benchmark algorithms over generated inputs.
    Bench {
        /// Comma-separated algorithm keys (default: all).
        #[arg(short, long, value_delimiter = ',')]
        algorithms: Vec<String>,

        /// Comma-separated input sizes, at most 100 each (default: SORTRACE_SIZES or 10,25,50,100).
        #[arg(short, long, value_delimiter = ',')]
        sizes: Vec<usize>,

        /// Comma-separated input shapes: random, sorted, reverse, nearly_sorted.
        #[arg(short, long, value_delimiter = ',')]
        kinds: Vec<String>,

        /// Generator seed (default: SORTRACE_SEED or 42).
        #[arg(long)]
        seed: Option<u64>,

        /// Write all results as JSON to this file.
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::List => run_list(),
        Commands::Trace {
            algorithm,
            values,
            json,
            max_len,
        } => run_trace(&algorithm, &values, json, max_len),
        Commands::Bench {
            algorithms,
            sizes,
            kinds,
            seed,
            export,
        } => run_bench(&algorithms, sizes, &kinds, seed, export),
    };
    process::exit(exit_code);
}

fn run_list() -> i32 {
    println!(
        "{:<10} {:<15} {:<11} {:<11} {:<15} {:<9} stable",
        "key", "name", "best", "average", "worst", "space"
    );
    for algorithm in Algorithm::ALL {
        let info = algorithm.info();
        println!(
            "{:<10} {:<15} {:<11} {:<11} {:<15} {:<9} {}",
            algorithm.key(),
            info.name,
            info.best,
            info.average,
            info.worst,
            info.space,
            if info.stable { "yes" } else { "no" }
        );
    }
    0
}

/// Execute the trace subcommand.
///
/// Returns exit code: 0 = success, 1 = invalid arguments.
fn run_trace(key: &str, raw_values: &[String], json: bool, max_len: usize) -> i32 {
    let algorithm: Algorithm = match key.parse() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let values = match parse_values(raw_values).and_then(|v| validate(algorithm, v, max_len)) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };

    let trace = engine::run(algorithm, &values);

    if json {
        let out = serde_json::to_string_pretty(&trace).unwrap_or_else(|e| {
            format!("{{\"error\": \"failed to serialize trace: {}\"}}", e)
        });
        println!("{}", out);
        return 0;
    }

    for (index, step) in trace.steps.iter().enumerate() {
        println!("{:>4}  {}", index, render_step(step));
    }
    println!(
        "{}: {} steps, {} comparisons, {} swaps",
        algorithm.name(),
        trace.len(),
        trace.comparisons,
        trace.swaps
    );
    0
}

/// Execute the bench subcommand.
///
/// Returns exit code: 0 = success, 1 = invalid arguments, 3 = I/O error.
fn run_bench(
    algorithm_keys: &[String],
    sizes: Vec<usize>,
    kind_keys: &[String],
    seed: Option<u64>,
    export: Option<PathBuf>,
) -> i32 {
    let mut config = match BenchConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if !algorithm_keys.is_empty() {
        match algorithm_keys.iter().map(|k| k.parse::<Algorithm>()).collect::<Result<Vec<_>, _>>() {
            Ok(algorithms) => config.algorithms = algorithms,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    }
    if !kind_keys.is_empty() {
        match kind_keys.iter().map(|k| k.parse::<ArrayKind>()).collect::<Result<Vec<_>, _>>() {
            Ok(kinds) => config.kinds = kinds,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    }
    if !sizes.is_empty() {
        config.sizes = sizes;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Err(msg) = check_session(&config) {
        eprintln!("Error: {}", msg);
        return 1;
    }

    tracing::info!(
        algorithms = config.algorithms.len(),
        sizes = ?config.sizes,
        seed = config.seed,
        "starting benchmark session"
    );
    let mut store = BenchmarkStore::from_config(&config);
    let comparisons = store.run_config(&config);

    for comparison in &comparisons {
        let winner = comparison.winner.map_or("-", Algorithm::key);
        println!(
            "n={:<4} {:<14} winner: {}",
            comparison.array_size,
            comparison.array_kind.key(),
            winner
        );
    }

    println!();
    println!(
        "{:<10} {:>6} {:>10} {:>10} {:>10} {:>12} {:>10}",
        "algorithm", "runs", "avg ms", "min ms", "max ms", "avg compares", "avg swaps"
    );
    for summary in store.summaries() {
        println!(
            "{:<10} {:>6} {:>10.4} {:>10.4} {:>10.4} {:>12.1} {:>10.1}",
            summary.algorithm.key(),
            summary.total_runs,
            summary.average_time_ms,
            summary.min_time_ms,
            summary.max_time_ms,
            summary.average_comparisons,
            summary.average_swaps
        );
    }

    let insights = store.insights();
    println!();
    println!("fastest: {}", insights.fastest.key());
    println!("most efficient: {}", insights.most_efficient.key());
    println!("recommended for small inputs: {}", insights.recommended_small.key());
    println!("recommended for large inputs: {}", insights.recommended_large.key());
    for note in &insights.notes {
        println!("- {}", note);
    }

    if let Some(path) = export {
        let json = match store.export_json() {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 3;
            }
        };
        if let Err(e) = fs::write(&path, json) {
            eprintln!("Error: failed to write '{}': {}", path.display(), e);
            return 3;
        }
        tracing::info!(path = %path.display(), results = store.results().len(), "results exported");
    }

    0
}

/// Rejects sessions the generator cannot serve or whose traces would not
/// fit in memory.
fn check_session(config: &BenchConfig) -> Result<(), String> {
    config.validate().map_err(|e| e.to_string())?;
    if config.kinds.contains(&ArrayKind::Custom) {
        return Err("'custom' inputs cannot be generated".to_string());
    }
    Ok(())
}

/// Splits arguments on commas and whitespace and parses each number.
fn parse_values(raw: &[String]) -> Result<Vec<f64>, String> {
    raw.iter()
        .flat_map(|arg| arg.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", part))
        })
        .collect()
}

/// Enforces the engine's input preconditions for `algorithm`.
fn validate(algorithm: Algorithm, values: Vec<f64>, max_len: usize) -> Result<Vec<f64>, String> {
    if values.len() > max_len {
        return Err(format!(
            "{} values given, at most {} are allowed",
            values.len(),
            max_len
        ));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite() || v.abs() > MAX_MAGNITUDE) {
        return Err(format!("{} is outside the supported range", bad));
    }

    match algorithm {
        Algorithm::Counting => {
            if let Some(bad) = values.iter().find(|v| v.fract() != 0.0) {
                return Err(format!("counting sort needs integers, got {}", bad));
            }
            let (lo, hi) = values
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
            if !values.is_empty() && hi - lo > 1e6 {
                return Err(format!(
                    "counting sort range {}..{} is too wide for a count table",
                    lo, hi
                ));
            }
        }
        Algorithm::Radix => {
            if let Some(bad) = values.iter().find(|v| v.fract() != 0.0 || **v < 0.0) {
                return Err(format!("radix sort needs non-negative integers, got {}", bad));
            }
        }
        _ => {}
    }

    Ok(values)
}

/// One-line rendering of a step: narration, then the array with role
/// markers (`<x>` comparing, `*x*` swapping, `[x]` pivot, `x.` sorted).
fn render_step(step: &Step) -> String {
    let roles = &step.roles;
    let has = |set: &Option<Vec<usize>>, i: usize| set.as_ref().is_some_and(|s| s.contains(&i));

    let cells: Vec<String> = step
        .array
        .iter()
        .enumerate()
        .map(|(i, value)| {
            if roles.pivot == Some(i) {
                format!("[{}]", value)
            } else if has(&roles.swapping, i) {
                format!("*{}*", value)
            } else if has(&roles.comparing, i) {
                format!("<{}>", value)
            } else if has(&roles.sorted, i) {
                format!("{}.", value)
            } else {
                value.to_string()
            }
        })
        .collect();

    format!("{:<60} | {}", step.description, cells.join(" "))
}
