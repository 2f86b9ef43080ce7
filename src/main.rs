//! Leadscore CLI: grade scan-input files from the terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use leadscore::analyzer::spend::IndustrySpendTable;
use leadscore::analyzer::{AggregateStats, Grader, ScanEngine, ScanResult};
use leadscore::config::{load_config, CONFIG_FILENAME};
use leadscore::reporter::{ConsoleReporter, JsonReporter};
use leadscore::signals::ScanInput;
use leadscore::store;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// Leadscore: lead-conversion grader for business websites
#[derive(Parser, Debug)]
#[command(name = "leadscore")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scan-input JSON file or directory of them (omit when using a subcommand)
    path: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum overall score threshold (exit 1 if any scan is below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (one line per scan)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (per-finding detail)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .leadscorerc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grade inputs in parallel
    #[arg(long)]
    parallel: bool,

    /// Skip persisting reports to the local store
    #[arg(long)]
    no_store: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default .leadscorerc.json in the current directory
    Init,
    /// Print a stored report by ID
    Report {
        id: String,
        /// Output format as JSON
        #[arg(long, short)]
        json: bool,
    },
    /// Internal stats view over stored reports (requires the shared secret)
    Stats {
        /// Shared secret; must match LEADSCORE_STATS_KEY
        #[arg(long)]
        key: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let outcome = match &args.command {
        Some(Commands::Init) => run_init(),
        Some(Commands::Report { id, json }) => run_report(id, *json),
        Some(Commands::Stats { key }) => run_stats(key),
        None => run_scan(&args),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(2)
        }
    }
}

fn run_init() -> Result<ExitCode> {
    let path = Path::new(CONFIG_FILENAME);
    if path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILENAME);
    }
    fs::write(path, leadscore::config::default_config_contents())
        .with_context(|| format!("Failed to write {}", CONFIG_FILENAME))?;
    println!("Created {}", CONFIG_FILENAME);
    Ok(ExitCode::SUCCESS)
}

fn run_report(id: &str, json: bool) -> Result<ExitCode> {
    let store = store::load_store(Path::new("."));
    let record = store::find_report(&store, id)
        .with_context(|| format!("No stored report with ID {} (reports expire after 30 days)", id))?;
    if json {
        println!("{}", JsonReporter::new().pretty().report(&record.scan, Some(&record.id)));
    } else {
        ConsoleReporter::new().report(&record.scan, Some(&record.id));
    }
    Ok(ExitCode::SUCCESS)
}

fn run_stats(key: &str) -> Result<ExitCode> {
    let expected =
        std::env::var("LEADSCORE_STATS_KEY").context("LEADSCORE_STATS_KEY is not set")?;
    if key != expected {
        anyhow::bail!("Invalid stats key");
    }
    let store = store::load_store(Path::new("."));
    let stats = store::store_stats(&store);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(ExitCode::SUCCESS)
}

fn run_scan(args: &Args) -> Result<ExitCode> {
    let path = args
        .path
        .as_ref()
        .context("Missing scan input path (see --help)")?;
    let work_dir = std::env::current_dir().context("Cannot determine working directory")?;
    let config = load_config(&work_dir, args.config.as_deref())?;

    let grader = Grader::new(config.effective_weights())
        .with_industry_spend(IndustrySpendTable::with_overrides(&config.industry_spend));
    let engine = ScanEngine::new(grader);

    let inputs = collect_inputs(path)?;
    if inputs.is_empty() {
        anyhow::bail!("No scan-input JSON files found under {}", path.display());
    }

    let results: Result<Vec<ScanResult>> = if args.parallel {
        inputs.par_iter().map(|p| grade_file(&engine, p)).collect()
    } else {
        inputs.iter().map(|p| grade_file(&engine, p)).collect()
    };
    let results = results?;

    let report_ids = if args.no_store {
        vec![None; results.len()]
    } else {
        persist(&work_dir, &results)?
    };

    let stats = AggregateStats::from_results(&results);
    print_results(args, &results, &report_ids, &stats);

    let threshold = args.threshold.or(config.threshold).unwrap_or(0);
    let below = results.iter().any(|r| r.report.overall_score < threshold);
    Ok(if below { ExitCode::from(1) } else { ExitCode::SUCCESS })
}

/// A file is graded directly; a directory is walked for .json inputs,
/// sorted for deterministic batch order. Config and store files are not
/// scan inputs.
fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        anyhow::bail!("No such file or directory: {}", path.display());
    }
    let mut inputs: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| {
            p.extension().is_some_and(|ext| ext == "json")
                && p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| !n.starts_with('.'))
        })
        .collect();
    inputs.sort();
    Ok(inputs)
}

fn grade_file(engine: &ScanEngine, path: &Path) -> Result<ScanResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scan input: {}", path.display()))?;
    let input: ScanInput = serde_json::from_str(&content)
        .with_context(|| format!("Invalid scan input JSON: {}", path.display()))?;
    Ok(engine.run(&input))
}

fn persist(work_dir: &Path, results: &[ScanResult]) -> Result<Vec<Option<String>>> {
    let mut report_store = store::load_store(work_dir);
    let ids = results
        .iter()
        .map(|result| Some(store::insert_report(&mut report_store, result.clone())))
        .collect();
    store::save_store(work_dir, &report_store).context("Failed to save report store")?;
    Ok(ids)
}

fn print_results(
    args: &Args,
    results: &[ScanResult],
    report_ids: &[Option<String>],
    stats: &AggregateStats,
) {
    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0], report_ids[0].as_deref()));
        } else {
            println!("{}", reporter.report_many(results, stats));
        }
        return;
    }

    let reporter = if args.verbose {
        ConsoleReporter::new().verbose()
    } else {
        ConsoleReporter::new()
    };
    if args.quiet {
        for result in results {
            reporter.report_quiet(result);
        }
    } else if results.len() == 1 {
        reporter.report(&results[0], report_ids[0].as_deref());
    } else {
        reporter.report_many(results, stats);
    }
}
