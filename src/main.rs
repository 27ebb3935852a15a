//! Squaredle Solver CLI
//!
//! Command-line front end: reads a word list from disk, solves a grid, and
//! prints the found words, their paths, or a length histogram.

use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use env_logger::Builder;
use log::{info, LevelFilter};
use squaredle_solver::{
    parse_word_list, AdjacencyGraph, CancelToken, DictionaryIndex, OutputMode, Solution, SolveOptions, Solver,
    MIN_WORD_LENGTH,
};

#[derive(Parser, Debug)]
#[command(name = "squaredle", version, about = "Find every word hidden in a Squaredle grid")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every word with all of the paths that spell it
    Solve(SolveArgs),
    /// List the distinct words only
    Words(SolveArgs),
    /// Show how many words of each length the grid holds
    Stats(SolveArgs),
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Row-major grid letters; use a space for a missing tile
    grid: String,

    /// Word list, one word per line
    #[arg(short, long, env = "SQUAREDLE_DICT")]
    dict: PathBuf,

    /// Shortest word to report
    #[arg(short = 'm', long, default_value_t = MIN_WORD_LENGTH)]
    min_length: usize,

    /// Worker threads (defaults to one per core)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Abort the search after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Trips a cancel token once a deadline passes, unless stopped first.
struct Watchdog {
    done: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Watchdog {
    fn start(token: CancelToken, timeout: Duration) -> Self {
        let done = Arc::new(AtomicBool::new(false));
        let done_clone = done.clone();
        let handle = thread::spawn(move || {
            let deadline = Instant::now() + timeout;
            while !done_clone.load(Ordering::Relaxed) {
                if Instant::now() >= deadline {
                    token.cancel();
                    break;
                }
                thread::sleep(Duration::from_millis(10));
            }
        });
        Self {
            done,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.done.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Watchdog {
    fn drop(&mut self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

fn run_solve(args: &SolveArgs, mode: OutputMode) -> anyhow::Result<Solution> {
    let text = std::fs::read_to_string(&args.dict)
        .with_context(|| format!("failed to read word list {}", args.dict.display()))?;
    let words = parse_word_list(&text);
    info!("loaded {} words from {}", words.len(), args.dict.display());

    let graph = AdjacencyGraph::parse(&args.grid).context("failed to parse grid")?;
    let dictionary = DictionaryIndex::new(&words, args.min_length);

    let mut options = SolveOptions::new().with_min_length(args.min_length).with_mode(mode);
    if let Some(threads) = args.threads {
        options = options.with_threads(threads);
    }
    let token = CancelToken::new();
    let watchdog = args.timeout_ms.map(|ms| {
        options.cancel = Some(token.clone());
        Watchdog::start(token.clone(), Duration::from_millis(ms))
    });

    let solver = Solver::new(graph, dictionary, options)?;
    let start = Instant::now();
    let solution = solver.solve()?;
    info!("search finished in {:.2?}", start.elapsed());

    if let Some(watchdog) = watchdog {
        watchdog.stop();
    }
    if !solution.is_complete() {
        eprintln!("Search timed out; results are partial.");
    }
    Ok(solution)
}

fn print_paths(solution: &Solution) {
    for word in solution.words() {
        println!("{}", word.to_uppercase());
        for path in solution.paths(word) {
            let cells: Vec<String> = path.iter().map(|p| p.to_string()).collect();
            println!("  {}", cells.join(" → "));
        }
    }
    println!();
    println!("{} words, {} paths", solution.word_count(), solution.path_count());
}

fn print_words(solution: &Solution) {
    for word in solution.words() {
        println!("{}", word);
    }
}

fn print_stats(solution: &Solution) {
    let distribution = solution.length_distribution();
    let total = solution.word_count();

    println!("Word lengths:");
    println!("{}", "=".repeat(40));
    for (length, count) in &distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {:>2} letters: {:>5} ({:>5.1}%) {}", length, count, pct, bar);
    }
    println!();
    println!("Total words: {}", total);
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Solve(args) => {
            let solution = run_solve(&args, OutputMode::Paths)?;
            if args.json {
                println!("{}", solution.to_json(true)?);
            } else {
                print_paths(&solution);
            }
        }
        Commands::Words(args) => {
            let solution = run_solve(&args, OutputMode::WordsOnly)?;
            if args.json {
                println!("{}", solution.to_json(false)?);
            } else {
                print_words(&solution);
            }
        }
        Commands::Stats(args) => {
            let solution = run_solve(&args, OutputMode::WordsOnly)?;
            if args.json {
                println!("{}", serde_json::to_string(&solution.length_distribution())?);
            } else if solution.word_count() == 0 {
                println!("No words found.");
            } else {
                print_stats(&solution);
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, _) => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
