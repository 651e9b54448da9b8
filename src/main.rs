use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use sortscope::observer::Observer;
use sortscope::observer::Printer;
use sortscope::observer::Silent;
use sortscope::permutation;
use sortscope::primitives::{LessThan, SimpleAssigner, SimpleSwapper, Tally};
use sortscope::registry::{self, Algorithm};
use sortscope::Sorter;
use sortscope::sort::DEFAULT_SEQUENTIAL_CUTOFF;

#[derive(Parser)]
#[command(
    name = "sortscope",
    about = "Sort a random permutation and report how many primitive operations it took",
    version
)]
struct Cli {
    /// Number of elements per list.
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// Sorting algorithm to use. If none specified, runs every algorithm silently.
    #[arg(long)]
    algorithm: Option<String>,

    /// Seed for the permutation. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Range length at or below which parallel_merge stops forking.
    #[arg(long, default_value_t = DEFAULT_SEQUENTIAL_CUTOFF)]
    cutoff: usize,

    /// Print one JSON report per run instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    algorithm: &'static str,
    size: usize,
    seed: u64,
    #[serde(flatten)]
    tally: Tally,
}

fn run(cli: &Cli, algorithm: Algorithm, seed: u64, observer: &dyn Observer) {
    if !cli.json {
        println!("Running {} sorter with list of size {}", algorithm, cli.size);
    }

    let mut list = permutation::seeded(cli.size, seed);
    let comparator = LessThan::new();
    let assigner = SimpleAssigner::new();
    let swapper = SimpleSwapper::new();

    registry::build_with_cutoff(algorithm, cli.cutoff, &comparator, &assigner, &swapper, observer)
        .sort(&mut list);

    let tally = Tally::read(&comparator, &assigner, &swapper);
    tracing::debug!(%algorithm, total = tally.total(), "sort finished");

    if cli.json {
        let report = Report { algorithm: algorithm.name(), size: cli.size, seed, tally };
        match serde_json::to_string(&report) {
            Ok(line) => println!("{}", line),
            Err(err) => tracing::error!(%err, "failed to encode report"),
        }
        return;
    }

    println!("Swap.Count    {}", tally.swaps);
    println!("Assign.Count  {}", tally.assignments);
    println!("Compare.Count {}", tally.comparisons);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sortscope=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, size = cli.size, "generating permutation");

    match cli.algorithm.as_deref() {
        None => {
            for algorithm in Algorithm::ALL {
                run(&cli, algorithm, seed, &Silent);
            }
        }
        Some(name) => match name.parse::<Algorithm>() {
            Ok(algorithm) if cli.json => run(&cli, algorithm, seed, &Silent),
            Ok(algorithm) => run(&cli, algorithm, seed, &Printer::stdout()),
            Err(err) => println!("{}", err),
        },
    }
}
