//! Command-line solver for the Cephalopods puzzle.
//!
//! Reads the search depth and the nine initial cell values from standard
//! input, runs the search, and prints the final score.
//!
//! # Usage
//!
//! ```sh
//! printf '20\n0 6 0\n2 2 2\n1 6 1\n' | cephalopods
//! ```
//!
//! Select the aggregation strategy and enable symmetry reduction:
//!
//! ```sh
//! cephalopods --strategy sort-merge --symmetry < puzzle.txt
//! ```
//!
//! Print per-layer statistics to standard error:
//!
//! ```sh
//! cephalopods --parallel --stats < puzzle.txt
//! ```

use std::{
    io::{self, Read, Write},
    process,
};

use cephalopods_search::{AggregationStrategy, InputError, Puzzle, SearchConfig, SearchError};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    HashTable,
    SortMerge,
}

impl From<StrategyKind> for AggregationStrategy {
    fn from(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::HashTable => Self::HashTable,
            StrategyKind::SortMerge => Self::SortMerge,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// How successor boards are merged within each layer.
    #[arg(long, value_name = "STRATEGY", default_value = "hash-table")]
    strategy: StrategyKind,

    /// Store one canonical board per symmetry orbit.
    #[arg(long)]
    symmetry: bool,

    /// Expand each layer on all available threads.
    #[arg(long)]
    parallel: bool,

    /// Fail if a layer holds more than this many distinct boards.
    #[arg(long, value_name = "COUNT")]
    max_frontier: Option<usize>,

    /// Print per-layer statistics to standard error.
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    #[display("invalid input: {_0}")]
    Input(#[from] InputError),
    #[display("search failed: {_0}")]
    Search(#[from] SearchError),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Reads a puzzle from `input` and writes its score to `output`.
///
/// Nothing is written to `output` unless the search succeeds.
fn run(args: &Args, mut input: impl Read, mut output: impl Write) -> Result<(), CliError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let puzzle: Puzzle = text.parse()?;

    let config = SearchConfig::default()
        .with_strategy(args.strategy.into())
        .with_symmetry(args.symmetry)
        .with_parallel(args.parallel)
        .with_max_frontier(args.max_frontier);
    log::debug!("{config:?}");

    let outcome = puzzle.solve(&config)?;
    if args.stats {
        eprintln!("{}", outcome.stats);
    }

    writeln!(output, "{}", outcome.score)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    const SAMPLE: &str = "20\n0 6 0\n2 2 2\n1 6 1\n";

    fn run_with(flags: &[&str], input: &str) -> (Result<(), CliError>, String) {
        let args = Args::parse_from(std::iter::once("cephalopods").chain(flags.iter().copied()));
        let mut output = Vec::new();
        let result = run(&args, input.as_bytes(), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_prints_single_score_line() {
        let (result, output) = run_with(&[], SAMPLE);
        assert!(result.is_ok());
        assert_eq!(output, "322444322\n");
    }

    #[test]
    fn test_options_do_not_change_output() {
        let flags = ["--strategy", "sort-merge", "--symmetry", "--parallel", "--max-frontier", "1000"];
        let (result, output) = run_with(&flags, SAMPLE);
        assert!(result.is_ok());
        assert_eq!(output, "322444322\n");
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        for input in ["", "20\n0 6 0\n2 2 2\n1 6", "20 0 6 0 2 2 2 1 6 7", "-1 0 0 0 0 0 0 0 0 0"] {
            let (result, output) = run_with(&[], input);
            assert!(matches!(result, Err(CliError::Input(_))), "{input:?}: {result:?}");
            assert!(output.is_empty());
        }
    }

    #[test]
    fn test_search_failure_writes_nothing() {
        let (result, output) = run_with(&["--max-frontier", "5"], "3 0 0 0 0 0 0 0 0 0");
        assert!(matches!(result, Err(CliError::Search(SearchError::FrontierLimit { .. }))));
        assert!(output.is_empty());
    }

    #[test]
    fn test_error_message_is_one_line() {
        let (result, _) = run_with(&[], "x");
        let message = result.unwrap_err().to_string();
        assert_eq!(message, "invalid input: expected an integer, found \"x\"");
        assert!(!message.contains('\n'));
    }
}
