//! Search command — find words and phrases in a page or saved snapshot.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use seoscope_core::{ContentAnalysis, FrequencyEntry, TextAnalyzer, search_with_limit};

use super::analyze::{analyze_file, print_entries};
use super::read_input_file;

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Page text to analyze, or a `.json` snapshot saved by `analyze --json`.
    pub file: Utf8PathBuf,

    /// Word or phrase fragment to look for (case-insensitive).
    pub term: String,

    /// Maximum number of hits (overrides config).
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct SearchReport<'a> {
    term: &'a str,
    hits: Vec<FrequencyEntry>,
}

/// Load a snapshot from JSON. Missing fields default to zero or empty.
pub fn load_snapshot(path: &Utf8Path, max_input: Option<usize>) -> anyhow::Result<ContentAnalysis> {
    let content = read_input_file(path, max_input)?;
    serde_json::from_str(&content).with_context(|| format!("{path} is not a valid snapshot"))
}

fn is_snapshot(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Search a page (analyzed on the fly) or a saved snapshot.
#[instrument(name = "cmd_search", skip_all, fields(file = %args.file, term = %args.term))]
pub fn cmd_search(
    args: SearchArgs,
    global_json: bool,
    analyzer: &TextAnalyzer,
    config_limit: usize,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or(config_limit);
    debug!(limit, snapshot = is_snapshot(&args.file), "executing search command");

    let snapshot = if is_snapshot(&args.file) {
        load_snapshot(&args.file, max_input)?
    } else {
        analyze_file(&args.file, None, analyzer, max_input)
            .with_context(|| format!("failed to analyze {}", args.file))?
    };

    let hits = search_with_limit(&snapshot, &args.term, limit);

    if global_json {
        let report = SearchReport {
            term: args.term.trim(),
            hits,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No matches for \"{}\"", args.term.trim().yellow());
    } else {
        println!(
            "{} matches for \"{}\" in {}",
            hits.len(),
            args.term.trim().bold(),
            args.file
        );
        print_entries(&hits);
    }

    Ok(())
}
