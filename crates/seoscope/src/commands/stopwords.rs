//! Stopwords command — print the effective stop-word set.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seoscope_core::StopWordSet;

/// Arguments for the `stopwords` subcommand.
#[derive(Args, Debug, Default)]
pub struct StopwordsArgs {
    /// Print only the number of stop words.
    #[arg(long)]
    pub count: bool,
}

/// List the stop words analysis filters out, after config adjustments.
#[instrument(name = "cmd_stopwords", skip_all)]
pub fn cmd_stopwords(
    args: StopwordsArgs,
    global_json: bool,
    stop_words: &StopWordSet,
) -> anyhow::Result<()> {
    debug!(size = stop_words.len(), "executing stopwords command");

    if args.count {
        if global_json {
            println!("{}", serde_json::json!({ "count": stop_words.len() }));
        } else {
            println!("{}", stop_words.len());
        }
        return Ok(());
    }

    let words = stop_words.sorted();
    if global_json {
        println!("{}", serde_json::to_string_pretty(&words)?);
    } else if words.is_empty() {
        println!("{}", "Stop-word filtering is disabled".yellow());
    } else {
        for word in words {
            println!("{word}");
        }
    }

    Ok(())
}
