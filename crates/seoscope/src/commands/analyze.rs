//! Analyze command — keyword and phrase frequencies for one page.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument, warn};

use seoscope_core::text::split_paragraphs;
use seoscope_core::{
    Alphabet, ContentAnalysis, FrequencyEntry, FrequencyTable, PageText, TextAnalyzer,
    demo_analysis,
};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text file to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Paragraph count to report. Defaults to counting blank-line separated blocks.
    #[arg(long, value_name = "N")]
    pub paragraphs: Option<usize>,

    /// Show the demo dataset instead of failing when the input cannot be read.
    #[arg(long)]
    pub demo_on_error: bool,

    /// Token alphabet (overrides config).
    #[arg(long, value_enum)]
    pub alphabet: Option<Alphabet>,
}

/// Read `path` and analyze it as one page.
///
/// Paragraphs are counted from the raw text before whitespace is collapsed.
pub fn analyze_file(
    path: &Utf8Path,
    paragraphs: Option<usize>,
    analyzer: &TextAnalyzer,
    max_input: Option<usize>,
) -> anyhow::Result<ContentAnalysis> {
    let raw = read_input_file(path, max_input)?;
    let paragraph_count = paragraphs.unwrap_or_else(|| split_paragraphs(&raw).len());
    Ok(analyzer.analyze(&PageText::from_raw(&raw, paragraph_count)))
}

/// Analyze a page and print its overview and frequency tables.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    analyzer: &TextAnalyzer,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, paragraphs = ?args.paragraphs, "executing analyze command");

    let analyzer = match args.alphabet {
        Some(alphabet) => analyzer.clone().with_alphabet(alphabet),
        None => analyzer.clone(),
    };

    let report = match analyze_file(&args.file, args.paragraphs, &analyzer, max_input) {
        Ok(report) => report,
        Err(err) if args.demo_on_error => {
            warn!(error = %err, "input unavailable, showing demo data");
            demo_analysis()
        }
        Err(err) => return Err(err).with_context(|| format!("failed to analyze {}", args.file)),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    print_overview(&report);
    print_table("Top words", &report.single_words);
    print_table("Two-word phrases", &report.double_words);
    print_table("Three-word phrases", &report.triple_words);

    Ok(())
}

fn print_overview(report: &ContentAnalysis) {
    println!(
        "\n  {} {} words, {} characters, {} paragraphs, {} sentences",
        "Overview:".cyan(),
        report.word_count,
        report.char_count,
        report.paragraph_count,
        report.sentence_count,
    );
    println!(
        "  {} ~{} min",
        "Reading time:".cyan(),
        report.reading_time_minutes
    );
}

fn print_table(title: &str, table: &FrequencyTable) {
    println!("\n  {}", title.bold().underline());
    if table.is_empty() {
        println!("    {}", "(none)".dimmed());
        return;
    }
    print_entries(table.entries());
}

/// Print ranked entries as an aligned list.
pub(crate) fn print_entries(entries: &[FrequencyEntry]) {
    let width = entries
        .iter()
        .map(|e| e.key.chars().count())
        .max()
        .unwrap_or(0);
    for (rank, entry) in entries.iter().enumerate() {
        let pad = width - entry.key.chars().count();
        println!(
            "    {:>2}. {}{}  {:>5}  {}",
            rank + 1,
            entry.key.green(),
            " ".repeat(pad),
            entry.count,
            format!("{}%", entry.percentage).dimmed(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_page(tmp: &TempDir, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(tmp.path().join("page.txt")).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn counts_blank_line_paragraphs() {
        let tmp = TempDir::new().unwrap();
        let path = write_page(&tmp, "SEO tips here.\n\nMore SEO tips.\n\n\nLast one!");
        let report = analyze_file(&path, None, &TextAnalyzer::default(), None).unwrap();
        assert_eq!(report.paragraph_count, 3);
        assert_eq!(report.sentence_count, 3);
        assert_eq!(report.single_words.get("seo").unwrap().count, 2);
    }

    #[test]
    fn explicit_paragraph_count_wins() {
        let tmp = TempDir::new().unwrap();
        let path = write_page(&tmp, "one block only");
        let report = analyze_file(&path, Some(7), &TextAnalyzer::default(), None).unwrap();
        assert_eq!(report.paragraph_count, 7);
    }

    #[test]
    fn demo_on_error_replaces_missing_input() {
        let args = AnalyzeArgs {
            file: Utf8PathBuf::from("/no/such/page.txt"),
            paragraphs: None,
            demo_on_error: true,
            alphabet: None,
        };
        assert!(cmd_analyze(args, true, &TextAnalyzer::default(), None).is_ok());
    }

    #[test]
    fn missing_input_fails_without_demo() {
        let args = AnalyzeArgs {
            file: Utf8PathBuf::from("/no/such/page.txt"),
            paragraphs: None,
            demo_on_error: false,
            alphabet: None,
        };
        let err = cmd_analyze(args, false, &TextAnalyzer::default(), None).unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/page.txt"));
    }
}
