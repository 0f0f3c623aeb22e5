//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use seoscope_core::config::{Config, ConfigSources};
use seoscope_core::{DEFAULT_SEARCH_LIMIT, analyzer::DEFAULT_WORDS_PER_MINUTE};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct TablesInfo {
    single: usize,
    double: usize,
    triple: usize,
}

#[derive(Serialize)]
struct StopWordsInfo {
    builtin: bool,
    extra: usize,
    allow: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    /// `None` when the limit is disabled.
    max_input_bytes: Option<usize>,
    alphabet: String,
    words_per_minute: u32,
    search_limit: usize,
    tables: TablesInfo,
    stop_words: StopWordsInfo,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes: config.input_limit(),
            alphabet: config.alphabet.as_str().to_string(),
            words_per_minute: config.words_per_minute.unwrap_or(DEFAULT_WORDS_PER_MINUTE),
            search_limit: config.search_limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
            tables: TablesInfo {
                single: config.tables.single,
                double: config.tables.double,
                triple: config.tables.triple,
            },
            stop_words: StopWordsInfo {
                builtin: config.stop_words.builtin,
                extra: config.stop_words.extra.len(),
                allow: config.stop_words.allow.len(),
                file: config.stop_words.file.as_ref().map(|p| p.to_string()),
            },
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: info,
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }
    if !package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), package.repository.cyan());
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match cfg.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    match cfg.max_input_bytes {
        Some(max) => println!("{}: {max} bytes", "Input limit".dimmed()),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }

    println!();
    println!("{}", "Analysis".bold().underline());
    println!("{}: {}", "Alphabet".dimmed(), cfg.alphabet);
    println!("{}: {}", "Words per minute".dimmed(), cfg.words_per_minute);
    println!(
        "{}: {} / {} / {}",
        "Table sizes".dimmed(),
        cfg.tables.single,
        cfg.tables.double,
        cfg.tables.triple
    );
    println!("{}: {}", "Search limit".dimmed(), cfg.search_limit);
    println!(
        "{}: builtin {}, +{} extra, -{} allowed",
        "Stop words".dimmed(),
        if cfg.stop_words.builtin { "on" } else { "off" },
        cfg.stop_words.extra,
        cfg.stop_words.allow,
    );
    if let Some(ref file) = cfg.stop_words.file {
        println!("{}: {}", "Stop-word file".dimmed(), file);
    }

    Ok(())
}
