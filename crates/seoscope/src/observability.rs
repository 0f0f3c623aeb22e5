//! Logging setup: human-readable logs on stderr plus an optional JSONL file.
//!
//! Stdout is reserved for command output (and the MCP protocol under
//! `serve`), so nothing here ever writes to it.
//!
//! Log file location, first match wins:
//! 1. `SEOSCOPE_LOG_PATH` - exact file, never rotated
//! 2. `SEOSCOPE_LOG_DIR` - daily-rotated `seoscope.*.jsonl` in that directory
//! 3. `log_dir` from configuration - same as above
//! 4. the platform data directory (`~/.local/share/seoscope/logs` on Linux)
//!
//! Explicit locations (1-3) must be writable. The platform default is best
//! effort and silently skipped when it cannot be created.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "SEOSCOPE_LOG_PATH";
const LOG_DIR_ENV: &str = "SEOSCOPE_LOG_DIR";
const LOG_FILE_PREFIX: &str = "seoscope";
const LOG_FILE_SUFFIX: &str = "jsonl";

/// Where (and whether) to write the JSONL log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// A single file at this exact path.
    File(PathBuf),
    /// Daily-rotated files in this directory.
    Dir(PathBuf),
    /// Daily-rotated files in the platform default directory, if available.
    Default(Option<PathBuf>),
}

/// Resolved observability settings.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log file destination.
    pub target: LogTarget,
}

impl ObservabilityConfig {
    /// Resolve the log destination from the environment, then `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let env_path = non_empty_env(LOG_PATH_ENV);
        let env_dir = non_empty_env(LOG_DIR_ENV);
        Self {
            target: resolve_target(env_path, env_dir, config_log_dir),
        }
    }
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn resolve_target(
    env_path: Option<PathBuf>,
    env_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> LogTarget {
    if let Some(path) = env_path {
        LogTarget::File(path)
    } else if let Some(dir) = env_dir.or(config_dir) {
        LogTarget::Dir(dir)
    } else {
        LogTarget::Default(
            seoscope_core::config::user_data_local_dir()
                .map(|dir| dir.join("logs").into_std_path_buf()),
        )
    }
}

/// Build the log filter.
///
/// `-q` and `-v` win over `RUST_LOG`, which wins over the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let flag_level = match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("debug"),
        (false, _) => Some("trace"),
    };
    if let Some(level) = flag_level {
        return EnvFilter::new(level);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level))
}

/// Keeps the background log writer alive; drop it last to flush.
#[must_use = "dropping the guard stops file logging"]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let appender = match &config.target {
        LogTarget::File(path) => Some(file_appender(path)?),
        LogTarget::Dir(dir) => Some(dir_appender(dir)?),
        LogTarget::Default(Some(dir)) => dir_appender(dir).ok(),
        LogTarget::Default(None) => None,
    };

    let (file_layer, guard) = match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(ObservabilityGuard { _file: guard })
}

fn dir_appender(dir: &Path) -> anyhow::Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(dir)
        .with_context(|| format!("failed to open log file in {}", dir.display()))
}

fn file_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
