//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;
pub mod search;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stopwords;
pub mod tags;

/// Path argument meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a file and validate its size against the configured limit.
///
/// `-` reads standard input instead; its size is checked after reading.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        return read_stdin(max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    // One byte past the limit is enough to know it was exceeded.
    let cap = max_bytes.map_or(u64::MAX, |max| max as u64 + 1);
    let mut bytes = Vec::new();
    std::io::stdin()
        .lock()
        .take(cap)
        .read_to_end(&mut bytes)
        .context("failed to read standard input")?;
    if let Some(max) = max_bytes
        && bytes.len() > max
    {
        anyhow::bail!("input too large: standard input exceeds {max} bytes");
    }
    String::from_utf8(bytes).context("standard input is not valid UTF-8")
}

/// Check text handed over directly (MCP tools) against the input limit.
pub fn check_input_size(text: &str, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && text.len() > max
    {
        anyhow::bail!("input too large: {} bytes (limit: {max} bytes)", text.len());
    }
    Ok(())
}
