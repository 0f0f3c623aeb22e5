//! Tags command — tag cloud from link anchor texts.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seoscope_core::{LinkTag, Tokenizer, tag_cloud};

use super::read_input_file;

/// Arguments for the `tags` subcommand.
#[derive(Args, Debug)]
pub struct TagsArgs {
    /// File with one link text per line (`-` for stdin).
    pub file: Utf8PathBuf,
}

/// Build a tag cloud from link texts.
#[instrument(name = "cmd_tags", skip_all, fields(file = %args.file))]
pub fn cmd_tags(
    args: TagsArgs,
    global_json: bool,
    tokenizer: Tokenizer,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let content = read_input_file(&args.file, max_input)?;
    let links: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    debug!(links = links.len(), "executing tags command");

    let cloud = tag_cloud(&links, tokenizer);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&cloud)?);
    } else if cloud.is_empty() {
        println!("{}", "No common tags found in link texts".dimmed());
    } else {
        let line: Vec<String> = cloud.iter().map(render_tag).collect();
        println!("{}", line.join("  "));
    }

    Ok(())
}

fn render_tag(tag: &LinkTag) -> String {
    let label = format!("{}({})", tag.tag, tag.count);
    match tag.size {
        5 => label.bold().magenta().to_string(),
        4 => label.bold().cyan().to_string(),
        3 => label.cyan().to_string(),
        2 => label.green().to_string(),
        _ => label.dimmed().to_string(),
    }
}
