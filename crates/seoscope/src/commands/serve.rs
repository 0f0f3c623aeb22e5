//! Serve command — run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use seoscope_core::TextAnalyzer;

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve analysis tools over MCP until the client disconnects.
///
/// Logs go to stderr and the log file; stdout carries the protocol.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    analyzer: TextAnalyzer,
    search_limit: usize,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    info!(
        stop_words = analyzer.stop_words().len(),
        alphabet = %analyzer.tokenizer().alphabet(),
        "starting MCP server on stdio"
    );

    let service = ProjectServer::new(analyzer, search_limit, max_input)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;

    service
        .waiting()
        .await
        .context("MCP server terminated abnormally")?;

    info!("MCP server stopped");
    Ok(())
}
