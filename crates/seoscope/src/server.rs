//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes page-text analysis, snapshot search and link tag clouds to AI
//! assistants over stdio. The server is a presentation layer over the same
//! core library the CLI commands use; every tool delegates to `seoscope_core`.
//!
//! The analyzer (with its stop-word set) is built once from configuration and
//! shared by every tool call.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use seoscope_core::text::split_paragraphs;
use seoscope_core::{ContentAnalysis, PageText, TextAnalyzer, search_with_limit, tag_cloud};

use crate::commands::check_input_size;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// Visible page text. Whitespace is collapsed before analysis.
    pub text: String,
    /// Paragraph count from the page structure. Omit to count blank-line separated blocks.
    pub paragraph_count: Option<usize>,
}

/// Parameters for the `search_snapshot` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchSnapshotParams {
    /// Word or phrase fragment to look for (case-insensitive).
    pub term: String,
    /// A snapshot previously returned by `analyze_text`.
    pub snapshot: Option<ContentAnalysis>,
    /// Page text to analyze and search when no snapshot is given.
    pub text: Option<String>,
    /// Maximum number of hits.
    pub limit: Option<usize>,
}

/// Parameters for the `link_tag_cloud` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct LinkTagCloudParams {
    /// Anchor texts of the page's links.
    pub links: Vec<String>,
}

#[derive(Serialize)]
struct SearchResponse<'a> {
    term: &'a str,
    hits: Vec<seoscope_core::FrequencyEntry>,
}

/// MCP server exposing seoscope analysis to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    analyzer: Arc<TextAnalyzer>,
    search_limit: usize,
    max_input: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(
            TextAnalyzer::default(),
            seoscope_core::DEFAULT_SEARCH_LIMIT,
            Some(seoscope_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

impl ProjectServer {
    fn check_size(&self, text: &str) -> Result<(), McpError> {
        check_input_size(text, self.max_input)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    fn analyze_page(&self, text: &str, paragraph_count: Option<usize>) -> ContentAnalysis {
        let paragraph_count = paragraph_count.unwrap_or_else(|| split_paragraphs(text).len());
        self.analyzer
            .analyze(&PageText::from_raw(text, paragraph_count))
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance.
    pub fn new(analyzer: TextAnalyzer, search_limit: usize, max_input: Option<usize>) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            search_limit,
            max_input,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Analyze page text into counts and frequency tables.
    #[tool(
        description = "Analyze page text (English, Russian, Kazakh). Returns word, character, sentence and paragraph counts, reading time, and the top single words, two-word and three-word phrases with percentages."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            len = params.text.len(),
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let report = self.analyze_page(&params.text, params.paragraph_count);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "analyze_text",
            word_count = report.word_count,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Search words and phrases in a snapshot or freshly analyzed text.
    #[tool(
        description = "Search the top words and phrases of a page for a term (substring, case-insensitive). Pass a snapshot from analyze_text, or raw text to analyze first."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", term = %params.term))]
    fn search_snapshot(
        &self,
        Parameters(params): Parameters<SearchSnapshotParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "search_snapshot",
            has_snapshot = params.snapshot.is_some(),
            "executing MCP tool"
        );

        let snapshot = match (params.snapshot, params.text) {
            (Some(snapshot), _) => snapshot,
            (None, Some(text)) => {
                self.check_size(&text)?;
                self.analyze_page(&text, None)
            }
            (None, None) => {
                return Err(McpError::invalid_params(
                    "either `snapshot` or `text` is required",
                    None,
                ));
            }
        };

        let limit = params.limit.unwrap_or(self.search_limit);
        let hits = search_with_limit(&snapshot, &params.term, limit);
        let json = to_json(&SearchResponse {
            term: params.term.trim(),
            hits,
        })?;

        tracing::info!(tool = "search_snapshot", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Tag cloud over link anchor texts.
    #[tool(
        description = "Build a tag cloud from link anchor texts: words repeated across links, with counts and a 1-5 display size."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", links = params.links.len()))]
    fn link_tag_cloud(
        &self,
        Parameters(params): Parameters<LinkTagCloudParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "link_tag_cloud", "executing MCP tool");
        let total: usize = params.links.iter().map(String::len).sum();
        if let Some(max) = self.max_input
            && total > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {total} bytes (limit: {max} bytes)"),
                None,
            ));
        }

        let cloud = tag_cloud(&params.links, self.analyzer.tokenizer());
        let json = to_json(&cloud)?;

        tracing::info!(
            tool = "link_tag_cloud",
            tags = cloud.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Analyze page text with analyze_text, then search the returned snapshot with search_snapshot.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
