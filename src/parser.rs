use crate::ir::Graph;
use anyhow::{Context, Result};

/// Parse a laid-out graph document. Accepts JSON and JSON5 (comments,
/// trailing commas, unquoted keys).
pub fn parse_document(input: &str) -> Result<Graph> {
    let trimmed = input.trim_start_matches('\u{feff}');
    if trimmed.trim().is_empty() {
        return Err(anyhow::anyhow!("empty graph document"));
    }
    json5::from_str(trimmed).context("invalid graph document")
}
