//! Rendering allocation results.

use crate::error::Result;
use beacon_alloc::{AllocConfig, Allocation, AllocationSummary, Node, Outcome};
use serde::Serialize;
use std::fmt::Write as _;

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// JSON document
    Json,
}

/// One row of the report, sorted by identity.
#[derive(Debug, Clone, Serialize)]
struct Row<'a> {
    id: &'a str,
    lat: f64,
    lon: f64,
    outcome: Outcome,
}

fn rows<'a>(nodes: &'a [Node], allocation: &Allocation) -> Vec<Row<'a>> {
    let mut rows: Vec<Row<'a>> = nodes
        .iter()
        .filter_map(|node| {
            allocation.outcome(node.id()).map(|outcome| Row {
                id: node.id(),
                lat: node.lat(),
                lon: node.lon(),
                outcome,
            })
        })
        .collect();
    rows.sort_by(|a, b| a.id.cmp(b.id));
    rows
}

/// Render the allocation in the requested format.
pub fn render(
    format: OutputFormat,
    nodes: &[Node],
    config: &AllocConfig,
    allocation: &Allocation,
) -> Result<String> {
    match format {
        OutputFormat::Table => render_table(nodes, allocation),
        OutputFormat::Json => render_json(nodes, config, allocation),
    }
}

/// Aligned table sorted by identity, followed by a summary line.
pub fn render_table(nodes: &[Node], allocation: &Allocation) -> Result<String> {
    let rows = rows(nodes, allocation);
    let id_width = rows.iter().map(|r| r.id.len()).max().unwrap_or(0).max("ID".len());

    let mut out = String::new();
    writeln!(out, "{:<id_width$}  {:>11}  {:>12}  CHANNEL", "ID", "LAT", "LON")?;
    for row in &rows {
        let channel = match row.outcome {
            Outcome::Assigned(c) => c.to_string(),
            Outcome::Unassignable => "-".to_string(),
        };
        writeln!(
            out,
            "{:<id_width$}  {:>11.6}  {:>12.6}  {}",
            row.id, row.lat, row.lon, channel
        )?;
    }

    out.push('\n');
    out.push_str(&summary_line(&allocation.summary()));
    out.push('\n');

    let failed: Vec<&str> = rows
        .iter()
        .filter(|r| !r.outcome.is_assigned())
        .map(|r| r.id)
        .collect();
    if !failed.is_empty() {
        writeln!(out, "warning: no channel available for: {}", failed.join(", "))?;
    }
    Ok(out)
}

/// One-line description of the summary figures.
pub fn summary_line(summary: &AllocationSummary) -> String {
    format!(
        "{} nodes, {} interfering pairs, {} of {} channels used, {} unassignable",
        summary.nodes,
        summary.edges,
        summary.channels_used,
        summary.palette_size,
        summary.unassignable
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a AllocConfig,
    summary: AllocationSummary,
    nodes: Vec<Row<'a>>,
}

/// Pretty-printed JSON with the configuration, summary and sorted rows.
pub fn render_json(nodes: &[Node], config: &AllocConfig, allocation: &Allocation) -> Result<String> {
    let report = JsonReport {
        config,
        summary: allocation.summary(),
        nodes: rows(nodes, allocation),
    };
    let mut text = serde_json::to_string_pretty(&report)?;
    text.push('\n');
    Ok(text)
}
