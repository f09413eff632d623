//! Beacon command-line front end.
//!
//! Sources nodes from CSV (or the built-in demo set), runs the allocation
//! engine in [`beacon_alloc`] and renders the result as a table or JSON.

pub mod error;
pub mod input;
pub mod report;
pub mod settings;

pub use error::{Error, Result};
pub use input::{load_nodes, read_nodes, LoadReport, Source};
pub use report::{render, OutputFormat};
pub use settings::Cli;

use beacon_alloc::{allocate, AllocConfig, Allocation, Node};

/// Exit status when every node received a channel, or `--strict` is off.
pub const EXIT_OK: u8 = 0;
/// Exit status when loading, configuration or allocation failed.
pub const EXIT_ERROR: u8 = 1;
/// Exit status under `--strict` when some node is unassignable.
pub const EXIT_UNASSIGNABLE: u8 = 2;

/// Everything produced by one run.
#[derive(Debug)]
pub struct Run {
    pub nodes: Vec<Node>,
    pub load: LoadReport,
    pub config: AllocConfig,
    pub allocation: Allocation,
}

impl Run {
    /// Render the report for this run.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        render(format, &self.nodes, &self.config, &self.allocation)
    }

    /// Process exit status for this run.
    pub fn exit_code(&self, strict: bool) -> u8 {
        if strict && !self.allocation.is_complete() {
            EXIT_UNASSIGNABLE
        } else {
            EXIT_OK
        }
    }
}

impl Error {
    /// Process exit status for a failed run.
    pub fn exit_code(&self) -> u8 {
        EXIT_ERROR
    }
}

/// Load, validate and allocate according to the parsed arguments.
pub fn execute(cli: &Cli) -> Result<Run> {
    let config = cli.alloc_config()?;
    let (nodes, load) = load_nodes(&cli.source())?;
    let allocation = allocate(&nodes, &config)?;
    Ok(Run {
        nodes,
        load,
        config,
        allocation,
    })
}
