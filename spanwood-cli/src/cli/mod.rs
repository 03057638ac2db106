//! Command-line interface orchestration for spanwood.
//!
//! The `run` command loads an edge-list file, computes its minimum spanning
//! tree with Prim's algorithm and renders the result as text or JSON.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, LabelStyle, OutputFormat, RunCommand, run_cli,
};
pub use render::{render_summary, vertex_label};
