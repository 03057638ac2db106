//! Command implementations and argument parsing for the spanwood CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use spanwood_core::{
    AdjacencyGraph, AttachEvent, MinimumSpanningTree, PrimBuilder, PrimError, Reachability,
};
use spanwood_providers_edgelist::{EdgeListError, EdgeListProvider};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::render::vertex_label;

const DEFAULT_START: usize = 1;
const FALLBACK_EXTENSION: &str = "txt";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwood",
    about = "Compute minimum spanning trees of weighted edge lists."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning tree of an edge-list file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge-list file: a `V E` header followed by `E` lines of `u v weight`.
    /// When the path does not exist and has no extension, `.txt` is tried.
    pub path: PathBuf,

    /// 1-based vertex to grow the tree from.
    #[arg(long, default_value_t = DEFAULT_START)]
    pub start: usize,

    /// Fail instead of printing a partial tree when the graph is disconnected.
    #[arg(long)]
    pub require_spanning: bool,

    /// How vertices are labelled in the output.
    #[arg(long, value_enum, default_value_t = LabelStyle::Numeric)]
    pub labels: LabelStyle,

    /// Print every adjacency list before the tree.
    #[arg(long)]
    pub show_adjacency: bool,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Override name for the graph (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Vertex labelling schemes.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum LabelStyle {
    /// Print vertex ids as numbers.
    #[default]
    Numeric,
    /// Print vertex ids as letters: `1` is `A`, `26` is `Z`, `27` is `AA`.
    Letters,
}

/// Output formats for the run summary.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented, human-readable report.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list could not be parsed or converted into a graph.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// The tree computation failed.
    #[error(transparent)]
    Core(#[from] PrimError),
}

/// Outcome of a `run` command, ready to be rendered.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the graph, from `--name` or the file stem.
    pub graph_name: String,
    /// The loaded graph.
    pub graph: AdjacencyGraph,
    /// The computed tree.
    pub tree: MinimumSpanningTree,
    /// Labelling scheme for rendered vertices.
    pub labels: LabelStyle,
    /// Whether adjacency lists are rendered.
    pub show_adjacency: bool,
    /// Rendering format.
    pub output: OutputFormat,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or computing the tree fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwood_cli::cli::{Cli, Command, LabelStyle, OutputFormat, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 2\n1 2 4\n2 3 1\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         start: 1,
///         require_spanning: false,
///         labels: LabelStyle::Numeric,
///         show_adjacency: false,
///         output: OutputFormat::Text,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tree.total_weight(), 5);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        path = field::Empty,
        start = command.start,
        require_spanning = command.require_spanning,
        graph = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        start,
        require_spanning,
        labels,
        show_adjacency,
        output,
        name,
    } = command;

    let path = resolve_input_path(&path);
    let span = Span::current();
    span.record("path", field::display(path.display()));

    let graph_name = derive_graph_name(&path, name.as_deref());
    span.record("graph", field::display(&graph_name));

    let reader = open_edge_list(&path)?;
    let provider = EdgeListProvider::try_from_reader(graph_name.clone(), reader)?;
    let graph = provider.to_graph()?;

    let reachability = if require_spanning {
        Reachability::RequireSpanning
    } else {
        Reachability::AllowPartial
    };
    let prim = PrimBuilder::new()
        .with_start(start)
        .with_reachability(reachability)
        .build();
    let tree = prim.run_with_observer(&graph, &mut |event: &AttachEvent| {
        log_attachment(event, labels);
    })?;

    info!(
        graph = graph_name.as_str(),
        total_weight = tree.total_weight(),
        reached = tree.reached_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        graph_name,
        graph,
        tree,
        labels,
        show_adjacency,
        output,
    })
}

fn log_attachment(event: &AttachEvent, labels: LabelStyle) {
    let Some(parent) = event.parent else {
        return;
    };
    info!(
        parent = %vertex_label(parent, labels),
        vertex = %vertex_label(event.vertex, labels),
        weight = event.weight,
        "adding edge to minimum spanning tree"
    );
}

/// Returns `path` unchanged when it exists or already has an extension;
/// otherwise prefers `path.txt` when that file exists.
pub(super) fn resolve_input_path(path: &Path) -> PathBuf {
    if path.exists() || path.extension().is_some() {
        return path.to_path_buf();
    }
    let fallback = path.with_extension(FALLBACK_EXTENSION);
    if fallback.is_file() {
        fallback
    } else {
        path.to_path_buf()
    }
}

#[instrument(name = "cli.open_edge_list", err, skip(path), fields(path = field::Empty))]
pub(super) fn open_edge_list(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_graph_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}
