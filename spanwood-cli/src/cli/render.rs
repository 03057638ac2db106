//! Text and JSON rendering of run summaries.

use std::io::{self, Write};

use serde::Serialize;
use spanwood_core::{AdjacencyGraph, MinimumSpanningTree, VertexId, Weight};

use super::commands::{ExecutionSummary, LabelStyle, OutputFormat};

const ALPHABET_LEN: usize = 26;
const NO_PARENT: &str = "-";

/// Formats `vertex` according to `style`.
///
/// Letters use bijective base-26, so ids past 26 continue as `AA`, `AB`, ...
///
/// # Examples
/// ```
/// use spanwood_cli::cli::{LabelStyle, vertex_label};
/// use spanwood_core::VertexId;
///
/// let vertex = VertexId::new(28).expect("non-zero");
/// assert_eq!(vertex_label(vertex, LabelStyle::Numeric), "28");
/// assert_eq!(vertex_label(vertex, LabelStyle::Letters), "AB");
/// ```
#[must_use]
pub fn vertex_label(vertex: VertexId, style: LabelStyle) -> String {
    match style {
        LabelStyle::Numeric => vertex.get().to_string(),
        LabelStyle::Letters => letters(vertex.get()),
    }
}

fn letters(mut raw: usize) -> String {
    let mut reversed = Vec::new();
    while raw > 0 {
        raw -= 1;
        reversed.push(b'A' + (raw % ALPHABET_LEN) as u8);
        raw /= ALPHABET_LEN;
    }
    reversed.iter().rev().map(|&byte| char::from(byte)).collect()
}

/// Renders `summary` to `writer` in the format it requests.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON serialisation fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.output {
        OutputFormat::Text => render_text(summary, &mut writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &JsonSummary::from(summary))?;
            writeln!(writer)
        }
    }
}

fn render_text(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    let ExecutionSummary {
        graph_name,
        graph,
        tree,
        labels,
        show_adjacency,
        ..
    } = summary;
    let label = |vertex: VertexId| vertex_label(vertex, *labels);

    writeln!(writer, "graph: {graph_name}")?;
    writeln!(writer, "vertices: {}", graph.vertex_count())?;
    writeln!(writer, "edges: {}", graph.edge_count())?;
    if *show_adjacency {
        writeln!(writer, "adjacency:")?;
        for vertex in graph.vertices() {
            let neighbours: Vec<String> = graph
                .neighbours(vertex)
                .map(|n| format!("{}({})", label(n.vertex()), n.weight()))
                .collect();
            writeln!(writer, "{}\t{}", label(vertex), neighbours.join(" "))?;
        }
    }
    writeln!(writer, "start: {}", label(tree.start()))?;
    writeln!(writer, "total weight: {}", tree.total_weight())?;
    writeln!(
        writer,
        "reached: {} of {}",
        tree.reached_count(),
        tree.vertex_count()
    )?;
    let unreached: Vec<String> = tree.unreached().map(label).collect();
    if !unreached.is_empty() {
        writeln!(writer, "unreached: {}", unreached.join(" "))?;
    }
    writeln!(writer, "parents:")?;
    for vertex in graph.vertices() {
        let parent = tree.parent(vertex).map_or_else(|| NO_PARENT.to_owned(), label);
        writeln!(writer, "{}\t{parent}", label(vertex))?;
    }
    Ok(())
}

/// A vertex as it appears in JSON: a number or a letter label.
#[derive(Serialize)]
#[serde(untagged)]
enum JsonVertex {
    Number(usize),
    Letters(String),
}

impl JsonVertex {
    fn new(vertex: VertexId, style: LabelStyle) -> Self {
        match style {
            LabelStyle::Numeric => Self::Number(vertex.get()),
            LabelStyle::Letters => Self::Letters(letters(vertex.get())),
        }
    }
}

#[derive(Serialize)]
struct JsonEdge {
    parent: JsonVertex,
    child: JsonVertex,
    weight: Weight,
}

#[derive(Serialize)]
struct JsonNeighbour {
    vertex: JsonVertex,
    weight: Weight,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    graph: &'a str,
    vertex_count: usize,
    edge_count: usize,
    start: JsonVertex,
    total_weight: Weight,
    reached: usize,
    spanning: bool,
    parents: Vec<Option<JsonVertex>>,
    tree_edges: Vec<JsonEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    adjacency: Option<Vec<Vec<JsonNeighbour>>>,
}

impl<'a> From<&'a ExecutionSummary> for JsonSummary<'a> {
    fn from(summary: &'a ExecutionSummary) -> Self {
        let style = summary.labels;
        let tree = &summary.tree;
        Self {
            graph: &summary.graph_name,
            vertex_count: summary.graph.vertex_count(),
            edge_count: summary.graph.edge_count(),
            start: JsonVertex::new(tree.start(), style),
            total_weight: tree.total_weight(),
            reached: tree.reached_count(),
            spanning: tree.is_spanning(),
            parents: json_parents(tree, style),
            tree_edges: tree
                .edges()
                .map(|edge| JsonEdge {
                    parent: JsonVertex::new(edge.parent(), style),
                    child: JsonVertex::new(edge.child(), style),
                    weight: edge.weight(),
                })
                .collect(),
            adjacency: summary
                .show_adjacency
                .then(|| json_adjacency(&summary.graph, style)),
        }
    }
}

fn json_parents(tree: &MinimumSpanningTree, style: LabelStyle) -> Vec<Option<JsonVertex>> {
    tree.parents()
        .iter()
        .map(|parent| parent.map(|p| JsonVertex::new(p, style)))
        .collect()
}

fn json_adjacency(graph: &AdjacencyGraph, style: LabelStyle) -> Vec<Vec<JsonNeighbour>> {
    graph
        .vertices()
        .map(|vertex| {
            graph
                .neighbours(vertex)
                .map(|n| JsonNeighbour {
                    vertex: JsonVertex::new(n.vertex(), style),
                    weight: n.weight(),
                })
                .collect()
        })
        .collect()
}
