//! Edge-list provider construction and graph conversion.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use spanwood_core::{AdjacencyGraph, InputEdge};
use tracing::{debug, instrument};

use crate::errors::EdgeListError;
use crate::parser::{parse_edge, parse_header};

/// A parsed edge list: the declared vertex count and the edges in file order.
#[derive(Clone, Debug)]
pub struct EdgeListProvider {
    name: String,
    vertex_count: usize,
    edges: Vec<InputEdge>,
}

impl EdgeListProvider {
    /// Parses an edge list from a buffered reader.
    ///
    /// Blank lines are skipped anywhere; lines after the last declared edge
    /// are not read.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use spanwood_providers_edgelist::EdgeListProvider;
    ///
    /// let provider = EdgeListProvider::try_from_reader("demo", Cursor::new("3 2\n1 2 4\n2,3,1\n"))?;
    /// assert_eq!(provider.vertex_count(), 3);
    /// assert_eq!(provider.edges().len(), 2);
    /// # Ok::<(), spanwood_providers_edgelist::EdgeListError>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`EdgeListError::EmptyInput`] when there is no header,
    /// [`EdgeListError::InvalidHeader`] or [`EdgeListError::InvalidEdge`] for
    /// malformed lines, [`EdgeListError::MissingEdges`] when the input ends
    /// early and [`EdgeListError::Io`] when reading fails.
    #[instrument(name = "provider.edgelist.read", err, skip(name, reader))]
    pub fn try_from_reader<R>(name: impl Into<String>, reader: R) -> Result<Self, EdgeListError>
    where
        R: BufRead,
    {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| line.map(|text| (index + 1, text)))
            .filter(|line| !matches!(line, Ok((_, text)) if text.trim().is_empty()));

        let (header_line, header) = lines.next().ok_or(EdgeListError::EmptyInput)??;
        let (vertex_count, edge_count) = parse_header(header_line, &header)?;

        // The declared count is untrusted; grow as edges actually arrive.
        let mut edges = Vec::new();
        while edges.len() < edge_count {
            let Some(line) = lines.next() else {
                return Err(EdgeListError::MissingEdges {
                    declared: edge_count,
                    found: edges.len(),
                });
            };
            let (line_no, text) = line?;
            edges.push(parse_edge(line_no, &text)?);
        }

        debug!(vertex_count, edge_count, "edge list parsed");
        Ok(Self {
            name: name.into(),
            vertex_count,
            edges,
        })
    }

    /// Opens and parses the edge list at `path`.
    ///
    /// # Errors
    /// Returns the same errors as [`EdgeListProvider::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, EdgeListError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Returns the provider name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the vertex count declared by the header.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the parsed edges in file order.
    #[must_use]
    pub fn edges(&self) -> &[InputEdge] {
        &self.edges
    }

    /// Builds the adjacency graph described by the edge list.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Graph`] when the header declares no vertices
    /// or an edge names a vertex outside `1..=V`.
    pub fn to_graph(&self) -> Result<AdjacencyGraph, EdgeListError> {
        Ok(AdjacencyGraph::from_edges(self.vertex_count, &self.edges)?)
    }
}
