//! Line-level parsing for the edge-list format.

use std::str::FromStr;

use spanwood_core::{InputEdge, Weight};

use crate::errors::EdgeListError;

const SEPARATORS: [char; 3] = [' ', ',', '\t'];

/// Splits a line on any run of separators, dropping empty tokens.
pub(crate) fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(SEPARATORS.as_slice())
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Parses `V E`. Tokens after the edge count are ignored.
pub(crate) fn parse_header(line_no: usize, line: &str) -> Result<(usize, usize), EdgeListError> {
    let invalid = |reason: String| EdgeListError::InvalidHeader {
        line: line_no,
        reason,
    };
    let mut parts = tokens(line);
    let vertex_count = field::<usize>(parts.next(), "vertex count").map_err(invalid)?;
    let edge_count = field::<usize>(parts.next(), "edge count").map_err(invalid)?;
    Ok((vertex_count, edge_count))
}

/// Parses `u v weight`. Tokens after the weight are ignored.
///
/// Endpoints are range-checked later, when the graph is built.
pub(crate) fn parse_edge(line_no: usize, line: &str) -> Result<InputEdge, EdgeListError> {
    let invalid = |reason: String| EdgeListError::InvalidEdge {
        line: line_no,
        reason,
    };
    let mut parts = tokens(line);
    let source = field::<usize>(parts.next(), "source vertex").map_err(invalid)?;
    let target = field::<usize>(parts.next(), "target vertex").map_err(invalid)?;
    let weight = field::<Weight>(parts.next(), "weight").map_err(invalid)?;
    Ok(InputEdge::new(source, target, weight))
}

fn field<T>(token: Option<&str>, what: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let token = token.ok_or_else(|| format!("missing {what}"))?;
    token
        .parse()
        .map_err(|error| format!("{what} `{token}`: {error}"))
}
