use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};

use crate::{
    Graph,
    error::{Error, Result},
    types::VertexId,
};

/// Reads a graph from a file.
///
/// Undirected multigraph input:
/// - one line, one edge in format "u,v",
/// - vertices are numbered from 0; every vertex up to the largest number used
///   is created, with its number as content,
/// - blank lines are skipped.
///
/// Parallel edges and self-loops are kept. Edges get ids in file order.
///
/// Example input:
/// ```text
/// 0,1
/// 1,2
/// 2,3
/// 2,4
/// 4,5
/// 5,6
/// 4,7
/// 7,8
/// 2,0
/// 3,0
/// 4,1
/// 6,2
/// 6,4
/// 8,1
/// ```
pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Graph> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    parse_graph_from_custom_format(reader)
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<Graph> {
    let cursor = Cursor::new(input);
    let reader = BufReader::new(cursor);
    parse_graph_from_custom_format(reader)
}

fn parse_graph_from_custom_format<R: BufRead>(reader: R) -> Result<Graph> {
    let mut edges = Vec::new();
    let mut max_node = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parse_error = |message: String| Error::Parse {
            line: i + 1,
            message,
        };
        let Some((u, v)) = line.split_once(',') else {
            return Err(parse_error(format!("expected 'u,v', got '{line}'")));
        };
        let parse_vertex = |s: &str| {
            s.trim()
                .parse::<u32>()
                .map_err(|e| parse_error(format!("bad vertex '{}': {e}", s.trim())))
        };
        let (u, v) = (parse_vertex(u)?, parse_vertex(v)?);

        max_node = max_node.max(Some(u.max(v)));
        edges.push((u, v));
    }

    let n = max_node.map_or(0, |x| x as usize + 1);
    let mut graph = Graph::with_capacity(n, edges.len());
    for i in 0..n {
        graph.add_vertex(i as u32);
    }
    for (u, v) in edges {
        graph.add_edge(VertexId::new(u as usize), VertexId::new(v as usize))?;
    }

    tracing::debug!(vertices = n, edges = graph.edge_count(), "graph read");

    Ok(graph)
}
