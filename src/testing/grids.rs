use crate::{Graph, types::VertexId};

/// Generates a grid graph with the specified number of rows and columns.
pub fn generate_grid_graph(rows: usize, cols: usize) -> Graph {
    assert!(rows > 1 && cols > 1); // we want biconnected graph
    let mut graph = Graph::with_capacity(rows * cols, 2 * rows * cols);

    for r in 0..rows {
        for c in 0..cols {
            graph.add_vertex((r * cols + c) as u32);
        }
    }

    let mut edge = |a: usize, b: usize| {
        graph
            .add_edge(VertexId::new(a), VertexId::new(b))
            .expect("grid vertices exist");
    };
    for r in 0..rows {
        for c in 0..cols {
            if r + 1 < rows {
                edge(r * cols + c, (r + 1) * cols + c);
            }
            if c + 1 < cols {
                edge(r * cols + c, r * cols + c + 1);
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        let grid = generate_grid_graph(3, 4);
        assert_eq!(grid.vertex_count(), 12);
        assert_eq!(grid.edge_count(), 2 * 12 - 3 - 4);
        assert!(grid.is_biconnected());
    }
}
