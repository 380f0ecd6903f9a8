use super::{PathTable, PathWeight};
use crate::model::graph::{DirectedWeightedGraph, EdgeId, GraphError, VertexId};
use std::sync::Arc;

/// result of a point-to-point query: the total weight and the edges to
/// traverse, in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInfo<W> {
    pub weight: W,
    pub edges: Vec<EdgeId>,
}

/// answers shortest path queries over a graph using its precomputed [`PathTable`].
///
/// the graph is shared behind an [`Arc`] and never mutated, so a finder can
/// serve concurrent readers once constructed.
#[derive(Debug, Clone)]
pub struct PathFinder<W> {
    graph: Arc<DirectedWeightedGraph<W>>,
    table: PathTable<W>,
}

impl<W: PathWeight> PathFinder<W> {
    /// computes the path table for `graph`.
    pub fn new(graph: Arc<DirectedWeightedGraph<W>>) -> Result<Self, GraphError> {
        let table = PathTable::build(&graph)?;
        Ok(Self { graph, table })
    }

    /// pairs a graph with a table loaded from storage instead of recomputing it.
    /// the table must have been computed from this same graph.
    pub fn from_table(
        graph: Arc<DirectedWeightedGraph<W>>,
        table: PathTable<W>,
    ) -> Result<Self, GraphError> {
        table.validate_against(&graph)?;
        Ok(Self { graph, table })
    }

    /// finds the lightest path from `from` to `to`, or None when `to` cannot be
    /// reached. the path from a vertex to itself is empty with the zero weight.
    pub fn find_path(&self, from: VertexId, to: VertexId) -> Option<PathInfo<W>> {
        let entry = self.table.entry(from, to)?;
        let mut edges = vec![];
        let mut prev_edge = entry.prev_edge;
        while let Some(edge_id) = prev_edge {
            if edges.len() >= self.graph.edge_count() {
                // predecessor links loop back on themselves
                log::error!("path table is inconsistent with its graph for ({from}, {to})");
                return None;
            }
            edges.push(edge_id);
            let edge = self.graph.get_edge(edge_id);
            prev_edge = self
                .table
                .entry(from, edge.src_vertex_id)
                .and_then(|e| e.prev_edge);
        }
        edges.reverse();
        Some(PathInfo {
            weight: entry.weight.clone(),
            edges,
        })
    }
}

impl<W> PathFinder<W> {
    pub fn graph(&self) -> &Arc<DirectedWeightedGraph<W>> {
        &self.graph
    }

    pub fn table(&self) -> &PathTable<W> {
        &self.table
    }
}
