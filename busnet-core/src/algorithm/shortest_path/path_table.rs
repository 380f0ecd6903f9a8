use super::PathWeight;
use crate::model::graph::{DirectedWeightedGraph, EdgeId, GraphError, VertexId};
use kdam::tqdm;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// best known path between an ordered pair of vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEntry<W> {
    /// total weight of the path
    pub weight: W,
    /// last edge of the path, or None for the empty path from a vertex to itself
    pub prev_edge: Option<EdgeId>,
}

type PathRow<W> = Vec<Option<PathEntry<W>>>;

/// all-pairs shortest path table. row `u`, column `v` holds the best path
/// from `u` to `v`, or None when `v` is unreachable from `u`.
///
/// a table is only meaningful alongside the graph it was computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathTable<W> {
    rows: Vec<PathRow<W>>,
}

impl<W: PathWeight> PathTable<W> {
    /// computes the table for every pair of vertices in `graph`.
    pub fn build(graph: &DirectedWeightedGraph<W>) -> Result<Self, GraphError> {
        let mut rows = initial_rows(graph)?;
        let vertex_count = graph.vertex_count();
        log::info!(
            "computing shortest paths for {} vertices, {} edges",
            vertex_count,
            graph.edge_count()
        );
        let passes = tqdm!(
            0..vertex_count,
            total = vertex_count,
            desc = "relax shortest paths"
        );
        for through in passes {
            relax_through(&mut rows, through);
        }
        eprintln!();
        Ok(Self { rows })
    }
}

impl<W> PathTable<W> {
    pub fn entry(&self, from: VertexId, to: VertexId) -> Option<&PathEntry<W>> {
        self.rows
            .get(from.0)
            .and_then(|row| row.get(to.0))
            .and_then(|entry| entry.as_ref())
    }

    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    /// confirms this table has one row and column per vertex of `graph` and
    /// that every predecessor edge exists in it. a table that passes this check
    /// may still come from a different graph: that remains the caller's duty.
    pub fn validate_against(&self, graph: &DirectedWeightedGraph<W>) -> Result<(), GraphError> {
        let vertex_count = graph.vertex_count();
        let bad_row = self.rows.iter().find(|row| row.len() != vertex_count);
        if self.rows.len() != vertex_count || bad_row.is_some() {
            return Err(GraphError::PathTableShapeMismatch {
                rows: self.rows.len(),
                width: bad_row.map(|row| row.len()).unwrap_or(vertex_count),
                vertex_count,
            });
        }
        let edge_count = graph.edge_count();
        let dangling = self
            .rows
            .iter()
            .flatten()
            .flatten()
            .filter_map(|entry| entry.prev_edge)
            .find(|edge_id| edge_id.0 >= edge_count);
        match dangling {
            Some(edge_id) => Err(GraphError::PathTableEdgeOutOfRange {
                edge_id,
                edge_count,
            }),
            None => Ok(()),
        }
    }
}

/// seeds the table with the empty path on the diagonal and the lightest
/// direct edge for every connected pair.
fn initial_rows<W: PathWeight>(
    graph: &DirectedWeightedGraph<W>,
) -> Result<Vec<PathRow<W>>, GraphError> {
    let vertex_count = graph.vertex_count();
    let zero = W::default();
    let mut rows: Vec<PathRow<W>> = vec![vec![None; vertex_count]; vertex_count];
    for (vertex_idx, row) in rows.iter_mut().enumerate() {
        row[vertex_idx] = Some(PathEntry {
            weight: zero.clone(),
            prev_edge: None,
        });
        for edge_id in graph.incident_edges(VertexId(vertex_idx)) {
            let edge = graph.get_edge(*edge_id);
            if edge.weight < zero {
                return Err(GraphError::NegativeWeight(*edge_id));
            }
            let slot = &mut row[edge.dst_vertex_id.0];
            let replace = match slot {
                None => true,
                Some(existing) => existing.weight > edge.weight,
            };
            if replace {
                *slot = Some(PathEntry {
                    weight: edge.weight.clone(),
                    prev_edge: Some(*edge_id),
                });
            }
        }
    }
    Ok(rows)
}

/// relaxes every pair (u, v) through the intermediate vertex `through`.
///
/// row and column `through` cannot improve during their own pass (the
/// diagonal holds the zero weight), so rows are relaxed in parallel against
/// a copy of row `through` with the same outcome as a sequential sweep.
fn relax_through<W: PathWeight>(rows: &mut [PathRow<W>], through: usize) {
    let through_row = rows[through].clone();
    rows.par_iter_mut().for_each(|row| {
        let Some(from_through) = row[through].clone() else {
            return;
        };
        for (to, through_to) in through_row.iter().enumerate() {
            let Some(through_to) = through_to else {
                continue;
            };
            let candidate = from_through.weight.clone() + through_to.weight.clone();
            let slot = &mut row[to];
            let improves = match slot {
                None => true,
                Some(current) => candidate < current.weight,
            };
            if improves {
                *slot = Some(PathEntry {
                    weight: candidate,
                    prev_edge: through_to.prev_edge.or(from_through.prev_edge),
                });
            }
        }
    });
}
