use super::{EdgeId, VertexId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("edge '{edge_id}' references vertex '{vertex_id}' but the graph has {vertex_count} vertices")]
    EdgeVertexOutOfRange {
        edge_id: EdgeId,
        vertex_id: VertexId,
        vertex_count: usize,
    },
    #[error("graph has {vertex_count} vertices but {list_count} incidence lists")]
    IncidenceListCountMismatch {
        vertex_count: usize,
        list_count: usize,
    },
    #[error("incidence list for vertex '{0}' does not match the edges leaving it")]
    IncidenceListMismatch(VertexId),
    #[error("edge '{0}' has a weight below zero, which shortest path search does not support")]
    NegativeWeight(EdgeId),
    #[error("path table has {rows} rows of width {width} but graph has {vertex_count} vertices")]
    PathTableShapeMismatch {
        rows: usize,
        width: usize,
        vertex_count: usize,
    },
    #[error("path table references edge '{edge_id}' but graph only has {edge_count} edges")]
    PathTableEdgeOutOfRange { edge_id: EdgeId, edge_count: usize },
}
