use super::VertexId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<W> {
    pub src_vertex_id: VertexId,
    pub dst_vertex_id: VertexId,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(src_vertex_id: VertexId, dst_vertex_id: VertexId, weight: W) -> Self {
        Self {
            src_vertex_id,
            dst_vertex_id,
            weight,
        }
    }
}
