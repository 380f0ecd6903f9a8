mod directed_weighted_graph;
mod edge;
mod edge_id;
mod graph_error;
mod graph_snapshot;
mod vertex_id;

pub use directed_weighted_graph::DirectedWeightedGraph;
pub use edge::Edge;
pub use edge_id::EdgeId;
pub use graph_error::GraphError;
pub use graph_snapshot::GraphSnapshot;
pub use vertex_id::VertexId;

pub type IncidenceList = Vec<EdgeId>;
