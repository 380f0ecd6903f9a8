use super::{Edge, IncidenceList};
use serde::{Deserialize, Serialize};

/// the persisted shape of a [`super::DirectedWeightedGraph`]: its edge list
/// with weights and the per-vertex incidence lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot<W> {
    pub vertex_count: usize,
    pub edges: Vec<Edge<W>>,
    pub incidence_lists: Vec<IncidenceList>,
}
