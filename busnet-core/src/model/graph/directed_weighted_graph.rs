use super::{Edge, EdgeId, GraphError, GraphSnapshot, IncidenceList, VertexId};

/// a directed graph with weighted edges and a fixed vertex count.
///
/// edges are only ever appended, so an [`EdgeId`] handed out by [`Self::add_edge`]
/// refers to the same edge for the lifetime of the graph. this is what allows
/// path tables computed over the graph to be persisted and reloaded.
#[derive(Debug, Clone)]
pub struct DirectedWeightedGraph<W> {
    edges: Vec<Edge<W>>,
    incidence_lists: Vec<IncidenceList>,
}

impl<W> DirectedWeightedGraph<W> {
    /// creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: vec![],
            incidence_lists: vec![vec![]; vertex_count],
        }
    }

    /// appends an edge, registering it with the incidence list of its source vertex.
    ///
    /// # Panics
    ///
    /// if the source vertex is not part of this graph.
    pub fn add_edge(&mut self, edge: Edge<W>) -> EdgeId {
        let edge_id = EdgeId(self.edges.len());
        self.incidence_lists[edge.src_vertex_id.0].push(edge_id);
        self.edges.push(edge);
        edge_id
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence_lists.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// # Panics
    ///
    /// if `edge_id` is not less than [`Self::edge_count`].
    pub fn get_edge(&self, edge_id: EdgeId) -> &Edge<W> {
        &self.edges[edge_id.0]
    }

    /// edges leaving `vertex_id`, in insertion order.
    ///
    /// # Panics
    ///
    /// if `vertex_id` is not less than [`Self::vertex_count`].
    pub fn incident_edges(&self, vertex_id: VertexId) -> &[EdgeId] {
        &self.incidence_lists[vertex_id.0]
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<W>)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(idx, edge)| (EdgeId(idx), edge))
    }

    pub fn incidence_lists(&self) -> &[IncidenceList] {
        &self.incidence_lists
    }
}

impl<W: Clone> From<&DirectedWeightedGraph<W>> for GraphSnapshot<W> {
    fn from(graph: &DirectedWeightedGraph<W>) -> Self {
        GraphSnapshot {
            vertex_count: graph.vertex_count(),
            edges: graph.edges.clone(),
            incidence_lists: graph.incidence_lists.clone(),
        }
    }
}

impl<W> TryFrom<GraphSnapshot<W>> for DirectedWeightedGraph<W> {
    type Error = GraphError;

    /// rebuilds a graph from its persisted shape. the incidence lists are
    /// recomputed from the edges and compared with the stored ones, so a
    /// snapshot that was tampered with or truncated is rejected.
    fn try_from(snapshot: GraphSnapshot<W>) -> Result<Self, Self::Error> {
        let GraphSnapshot {
            vertex_count,
            edges,
            incidence_lists,
        } = snapshot;
        if incidence_lists.len() != vertex_count {
            return Err(GraphError::IncidenceListCountMismatch {
                vertex_count,
                list_count: incidence_lists.len(),
            });
        }
        let mut graph = DirectedWeightedGraph::new(vertex_count);
        for (idx, edge) in edges.into_iter().enumerate() {
            for vertex_id in [edge.src_vertex_id, edge.dst_vertex_id] {
                if vertex_id.0 >= vertex_count {
                    return Err(GraphError::EdgeVertexOutOfRange {
                        edge_id: EdgeId(idx),
                        vertex_id,
                        vertex_count,
                    });
                }
            }
            graph.add_edge(edge);
        }
        let mismatch = graph
            .incidence_lists
            .iter()
            .zip(incidence_lists.iter())
            .position(|(rebuilt, stored)| rebuilt != stored);
        match mismatch {
            Some(vertex_idx) => Err(GraphError::IncidenceListMismatch(VertexId(vertex_idx))),
            None => Ok(graph),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DirectedWeightedGraph;
    use crate::model::graph::{Edge, EdgeId, GraphError, GraphSnapshot, VertexId};

    fn diamond() -> DirectedWeightedGraph<f64> {
        let mut graph = DirectedWeightedGraph::new(4);
        graph.add_edge(Edge::new(VertexId(0), VertexId(1), 1.0));
        graph.add_edge(Edge::new(VertexId(0), VertexId(2), 2.0));
        graph.add_edge(Edge::new(VertexId(1), VertexId(3), 3.0));
        graph.add_edge(Edge::new(VertexId(2), VertexId(3), 1.0));
        graph
    }

    #[test]
    fn test_add_edge_returns_sequential_ids() {
        let mut graph = DirectedWeightedGraph::new(2);
        let a = graph.add_edge(Edge::new(VertexId(0), VertexId(1), 1.0));
        let b = graph.add_edge(Edge::new(VertexId(1), VertexId(0), 1.0));
        let c = graph.add_edge(Edge::new(VertexId(0), VertexId(1), 4.0));
        assert_eq!((a, b, c), (EdgeId(0), EdgeId(1), EdgeId(2)));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.get_edge(c).weight, 4.0);
    }

    #[test]
    fn test_incident_edges_in_insertion_order() {
        let graph = diamond();
        assert_eq!(graph.incident_edges(VertexId(0)), &[EdgeId(0), EdgeId(1)]);
        assert_eq!(graph.incident_edges(VertexId(1)), &[EdgeId(2)]);
        assert!(graph.incident_edges(VertexId(3)).is_empty());
    }

    #[test]
    fn test_every_edge_listed_under_its_source() {
        let graph = diamond();
        for (edge_id, edge) in graph.edges() {
            assert!(graph.incident_edges(edge.src_vertex_id).contains(&edge_id));
        }
        let total: usize = graph.incidence_lists().iter().map(|l| l.len()).sum();
        assert_eq!(total, graph.edge_count());
    }

    #[test]
    #[should_panic]
    fn test_get_edge_out_of_range_panics() {
        let graph = diamond();
        let _ = graph.get_edge(EdgeId(4));
    }

    #[test]
    fn test_snapshot_restores_graph() {
        let graph = diamond();
        let snapshot = GraphSnapshot::from(&graph);
        let json = serde_json::to_string(&snapshot).expect("serialize");
        let decoded: GraphSnapshot<f64> = serde_json::from_str(&json).expect("deserialize");
        let restored = DirectedWeightedGraph::try_from(decoded).expect("valid snapshot");
        assert_eq!(restored.vertex_count(), 4);
        assert_eq!(restored.edge_count(), 4);
        for (edge_id, edge) in graph.edges() {
            assert_eq!(restored.get_edge(edge_id), edge);
        }
    }

    #[test]
    fn test_snapshot_with_dangling_vertex_rejected() {
        let snapshot = GraphSnapshot {
            vertex_count: 2,
            edges: vec![Edge::new(VertexId(0), VertexId(5), 1.0)],
            incidence_lists: vec![vec![EdgeId(0)], vec![]],
        };
        let result = DirectedWeightedGraph::try_from(snapshot);
        assert!(matches!(
            result,
            Err(GraphError::EdgeVertexOutOfRange { vertex_id: VertexId(5), .. })
        ));
    }

    #[test]
    fn test_snapshot_with_wrong_incidence_rejected() {
        let snapshot = GraphSnapshot {
            vertex_count: 2,
            edges: vec![Edge::new(VertexId(0), VertexId(1), 1.0)],
            incidence_lists: vec![vec![], vec![EdgeId(0)]],
        };
        let result = DirectedWeightedGraph::try_from(snapshot);
        assert!(matches!(
            result,
            Err(GraphError::IncidenceListMismatch(VertexId(0)))
        ));
    }
}
