use busnet_core::model::graph::VertexId;
use std::collections::{BTreeSet, HashMap};

/// the two routing graph vertices standing for one stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StopVertices {
    /// waiting at the stop
    pub wait: VertexId,
    /// on board a bus that was just boarded at the stop
    pub ride: VertexId,
}

/// stop name to vertex pair lookup. stops are numbered in sorted name order,
/// two vertices each, so the same stop set always yields the same ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopVertexIndex {
    vertices: HashMap<String, StopVertices>,
}

impl StopVertexIndex {
    pub fn new(stop_names: &BTreeSet<&str>) -> StopVertexIndex {
        let vertices = stop_names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let pair = StopVertices {
                    wait: VertexId(idx * 2),
                    ride: VertexId(idx * 2 + 1),
                };
                (name.to_string(), pair)
            })
            .collect();
        StopVertexIndex { vertices }
    }

    pub fn get(&self, stop_name: &str) -> Option<StopVertices> {
        self.vertices.get(stop_name).copied()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() * 2
    }
}
