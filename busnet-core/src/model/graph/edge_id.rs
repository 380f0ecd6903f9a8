use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// position of an edge in the append-only edge storage of a
/// [`super::DirectedWeightedGraph`]. stable for the lifetime of the graph.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct EdgeId(pub usize);

impl Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
