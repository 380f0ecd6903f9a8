//! all-pairs shortest paths over a [`crate::model::graph::DirectedWeightedGraph`].
//!
//! the table is computed once with a relaxation pass per intermediate vertex
//! (Floyd-Warshall) and then answers point-to-point queries by walking
//! predecessor edges. among paths of equal weight, the one found first in
//! vertex order is kept: the choice is fixed for a given graph but is
//! otherwise unspecified.
mod path_finder;
mod path_table;
mod path_weight;

pub use path_finder::{PathFinder, PathInfo};
pub use path_table::{PathEntry, PathTable};
pub use path_weight::PathWeight;
