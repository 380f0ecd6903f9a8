use busnet_core::model::graph::GraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouterError {
    #[error("invalid routing settings: {0}")]
    InvalidSettings(String),
    #[error("failure preparing routing graph: {source}")]
    GraphError {
        #[from]
        source: GraphError,
    },
    #[error("catalogue stops map to {expected} vertices but the routing graph has {found}")]
    StopIndexMismatch { expected: usize, found: usize },
    #[error("routing graph has {edge_count} edges but {label_count} edge labels")]
    EdgeLabelMismatch {
        edge_count: usize,
        label_count: usize,
    },
}
