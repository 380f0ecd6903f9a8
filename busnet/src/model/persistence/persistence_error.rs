use crate::model::router::RouterError;
use busnet_catalogue::catalogue::CatalogueError;
use busnet_core::model::graph::GraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("file {0} already exists and overwrite is disabled")]
    FileExists(String),
    #[error("failure reading or writing snapshot: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding or decoding snapshot: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("snapshot contains an invalid catalogue: {source}")]
    CatalogueError {
        #[from]
        source: CatalogueError,
    },
    #[error("snapshot contains an invalid routing graph: {source}")]
    GraphError {
        #[from]
        source: GraphError,
    },
    #[error("failure restoring router from snapshot: {source}")]
    RouterError {
        #[from]
        source: RouterError,
    },
}
