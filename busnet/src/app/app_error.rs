use crate::model::{persistence::PersistenceError, router::RouterError};
use busnet_catalogue::catalogue::CatalogueError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading or writing requests: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("invalid base request: {source}")]
    CatalogueError {
        #[from]
        source: CatalogueError,
    },
    #[error("failure building router: {source}")]
    RouterError {
        #[from]
        source: RouterError,
    },
    #[error("failure persisting base: {source}")]
    PersistenceError {
        #[from]
        source: PersistenceError,
    },
}
