use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("stop '{0}' is already in the catalogue")]
    DuplicateStop(String),
    #[error("route '{0}' is already in the catalogue")]
    DuplicateRoute(String),
    #[error("stop '{0}' is not in the catalogue")]
    UnknownStop(String),
    #[error("route '{route}' references stop '{stop}' which is not in the catalogue")]
    UnknownRouteStop { route: String, stop: String },
    #[error("road distance from '{from}' to '{to}' must be a finite, non-negative number of meters, found {meters}")]
    InvalidDistance { from: String, to: String, meters: f64 },
}
