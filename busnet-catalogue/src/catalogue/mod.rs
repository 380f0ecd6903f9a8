mod catalogue_error;
mod catalogue_reader;
mod catalogue_snapshot;
mod route_stats;
mod transport_catalogue;

pub use catalogue_error::CatalogueError;
pub use catalogue_reader::{CatalogueReader, RouteStops};
pub use catalogue_snapshot::{CatalogueSnapshot, DistanceRecord, RouteRecord};
pub use route_stats::{great_circle_distance, RouteStats};
pub use transport_catalogue::TransportCatalogue;
