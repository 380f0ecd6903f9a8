//! transit routing over a [`busnet_catalogue::catalogue::CatalogueReader`].
//!
//! every stop is modelled by two vertices: a wait vertex (standing at the
//! stop) and a ride vertex (on board, having just boarded there). a wait edge
//! joins them with the boarding wait time. every span of consecutive stops a
//! bus can carry a passenger over becomes one ride edge from the boarding
//! stop's ride vertex to the alighting stop's wait vertex.
mod edge_weight;
mod graph_builder;
mod itinerary;
mod router_error;
mod stop_vertex_index;
mod transport_router;

pub use edge_weight::EdgeWeight;
pub use graph_builder::{GraphBuilder, RouteGraph, RoutingGraph};
pub use itinerary::{Itinerary, ItineraryStep};
pub use router_error::RouterError;
pub use stop_vertex_index::{StopVertexIndex, StopVertices};
pub use transport_router::TransportRouter;
