use super::PersistenceError;
use crate::config::RoutingSettings;
use crate::model::router::{EdgeWeight, RouteGraph, TransportRouter};
use busnet_catalogue::catalogue::{CatalogueReader, CatalogueSnapshot, TransportCatalogue};
use busnet_core::algorithm::shortest_path::PathTable;
use busnet_core::model::graph::GraphSnapshot;
use serde::{Deserialize, Serialize};

/// everything needed to answer requests without rebuilding: the catalogue,
/// the routing settings, the routing graph with its edge labels and its
/// precomputed path table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub catalogue: CatalogueSnapshot,
    pub routing_settings: RoutingSettings,
    pub graph: GraphSnapshot<EdgeWeight>,
    pub edge_labels: Vec<String>,
    pub path_table: PathTable<EdgeWeight>,
}

impl Snapshot {
    pub fn new(catalogue: &TransportCatalogue, router: &TransportRouter) -> Snapshot {
        Snapshot {
            catalogue: catalogue.to_snapshot(),
            routing_settings: *router.settings(),
            graph: GraphSnapshot::from(router.graph()),
            edge_labels: router.edge_labels().to_vec(),
            path_table: router.path_table().clone(),
        }
    }

    /// rebuilds the catalogue and router. the path table is reused as stored.
    pub fn restore(self) -> Result<(TransportCatalogue, TransportRouter), PersistenceError> {
        let catalogue = TransportCatalogue::try_from(self.catalogue)?;
        let graph = RouteGraph::try_from(self.graph)?;
        let router = TransportRouter::from_parts(
            self.routing_settings,
            graph,
            self.edge_labels,
            self.path_table,
            &catalogue.stop_names(),
        )?;
        log::info!(
            "restored {} stops, {} routes and a routing graph of {} edges",
            catalogue.stops().len(),
            catalogue.routes().len(),
            router.graph().edge_count()
        );
        Ok((catalogue, router))
    }
}
