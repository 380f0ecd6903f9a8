use super::{EdgeWeight, StopVertexIndex, StopVertices};
use crate::config::RoutingSettings;
use busnet_catalogue::catalogue::CatalogueReader;
use busnet_core::model::graph::{DirectedWeightedGraph, Edge, EdgeId};
use itertools::Itertools;
use std::collections::BTreeSet;

pub type RouteGraph = DirectedWeightedGraph<EdgeWeight>;

/// a routing graph together with the name behind each edge and the vertex
/// pair of each stop.
#[derive(Debug, Clone)]
pub struct RoutingGraph {
    pub graph: RouteGraph,
    /// indexed by edge id: the stop name of a wait edge, the route name of a
    /// ride edge
    pub edge_labels: Vec<String>,
    pub index: StopVertexIndex,
}

impl RoutingGraph {
    fn new(index: StopVertexIndex) -> RoutingGraph {
        RoutingGraph {
            graph: RouteGraph::new(index.vertex_count()),
            edge_labels: vec![],
            index,
        }
    }

    fn add_edge(&mut self, edge: Edge<EdgeWeight>, label: &str) -> EdgeId {
        self.edge_labels.push(label.to_string());
        self.graph.add_edge(edge)
    }
}

/// builds the wait/ride routing graph of a catalogue.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    settings: RoutingSettings,
}

impl GraphBuilder {
    pub fn new(settings: RoutingSettings) -> GraphBuilder {
        GraphBuilder { settings }
    }

    /// creates the routing graph for the named stops and routes of `catalogue`.
    ///
    /// vertex ids depend only on `stop_names`, and edges are added in sorted
    /// stop order followed by sorted route order, so the same input always
    /// yields the same graph.
    ///
    /// # Panics
    ///
    /// when a route or a stop on a route is unknown to `catalogue` or missing
    /// from `stop_names`.
    pub fn build<C: CatalogueReader>(
        &self,
        catalogue: &C,
        route_names: &BTreeSet<&str>,
        stop_names: &BTreeSet<&str>,
    ) -> RoutingGraph {
        let mut routing = RoutingGraph::new(StopVertexIndex::new(stop_names));

        let wait_time = self.settings.wait_time_minutes();
        for stop_name in stop_names.iter() {
            let vertices = stop_vertices(&routing.index, stop_name);
            routing.add_edge(
                Edge::new(vertices.wait, vertices.ride, EdgeWeight::wait(wait_time)),
                stop_name,
            );
        }
        let n_wait_edges = routing.graph.edge_count();

        for route_name in route_names.iter() {
            let route = catalogue.route_stops(route_name);
            let before = routing.graph.edge_count();
            self.add_traversal(&mut routing, catalogue, route_name, &route.stops);
            if !route.kind.is_roundtrip() {
                let reversed = route.stops.iter().rev().copied().collect_vec();
                self.add_traversal(&mut routing, catalogue, route_name, &reversed);
            }
            log::debug!(
                "route {} ({}, {} stops) added {} ride edges",
                route_name,
                route.kind,
                route.stops.len(),
                routing.graph.edge_count() - before
            );
        }

        log::info!(
            "built routing graph with {} vertices, {} wait edges and {} ride edges",
            routing.graph.vertex_count(),
            n_wait_edges,
            routing.graph.edge_count() - n_wait_edges
        );
        routing
    }

    /// adds one ride edge per boarding/alighting pair of a single pass over
    /// `stops`, weighted with the cumulative time of the hops in between.
    fn add_traversal<C: CatalogueReader>(
        &self,
        routing: &mut RoutingGraph,
        catalogue: &C,
        route_name: &str,
        stops: &[&str],
    ) {
        let hop_times = stops
            .iter()
            .tuple_windows()
            .map(|(src, dst)| {
                let meters = catalogue.ground_distance(src, dst);
                self.settings.travel_time_minutes(meters)
            })
            .collect_vec();

        for (board_idx, board_stop) in stops.iter().enumerate() {
            let board = stop_vertices(&routing.index, board_stop);
            let mut time = 0.0;
            for (alight_idx, alight_stop) in stops.iter().enumerate().skip(board_idx + 1) {
                time += hop_times[alight_idx - 1];
                let alight = stop_vertices(&routing.index, alight_stop);
                let weight = EdgeWeight::ride(time, alight_idx - board_idx);
                routing.add_edge(Edge::new(board.ride, alight.wait, weight), route_name);
            }
        }
    }
}

fn stop_vertices(index: &StopVertexIndex, stop_name: &str) -> StopVertices {
    index
        .get(stop_name)
        .unwrap_or_else(|| panic!("stop '{stop_name}' has no vertices in the routing graph"))
}
