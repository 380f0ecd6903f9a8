use super::{
    EdgeWeight, GraphBuilder, Itinerary, ItineraryStep, RouteGraph, RouterError, RoutingGraph,
    StopVertexIndex,
};
use crate::config::RoutingSettings;
use busnet_catalogue::catalogue::CatalogueReader;
use busnet_core::algorithm::shortest_path::{PathFinder, PathTable};
use std::collections::BTreeSet;
use std::sync::Arc;

/// answers fastest itinerary queries between stops of a catalogue.
///
/// the routing graph and its path table are computed once and are read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct TransportRouter {
    settings: RoutingSettings,
    index: StopVertexIndex,
    edge_labels: Vec<String>,
    path_finder: PathFinder<EdgeWeight>,
}

impl TransportRouter {
    /// builds the routing graph of every stop and route in `catalogue` and
    /// precomputes its path table.
    pub fn build<C: CatalogueReader>(
        catalogue: &C,
        settings: RoutingSettings,
    ) -> Result<TransportRouter, RouterError> {
        settings.validate()?;
        let route_names = catalogue.route_names();
        let stop_names = catalogue.stop_names();
        log::info!(
            "building router for {} stops and {} routes",
            stop_names.len(),
            route_names.len()
        );
        let RoutingGraph {
            graph,
            edge_labels,
            index,
        } = GraphBuilder::new(settings).build(catalogue, &route_names, &stop_names);
        let path_finder = PathFinder::new(Arc::new(graph))?;
        Ok(TransportRouter {
            settings,
            index,
            edge_labels,
            path_finder,
        })
    }

    /// restores a router from a previously built graph, its edge labels and
    /// its path table. the stop names must be the ones the graph was built
    /// from.
    pub fn from_parts(
        settings: RoutingSettings,
        graph: RouteGraph,
        edge_labels: Vec<String>,
        table: PathTable<EdgeWeight>,
        stop_names: &BTreeSet<&str>,
    ) -> Result<TransportRouter, RouterError> {
        settings.validate()?;
        let index = StopVertexIndex::new(stop_names);
        if index.vertex_count() != graph.vertex_count() {
            return Err(RouterError::StopIndexMismatch {
                expected: index.vertex_count(),
                found: graph.vertex_count(),
            });
        }
        if edge_labels.len() != graph.edge_count() {
            return Err(RouterError::EdgeLabelMismatch {
                edge_count: graph.edge_count(),
                label_count: edge_labels.len(),
            });
        }
        let path_finder = PathFinder::from_table(Arc::new(graph), table)?;
        Ok(TransportRouter {
            settings,
            index,
            edge_labels,
            path_finder,
        })
    }

    /// finds the fastest way to travel from stop `from` to stop `to`, starting
    /// with the wait for the first bus. None when either stop is unknown or
    /// `to` cannot be reached.
    pub fn find_fastest_itinerary(&self, from: &str, to: &str) -> Option<Itinerary> {
        let src = self.index.get(from)?;
        let dst = self.index.get(to)?;
        let path = self.path_finder.find_path(src.wait, dst.wait)?;
        let graph = self.path_finder.graph();
        let steps = path
            .edges
            .iter()
            .map(|edge_id| {
                let weight = &graph.get_edge(*edge_id).weight;
                ItineraryStep::new(weight, &self.edge_labels[edge_id.0])
            })
            .collect::<Vec<_>>();
        let total_time = steps.iter().map(ItineraryStep::time).sum();
        Some(Itinerary { total_time, steps })
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &RouteGraph {
        self.path_finder.graph()
    }

    /// stop or route name of each edge, indexed by edge id
    pub fn edge_labels(&self) -> &[String] {
        &self.edge_labels
    }

    pub fn path_table(&self) -> &PathTable<EdgeWeight> {
        self.path_finder.table()
    }
}

#[cfg(test)]
mod tests {
    use super::TransportRouter;
    use crate::config::RoutingSettings;
    use crate::model::router::{Itinerary, ItineraryStep, RouterError};
    use busnet_catalogue::catalogue::{CatalogueReader, TransportCatalogue};
    use busnet_catalogue::model::{RouteKind, Stop};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, found {actual}"
        );
    }

    fn step_times_sum(itinerary: &Itinerary) -> f64 {
        itinerary.steps.iter().map(|s| s.time()).sum()
    }

    #[test]
    fn test_wait_then_ride() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop(Stop::new("X", 55.0, 37.0)).unwrap();
        catalogue.add_stop(Stop::new("Y", 55.01, 37.0)).unwrap();
        catalogue.set_distance("X", "Y", 1000.0).unwrap();
        catalogue.set_distance("Y", "X", 1000.0).unwrap();
        catalogue
            .add_route("R", RouteKind::Circular, &["X", "Y", "X"])
            .unwrap();
        let router = TransportRouter::build(&catalogue, RoutingSettings::new(5, 60.0).unwrap()).unwrap();

        let itinerary = router.find_fastest_itinerary("X", "Y").unwrap();
        assert_close(itinerary.total_time, 6.0);
        assert_eq!(itinerary.steps.len(), 2);
        assert_eq!(
            itinerary.steps[0],
            ItineraryStep::Wait {
                stop_name: String::from("X"),
                time: 5.0
            }
        );
        match &itinerary.steps[1] {
            ItineraryStep::Ride {
                route_name,
                span_count,
                time,
            } => {
                assert_eq!(route_name, "R");
                assert_eq!(*span_count, 1);
                assert_close(*time, 1.0);
            }
            other => panic!("expected a ride step, found {other:?}"),
        }
    }

    #[test]
    fn test_unconnected_and_unknown_stops() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop(Stop::new("A", 55.0, 37.0)).unwrap();
        catalogue.add_stop(Stop::new("B", 55.01, 37.0)).unwrap();
        catalogue.add_stop(Stop::new("Island", 56.0, 38.0)).unwrap();
        catalogue.set_distance("A", "B", 500.0).unwrap();
        catalogue.add_route("1", RouteKind::Linear, &["A", "B"]).unwrap();
        let router = TransportRouter::build(&catalogue, RoutingSettings::new(2, 30.0).unwrap()).unwrap();

        assert!(router.find_fastest_itinerary("A", "Island").is_none());
        assert!(router.find_fastest_itinerary("Island", "B").is_none());
        assert!(router.find_fastest_itinerary("A", "Nowhere").is_none());
        assert!(router.find_fastest_itinerary("Nowhere", "A").is_none());
        assert!(router.find_fastest_itinerary("B", "A").is_some());
    }

    #[test]
    fn test_same_stop_is_empty_itinerary() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop(Stop::new("A", 55.0, 37.0)).unwrap();
        let router = TransportRouter::build(&catalogue, RoutingSettings::new(2, 30.0).unwrap()).unwrap();
        let itinerary = router.find_fastest_itinerary("A", "A").unwrap();
        assert_eq!(itinerary.total_time, 0.0);
        assert!(itinerary.steps.is_empty());
    }

    /// two routes reach the far stop in the same time; the answer must not change
    /// between calls.
    #[test]
    fn test_equal_time_paths_are_stable() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop(Stop::new("Start", 55.0, 37.0)).unwrap();
        catalogue.add_stop(Stop::new("End", 55.02, 37.0)).unwrap();
        catalogue.set_distance("Start", "End", 2000.0).unwrap();
        catalogue
            .add_route("north", RouteKind::Linear, &["Start", "End"])
            .unwrap();
        catalogue
            .add_route("south", RouteKind::Linear, &["Start", "End"])
            .unwrap();
        let router = TransportRouter::build(&catalogue, RoutingSettings::new(3, 60.0).unwrap()).unwrap();

        let first = router.find_fastest_itinerary("Start", "End").unwrap();
        assert_close(first.total_time, 5.0);
        for _ in 0..10 {
            assert_eq!(router.find_fastest_itinerary("Start", "End").unwrap(), first);
        }
    }

    #[test]
    fn test_transfer_between_routes() {
        // A -1- B -2- C: going from A to C needs a second wait at B
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop(Stop::new("A", 55.0, 37.0)).unwrap();
        catalogue.add_stop(Stop::new("B", 55.01, 37.0)).unwrap();
        catalogue.add_stop(Stop::new("C", 55.02, 37.0)).unwrap();
        catalogue.set_distance("A", "B", 1000.0).unwrap();
        catalogue.set_distance("B", "C", 3000.0).unwrap();
        catalogue.add_route("1", RouteKind::Linear, &["A", "B"]).unwrap();
        catalogue.add_route("2", RouteKind::Linear, &["B", "C"]).unwrap();
        let router = TransportRouter::build(&catalogue, RoutingSettings::new(4, 60.0).unwrap()).unwrap();

        let itinerary = router.find_fastest_itinerary("A", "C").unwrap();
        assert_close(itinerary.total_time, 4.0 + 1.0 + 4.0 + 3.0);
        assert_eq!(itinerary.total_time, step_times_sum(&itinerary));
        let kinds = itinerary
            .steps
            .iter()
            .map(|s| matches!(s, ItineraryStep::Wait { .. }))
            .collect::<Vec<_>>();
        assert_eq!(kinds, vec![true, false, true, false]);
    }

    #[test]
    fn test_skips_intermediate_stops_in_one_ride() {
        let mut catalogue = TransportCatalogue::new();
        for (name, lat) in [("A", 55.0), ("B", 55.01), ("C", 55.02), ("D", 55.03)] {
            catalogue.add_stop(Stop::new(name, lat, 37.0)).unwrap();
        }
        catalogue.set_distance("A", "B", 1000.0).unwrap();
        catalogue.set_distance("B", "C", 1000.0).unwrap();
        catalogue.set_distance("C", "D", 1000.0).unwrap();
        catalogue
            .add_route("long", RouteKind::Linear, &["A", "B", "C", "D"])
            .unwrap();
        let router = TransportRouter::build(&catalogue, RoutingSettings::new(6, 60.0).unwrap()).unwrap();

        let itinerary = router.find_fastest_itinerary("D", "A").unwrap();
        assert_close(itinerary.total_time, 9.0);
        assert_eq!(itinerary.steps.len(), 2);
        assert!(matches!(
            itinerary.steps[1],
            ItineraryStep::Ride { span_count: 3, .. }
        ));
    }

    #[test]
    fn test_restore_from_parts() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop(Stop::new("A", 55.0, 37.0)).unwrap();
        catalogue.add_stop(Stop::new("B", 55.01, 37.0)).unwrap();
        catalogue.set_distance("A", "B", 1200.0).unwrap();
        catalogue.add_route("7", RouteKind::Linear, &["A", "B"]).unwrap();
        let settings = RoutingSettings::new(3, 40.0).unwrap();
        let router = TransportRouter::build(&catalogue, settings).unwrap();

        let restored = TransportRouter::from_parts(
            settings,
            router.graph().clone(),
            router.edge_labels().to_vec(),
            router.path_table().clone(),
            &catalogue.stop_names(),
        )
        .unwrap();
        assert_eq!(
            restored.find_fastest_itinerary("B", "A"),
            router.find_fastest_itinerary("B", "A")
        );

        let mut fewer_stops = catalogue.stop_names();
        fewer_stops.remove("B");
        let mismatch = TransportRouter::from_parts(
            settings,
            router.graph().clone(),
            router.edge_labels().to_vec(),
            router.path_table().clone(),
            &fewer_stops,
        );
        assert!(matches!(mismatch, Err(RouterError::StopIndexMismatch { .. })));

        let mut short_labels = router.edge_labels().to_vec();
        short_labels.pop();
        let mismatch = TransportRouter::from_parts(
            settings,
            router.graph().clone(),
            short_labels,
            router.path_table().clone(),
            &catalogue.stop_names(),
        );
        assert!(matches!(
            mismatch,
            Err(RouterError::EdgeLabelMismatch {
                edge_count: 4,
                label_count: 3
            })
        ));
    }

    fn mixed_network() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        for (name, lat, lon) in [
            ("Depot", 55.0, 37.0),
            ("Market", 55.01, 37.01),
            ("Square", 55.02, 37.0),
            ("Harbour", 55.03, 37.02),
            ("Mill", 55.015, 37.03),
            ("Nowhere", 56.0, 38.0),
        ] {
            catalogue.add_stop(Stop::new(name, lat, lon)).unwrap();
        }
        catalogue.set_distance("Depot", "Market", 1300.0).unwrap();
        catalogue.set_distance("Market", "Depot", 1700.0).unwrap();
        catalogue.set_distance("Market", "Square", 900.0).unwrap();
        catalogue.set_distance("Square", "Harbour", 2100.0).unwrap();
        catalogue.set_distance("Harbour", "Mill", 1100.0).unwrap();
        catalogue.set_distance("Mill", "Market", 800.0).unwrap();
        catalogue.set_distance("Square", "Mill", 1250.0).unwrap();
        catalogue
            .add_route("10", RouteKind::Linear, &["Depot", "Market", "Square", "Harbour"])
            .unwrap();
        catalogue
            .add_route("ring", RouteKind::Circular, &["Market", "Square", "Harbour", "Mill", "Market"])
            .unwrap();
        catalogue
            .add_route("shuttle", RouteKind::Linear, &["Square", "Mill"])
            .unwrap();
        catalogue
    }

    #[test]
    fn test_rebuilt_router_answers_every_pair_identically() {
        let catalogue = mixed_network();
        let settings = RoutingSettings::new(4, 35.0).unwrap();
        let first = TransportRouter::build(&catalogue, settings).unwrap();
        let second = TransportRouter::build(&catalogue, settings).unwrap();

        let mut answered = 0;
        for from in catalogue.stop_names() {
            for to in catalogue.stop_names() {
                let expected = first.find_fastest_itinerary(from, to);
                if let Some(itinerary) = &expected {
                    answered += 1;
                    assert_eq!(itinerary.total_time, step_times_sum(itinerary), "{from} -> {to}");
                }
                assert_eq!(second.find_fastest_itinerary(from, to), expected, "{from} -> {to}");
            }
        }
        // five connected stops reach each other, Nowhere only reaches itself
        assert_eq!(answered, 26);
    }
}
