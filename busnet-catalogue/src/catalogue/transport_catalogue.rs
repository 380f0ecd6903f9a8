use super::{
    great_circle_distance, CatalogueError, CatalogueReader, CatalogueSnapshot, DistanceRecord,
    RouteRecord, RouteStats, RouteStops,
};
use crate::model::{Route, RouteId, RouteKind, Stop, StopId};
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};

/// stops, bus routes and road distances of a transit network.
///
/// stops and routes live in append-only arenas and are referenced by
/// [`StopId`] and [`RouteId`]; nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    routes: Vec<Route>,
    stop_lookup: HashMap<String, StopId>,
    route_lookup: HashMap<String, RouteId>,
    /// route names serving each stop, indexed by StopId
    routes_at_stop: Vec<BTreeSet<String>>,
    /// recorded road distances in meters, keyed by (from, to)
    distances: HashMap<(StopId, StopId), f64>,
}

impl TransportCatalogue {
    pub fn new() -> TransportCatalogue {
        TransportCatalogue::default()
    }

    pub fn add_stop(&mut self, stop: Stop) -> Result<StopId, CatalogueError> {
        if self.stop_lookup.contains_key(&stop.name) {
            return Err(CatalogueError::DuplicateStop(stop.name));
        }
        let stop_id = StopId(self.stops.len());
        self.stop_lookup.insert(stop.name.clone(), stop_id);
        self.stops.push(stop);
        self.routes_at_stop.push(BTreeSet::new());
        Ok(stop_id)
    }

    /// adds a route over stops already in the catalogue. circular routes list
    /// their first stop again at the end. the route is only added if every
    /// stop name resolves.
    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: &str,
        kind: RouteKind,
        stop_names: &[S],
    ) -> Result<RouteId, CatalogueError> {
        if self.route_lookup.contains_key(name) {
            return Err(CatalogueError::DuplicateRoute(name.to_string()));
        }
        let stops = stop_names
            .iter()
            .map(|stop_name| {
                let stop_name = stop_name.as_ref();
                self.stop_id(stop_name)
                    .ok_or_else(|| CatalogueError::UnknownRouteStop {
                        route: name.to_string(),
                        stop: stop_name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let route_id = RouteId(self.routes.len());
        for stop_id in stops.iter() {
            self.routes_at_stop[stop_id.0].insert(name.to_string());
        }
        self.route_lookup.insert(name.to_string(), route_id);
        self.routes.push(Route {
            name: name.to_string(),
            kind,
            stops,
        });
        Ok(route_id)
    }

    /// records the road distance when driving from `from` to `to`. setting a
    /// distance twice keeps the latest value.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: f64) -> Result<(), CatalogueError> {
        if !meters.is_finite() || meters < 0.0 {
            return Err(CatalogueError::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
                meters,
            });
        }
        let from_id = self
            .stop_id(from)
            .ok_or_else(|| CatalogueError::UnknownStop(from.to_string()))?;
        let to_id = self
            .stop_id(to)
            .ok_or_else(|| CatalogueError::UnknownStop(to.to_string()))?;
        self.distances.insert((from_id, to_id), meters);
        Ok(())
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_lookup.get(name).copied()
    }

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|stop_id| self.get_stop(stop_id))
    }

    pub fn find_route(&self, name: &str) -> Option<&Route> {
        self.route_lookup
            .get(name)
            .map(|route_id| &self.routes[route_id.0])
    }

    /// # Panics
    ///
    /// if `stop_id` was not issued by this catalogue.
    pub fn get_stop(&self, stop_id: StopId) -> &Stop {
        &self.stops[stop_id.0]
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// the distance recorded for this direction, falling back to the one
    /// recorded for the opposite direction.
    pub fn recorded_distance(&self, from: StopId, to: StopId) -> Option<f64> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
    }

    /// road distance in meters from `from` to `to`. when neither direction was
    /// recorded, the great-circle distance between the stops is used instead.
    pub fn distance_between(&self, from: StopId, to: StopId) -> f64 {
        match self.recorded_distance(from, to) {
            Some(meters) => meters,
            None => {
                let src = self.get_stop(from);
                let dst = self.get_stop(to);
                log::warn!(
                    "no road distance recorded between '{}' and '{}', using great-circle distance",
                    src.name,
                    dst.name
                );
                great_circle_distance(src, dst)
            }
        }
    }

    /// statistics for a route, or None if no route has this name.
    pub fn route_stats(&self, name: &str) -> Option<RouteStats> {
        self.find_route(name)
            .map(|route| RouteStats::new(route, self))
    }

    /// names of the routes serving a stop in sorted order, or None if no stop
    /// has this name. a stop served by no route yields an empty set.
    pub fn routes_at_stop(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.stop_id(name)
            .map(|stop_id| &self.routes_at_stop[stop_id.0])
    }

    pub fn to_snapshot(&self) -> CatalogueSnapshot {
        let distances = self
            .distances
            .iter()
            .sorted_by_key(|((from, to), _)| (*from, *to))
            .map(|((from, to), meters)| DistanceRecord {
                from: self.get_stop(*from).name.clone(),
                to: self.get_stop(*to).name.clone(),
                meters: *meters,
            })
            .collect_vec();
        let routes = self
            .routes
            .iter()
            .map(|route| RouteRecord {
                name: route.name.clone(),
                is_roundtrip: route.kind.is_roundtrip(),
                stops: route
                    .stops
                    .iter()
                    .map(|stop_id| self.get_stop(*stop_id).name.clone())
                    .collect_vec(),
            })
            .collect_vec();
        CatalogueSnapshot {
            stops: self.stops.clone(),
            distances,
            routes,
        }
    }
}

impl TryFrom<CatalogueSnapshot> for TransportCatalogue {
    type Error = CatalogueError;

    fn try_from(snapshot: CatalogueSnapshot) -> Result<Self, Self::Error> {
        let mut catalogue = TransportCatalogue::new();
        for stop in snapshot.stops {
            catalogue.add_stop(stop)?;
        }
        for record in snapshot.distances {
            catalogue.set_distance(&record.from, &record.to, record.meters)?;
        }
        for record in snapshot.routes {
            let kind = RouteKind::from_roundtrip(record.is_roundtrip);
            catalogue.add_route(&record.name, kind, &record.stops)?;
        }
        Ok(catalogue)
    }
}

impl CatalogueReader for TransportCatalogue {
    fn stop_names(&self) -> BTreeSet<&str> {
        self.stops.iter().map(|stop| stop.name.as_str()).collect()
    }

    fn route_names(&self) -> BTreeSet<&str> {
        self.routes.iter().map(|route| route.name.as_str()).collect()
    }

    fn route_stops(&self, route_name: &str) -> RouteStops<'_> {
        let route = self
            .find_route(route_name)
            .unwrap_or_else(|| panic!("route '{route_name}' is not in the catalogue"));
        RouteStops {
            stops: route
                .stops
                .iter()
                .map(|stop_id| self.get_stop(*stop_id).name.as_str())
                .collect(),
            kind: route.kind,
        }
    }

    fn ground_distance(&self, from: &str, to: &str) -> f64 {
        let from_id = self
            .stop_id(from)
            .unwrap_or_else(|| panic!("stop '{from}' is not in the catalogue"));
        let to_id = self
            .stop_id(to)
            .unwrap_or_else(|| panic!("stop '{to}' is not in the catalogue"));
        self.distance_between(from_id, to_id)
    }
}
