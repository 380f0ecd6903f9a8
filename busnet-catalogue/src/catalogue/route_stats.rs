use super::TransportCatalogue;
use crate::model::{Route, RouteKind, Stop};
use geo::{line_string, Haversine, Length};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// summary of a single bus route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStats {
    /// stops visited on one full run of the route. a linear route listing n stops
    /// visits 2n - 1 stops (there and back), a circular one visits n.
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// road distance of one full run in meters
    pub route_length: f64,
    /// road distance over great-circle distance, 0.0 for a route of zero extent
    pub curvature: f64,
}

impl RouteStats {
    pub fn new(route: &Route, catalogue: &TransportCatalogue) -> RouteStats {
        let n_stops = route.stops.len();
        let unique_stop_count = route.stops.iter().unique().count();

        let mut road_length = 0.0;
        let mut geo_length = 0.0;
        for (src, dst) in route.stops.iter().tuple_windows() {
            geo_length += great_circle_distance(catalogue.get_stop(*src), catalogue.get_stop(*dst));
            road_length += catalogue.distance_between(*src, *dst);
            if route.kind == RouteKind::Linear {
                road_length += catalogue.distance_between(*dst, *src);
            }
        }

        let (stop_count, geo_length) = match route.kind {
            RouteKind::Circular => (n_stops, geo_length),
            RouteKind::Linear => ((n_stops * 2).saturating_sub(1), geo_length * 2.0),
        };
        let curvature = if geo_length > 0.0 {
            road_length / geo_length
        } else {
            0.0
        };

        RouteStats {
            stop_count,
            unique_stop_count,
            route_length: road_length,
            curvature,
        }
    }
}

/// haversine distance in meters between two stops.
pub fn great_circle_distance(src: &Stop, dst: &Stop) -> f64 {
    let line = line_string![src.coordinates.0, dst.coordinates.0];
    Haversine.length(&line)
}

#[cfg(test)]
mod tests {
    use super::great_circle_distance;
    use crate::model::Stop;

    #[test]
    fn test_great_circle_distance() {
        // one degree of latitude is roughly 111.2 km
        let a = Stop::new("a", 55.0, 37.0);
        let b = Stop::new("b", 56.0, 37.0);
        let d = great_circle_distance(&a, &b);
        assert!((d - 111_195.0).abs() < 100.0, "unexpected distance {d}");
        assert_eq!(great_circle_distance(&a, &a), 0.0);
    }
}
