use crate::model::RouteKind;
use std::collections::BTreeSet;

/// stop sequence of a route as served by buses, with its traversal kind.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStops<'a> {
    pub stops: Vec<&'a str>,
    pub kind: RouteKind,
}

/// the read-only view of a transit catalogue that routing depends on.
///
/// names passed to [`CatalogueReader::route_stops`] and
/// [`CatalogueReader::ground_distance`] must come from [`CatalogueReader::route_names`]
/// and [`CatalogueReader::stop_names`] of the same catalogue. implementations
/// panic on unknown names.
pub trait CatalogueReader {
    /// all stop names, sorted
    fn stop_names(&self) -> BTreeSet<&str>;

    /// all route names, sorted
    fn route_names(&self) -> BTreeSet<&str>;

    fn route_stops(&self, route_name: &str) -> RouteStops<'_>;

    /// road distance in meters when driving from `from` to `to`. distances may
    /// differ by direction; when only one direction was recorded it serves both.
    fn ground_distance(&self, from: &str, to: &str) -> f64;
}
