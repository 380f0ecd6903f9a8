use crate::model::Stop;
use serde::{Deserialize, Serialize};

/// persisted shape of a [`super::TransportCatalogue`]. stops and routes keep
/// their insertion order; road distances refer to stops by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogueSnapshot {
    pub stops: Vec<Stop>,
    pub distances: Vec<DistanceRecord>,
    pub routes: Vec<RouteRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRecord {
    pub from: String,
    pub to: String,
    pub meters: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub name: String,
    pub is_roundtrip: bool,
    pub stops: Vec<String>,
}
