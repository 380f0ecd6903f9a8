use super::{RouteKind, StopId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub kind: RouteKind,
    /// stops in the order given when the route was added
    pub stops: Vec<StopId>,
}
