use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// how buses traverse the stop sequence of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    /// stops are listed one way and served in both directions
    Linear,
    /// stops are listed with the first stop repeated at the end and served once, in order
    Circular,
}

impl RouteKind {
    pub fn from_roundtrip(is_roundtrip: bool) -> RouteKind {
        if is_roundtrip {
            RouteKind::Circular
        } else {
            RouteKind::Linear
        }
    }

    pub fn is_roundtrip(&self) -> bool {
        matches!(self, RouteKind::Circular)
    }
}

impl Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteKind::Linear => write!(f, "linear"),
            RouteKind::Circular => write!(f, "circular"),
        }
    }
}
