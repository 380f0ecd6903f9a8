use geo::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub name: String,
    /// x is longitude, y is latitude, in degrees
    pub coordinates: Point<f64>,
}

impl Stop {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Stop {
        Stop {
            name: name.to_string(),
            coordinates: Point::new(longitude, latitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates.y()
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates.x()
    }
}
