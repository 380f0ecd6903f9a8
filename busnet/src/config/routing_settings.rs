use crate::model::router::RouterError;
use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Time, Velocity};
use uom::si::{length::meter, time::minute, velocity::kilometer_per_hour};

/// parameters of the routing graph. fixed for the lifetime of a graph.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct RoutingSettings {
    /// minutes spent waiting at a stop before boarding any bus
    pub bus_wait_time: u32,
    /// bus speed in km/h
    pub bus_velocity: f64,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Result<RoutingSettings, RouterError> {
        let settings = RoutingSettings {
            bus_wait_time,
            bus_velocity,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), RouterError> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(RouterError::InvalidSettings(format!(
                "bus_velocity must be a positive number of km/h, found {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    pub fn wait_time_minutes(&self) -> f64 {
        self.bus_wait_time as f64
    }

    pub fn velocity(&self) -> Velocity {
        Velocity::new::<kilometer_per_hour>(self.bus_velocity)
    }

    /// minutes a bus needs to cover `distance_meters` of road.
    pub fn travel_time_minutes(&self, distance_meters: f64) -> f64 {
        let distance = Length::new::<meter>(distance_meters);
        let time: Time = distance / self.velocity();
        time.get::<minute>()
    }
}
