use super::EdgeWeight;

/// fastest way between two stops: wait and ride steps in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// minutes from arriving at the origin stop to alighting at the
    /// destination, the sum of the step times
    pub total_time: f64,
    pub steps: Vec<ItineraryStep>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryStep {
    Wait {
        stop_name: String,
        time: f64,
    },
    Ride {
        route_name: String,
        /// number of consecutive stop-to-stop hops ridden
        span_count: usize,
        time: f64,
    },
}

impl ItineraryStep {
    pub fn time(&self) -> f64 {
        match self {
            ItineraryStep::Wait { time, .. } => *time,
            ItineraryStep::Ride { time, .. } => *time,
        }
    }

    /// the step for traversing an edge with `weight`, labelled with its stop
    /// or route name.
    pub fn new(weight: &EdgeWeight, label: &str) -> ItineraryStep {
        if weight.is_wait() {
            ItineraryStep::Wait {
                stop_name: label.to_string(),
                time: weight.time,
            }
        } else {
            ItineraryStep::Ride {
                route_name: label.to_string(),
                span_count: weight.span_count,
                time: weight.time,
            }
        }
    }
}
