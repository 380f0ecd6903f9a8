use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign};

/// cost of a routing graph edge or path.
///
/// weights add up field by field and compare by `time` alone: `span_count`
/// is carried along for building itineraries but never decides between two
/// paths. the stop or route an edge belongs to is kept beside the graph, not
/// in the weight, so path sums stay plain numbers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EdgeWeight {
    /// minutes
    pub time: f64,
    /// stop-to-stop hops ridden, 0 for waiting
    pub span_count: usize,
}

impl EdgeWeight {
    pub fn wait(time: f64) -> EdgeWeight {
        EdgeWeight {
            time,
            span_count: 0,
        }
    }

    pub fn ride(time: f64, span_count: usize) -> EdgeWeight {
        EdgeWeight { time, span_count }
    }

    pub fn is_wait(&self) -> bool {
        self.span_count == 0
    }
}

impl AddAssign for EdgeWeight {
    fn add_assign(&mut self, rhs: Self) {
        self.time += rhs.time;
        self.span_count += rhs.span_count;
    }
}

impl Add for EdgeWeight {
    type Output = EdgeWeight;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl PartialEq for EdgeWeight {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
    }
}

impl PartialOrd for EdgeWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.time.partial_cmp(&other.time)
    }
}

#[cfg(test)]
mod tests {
    use super::EdgeWeight;

    #[test]
    fn test_sum_is_field_wise() {
        let sum = EdgeWeight::ride(2.5, 1) + EdgeWeight::ride(4.0, 2);
        assert_eq!(sum.time, 6.5);
        assert_eq!(sum.span_count, 3);

        let mut total = EdgeWeight::default();
        total += EdgeWeight::wait(6.0);
        assert_eq!(total.time, 6.0);
        assert_eq!(total.span_count, 0);
    }

    #[test]
    fn test_ordering_ignores_span_count() {
        let fast_many_spans = EdgeWeight::ride(3.0, 5);
        let slow_one_span = EdgeWeight::ride(4.0, 1);
        assert!(fast_many_spans < slow_one_span);

        let same_time = EdgeWeight::ride(3.0, 1);
        assert!(!(fast_many_spans < same_time));
        assert!(!(same_time < fast_many_spans));
        assert!(EdgeWeight::default() < EdgeWeight::wait(0.5));
    }

    #[test]
    fn test_persisted_shape_has_no_label() {
        let json = serde_json::to_value(EdgeWeight::ride(1.5, 2)).unwrap();
        assert_eq!(json, serde_json::json!({"time": 1.5, "span_count": 2}));
    }

    #[test]
    fn test_wait_and_ride_kinds() {
        assert!(EdgeWeight::wait(6.0).is_wait());
        assert!(!EdgeWeight::ride(1.0, 1).is_wait());
    }
}
