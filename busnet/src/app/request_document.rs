use crate::config::{RoutingSettings, SerializationSettings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// a JSON request document. `make-base` reads the settings and base requests,
/// `process-requests` reads the serialization settings and stat requests.
/// unrecognized top-level keys such as `render_settings` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestDocument {
    pub serialization_settings: Option<SerializationSettings>,
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        /// meters driven from this stop to each neighbor
        #[serde(default)]
        road_distances: BTreeMap<String, f64>,
    },
    Bus {
        name: String,
        /// a roundtrip lists its first stop again at the end, otherwise the
        /// stops of one direction
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    /// map rendering is not supported, answered with not found
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. } => *id,
            StatRequest::Stop { id, .. } => *id,
            StatRequest::Route { id, .. } => *id,
            StatRequest::Map { id } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BaseRequest, RequestDocument, StatRequest};

    #[test]
    fn test_decode_document() {
        let document: RequestDocument = serde_json::from_str(
            r#"{
              "serialization_settings": {"file": "transport_catalogue.db"},
              "routing_settings": {"bus_wait_time": 2, "bus_velocity": 30},
              "render_settings": {"width": 1200},
              "base_requests": [
                {"type": "Bus", "name": "14", "stops": ["A", "B", "A"], "is_roundtrip": true},
                {"type": "Stop", "name": "A", "latitude": 43.59, "longitude": 39.72,
                 "road_distances": {"B": 1500}},
                {"type": "Stop", "name": "B", "latitude": 43.58, "longitude": 39.73}
              ],
              "stat_requests": [
                {"id": 1, "type": "Route", "from": "A", "to": "B"},
                {"id": 2, "type": "Map"}
              ]
            }"#,
        )
        .unwrap();

        assert_eq!(document.base_requests.len(), 3);
        match &document.base_requests[1] {
            BaseRequest::Stop { road_distances, .. } => {
                assert_eq!(road_distances.get("B"), Some(&1500.0))
            }
            other => panic!("expected a stop, found {other:?}"),
        }
        match &document.base_requests[2] {
            BaseRequest::Stop { road_distances, .. } => assert!(road_distances.is_empty()),
            other => panic!("expected a stop, found {other:?}"),
        }
        assert_eq!(
            document.stat_requests[0],
            StatRequest::Route {
                id: 1,
                from: String::from("A"),
                to: String::from("B")
            }
        );
        assert_eq!(document.stat_requests[1].id(), 2);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let document: RequestDocument = serde_json::from_str("{}").unwrap();
        assert!(document.routing_settings.is_none());
        assert!(document.base_requests.is_empty());
        assert!(document.stat_requests.is_empty());
    }
}
