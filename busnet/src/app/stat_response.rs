use busnet_catalogue::catalogue::RouteStats;
use serde::Serialize;

/// one entry of the response array, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus {
        request_id: i64,
        curvature: f64,
        route_length: f64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<RouteItem>,
    },
    NotFound {
        request_id: i64,
        error_message: String,
    },
}

impl StatResponse {
    pub fn bus(request_id: i64, stats: &RouteStats) -> StatResponse {
        StatResponse::Bus {
            request_id,
            curvature: stats.curvature,
            route_length: stats.route_length,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
        }
    }

    pub fn not_found(request_id: i64) -> StatResponse {
        StatResponse::NotFound {
            request_id,
            error_message: String::from("not found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}
