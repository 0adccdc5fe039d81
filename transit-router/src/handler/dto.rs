//! Data transfer objects for stat requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::RouteStat;
use crate::router::{Itinerary, Segment};

/// A stat request, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    /// Routes serving a stop
    Stop { id: i64, name: String },

    /// Statistics for a route
    Bus { id: i64, name: String },

    /// Fastest itinerary between two stops
    Route { id: i64, from: String, to: String },
}

impl StatRequest {
    /// Returns the request id echoed back in the response.
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Stop { id, .. }
            | StatRequest::Bus { id, .. }
            | StatRequest::Route { id, .. } => *id,
        }
    }
}

/// Routes serving a stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    pub request_id: i64,

    /// Route names, sorted
    pub buses: Vec<String>,
}

/// Statistics for a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub request_id: i64,

    /// Road length over great-circle length
    pub curvature: f64,

    /// Road length in meters
    pub route_length: u64,

    /// Stops visited along the full traversal
    pub stop_count: usize,

    /// Distinct stops
    pub unique_stop_count: usize,
}

impl BusResponse {
    /// Build a response from computed statistics.
    pub fn from_stat(request_id: i64, stat: &RouteStat) -> Self {
        Self {
            request_id,
            curvature: stat.curvature(),
            route_length: stat.route_length,
            stop_count: stat.stop_count,
            unique_stop_count: stat.unique_stop_count,
        }
    }
}

/// One item of an itinerary, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    /// Waiting at a stop
    Wait { stop_name: String, time: f64 },

    /// Riding a bus for `span_count` stops
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl From<&Segment> for RouteItem {
    fn from(segment: &Segment) -> Self {
        match segment {
            Segment::Wait(wait) => RouteItem::Wait {
                stop_name: wait.stop_name.to_string(),
                time: wait.time,
            },
            Segment::Ride(ride) => RouteItem::Bus {
                bus: ride.route_name.to_string(),
                span_count: ride.span_count,
                time: ride.time,
            },
        }
    }
}

/// Fastest itinerary between two stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub request_id: i64,

    /// Total time in minutes
    pub total_time: f64,

    /// Itinerary items in travel order
    pub items: Vec<RouteItem>,
}

impl RouteResponse {
    /// Build a response from an itinerary.
    pub fn from_itinerary(request_id: i64, itinerary: &Itinerary) -> Self {
        Self {
            request_id,
            total_time: itinerary.total_time(),
            items: itinerary.segments().iter().map(RouteItem::from).collect(),
        }
    }
}

/// Answer for anything that could not be found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFoundResponse {
    pub request_id: i64,
    pub error_message: String,
}

impl NotFoundResponse {
    pub fn new(request_id: i64) -> Self {
        Self {
            request_id,
            error_message: "not found".to_string(),
        }
    }
}

/// Any stat response. Serialized without a tag; the fields tell them apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Stop(StopResponse),
    Bus(BusResponse),
    Route(RouteResponse),
    NotFound(NotFoundResponse),
}

impl StatResponse {
    /// Returns the request id this response answers.
    pub fn request_id(&self) -> i64 {
        match self {
            StatResponse::Stop(r) => r.request_id,
            StatResponse::Bus(r) => r.request_id,
            StatResponse::Route(r) => r.request_id,
            StatResponse::NotFound(r) => r.request_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_requests() {
        let requests: Vec<StatRequest> = serde_json::from_value(json!([
            { "id": 1, "type": "Stop", "name": "Universam" },
            { "id": 2, "type": "Bus", "name": "750" },
            { "id": 3, "type": "Route", "from": "Biryulyovo", "to": "Universam" }
        ]))
        .unwrap();

        assert_eq!(
            requests,
            vec![
                StatRequest::Stop {
                    id: 1,
                    name: "Universam".into()
                },
                StatRequest::Bus {
                    id: 2,
                    name: "750".into()
                },
                StatRequest::Route {
                    id: 3,
                    from: "Biryulyovo".into(),
                    to: "Universam".into()
                },
            ]
        );
        assert_eq!(
            requests.iter().map(StatRequest::id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn unknown_request_type_fails() {
        let result: Result<StatRequest, _> =
            serde_json::from_value(json!({ "id": 1, "type": "Map" }));
        assert!(result.is_err());
    }

    #[test]
    fn route_items_serialize_with_type_tag() {
        let items = vec![
            RouteItem::from(&Segment::wait("Biryulyovo", 6.0)),
            RouteItem::from(&Segment::ride("297", 2, 5.235)),
        ];

        assert_eq!(
            serde_json::to_value(&items).unwrap(),
            json!([
                { "type": "Wait", "stop_name": "Biryulyovo", "time": 6.0 },
                { "type": "Bus", "bus": "297", "span_count": 2, "time": 5.235 }
            ])
        );
    }

    #[test]
    fn responses_serialize_untagged() {
        let stop = StatResponse::Stop(StopResponse {
            request_id: 1,
            buses: vec!["256".into(), "828".into()],
        });
        assert_eq!(
            serde_json::to_value(&stop).unwrap(),
            json!({ "request_id": 1, "buses": ["256", "828"] })
        );

        let missing = StatResponse::NotFound(NotFoundResponse::new(4));
        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            json!({ "request_id": 4, "error_message": "not found" })
        );
        assert_eq!(missing.request_id(), 4);
    }

    #[test]
    fn bus_response_from_stat() {
        let stat = RouteStat {
            stop_count: 5,
            unique_stop_count: 3,
            geo_length: 1000.0,
            route_length: 1250,
        };
        let response = BusResponse::from_stat(9, &stat);

        assert_eq!(response.request_id, 9);
        assert_eq!(response.stop_count, 5);
        assert_eq!(response.unique_stop_count, 3);
        assert_eq!(response.route_length, 1250);
        assert!((response.curvature - 1.25).abs() < 1e-12);
    }
}
