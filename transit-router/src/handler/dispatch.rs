//! Dispatch of stat requests to the engine.

use tracing::debug;

use crate::router::{EngineError, TransitEngine};

use super::dto::{
    BusResponse, NotFoundResponse, RouteResponse, StatRequest, StatResponse, StopResponse,
};

/// Answers stat requests against an engine.
///
/// Stop and bus requests work in any engine state; route requests need the
/// graph to be built.
#[derive(Debug, Clone, Copy)]
pub struct RequestHandler<'a> {
    engine: &'a TransitEngine,
}

impl<'a> RequestHandler<'a> {
    /// Create a handler over an engine.
    pub fn new(engine: &'a TransitEngine) -> Self {
        Self { engine }
    }

    /// Answer a batch of requests, preserving their order.
    pub fn handle_all(&self, requests: &[StatRequest]) -> Result<Vec<StatResponse>, EngineError> {
        let responses = requests
            .iter()
            .map(|request| self.handle(request))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(requests = responses.len(), "answered stat requests");
        Ok(responses)
    }

    /// Answer a single request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBuildState`] for a route request
    /// before the graph is built.
    pub fn handle(&self, request: &StatRequest) -> Result<StatResponse, EngineError> {
        let id = request.id();
        let response = match request {
            StatRequest::Stop { name, .. } => match self.engine.routes_for_stop(name) {
                Some(buses) => StatResponse::Stop(StopResponse {
                    request_id: id,
                    buses: buses.iter().cloned().collect(),
                }),
                None => StatResponse::NotFound(NotFoundResponse::new(id)),
            },
            StatRequest::Bus { name, .. } => match self.engine.route_stat(name) {
                Some(stat) => StatResponse::Bus(BusResponse::from_stat(id, &stat)),
                None => StatResponse::NotFound(NotFoundResponse::new(id)),
            },
            StatRequest::Route { from, to, .. } => match self.engine.route(from, to)? {
                Some(itinerary) => {
                    StatResponse::Route(RouteResponse::from_itinerary(id, &itinerary))
                }
                None => StatResponse::NotFound(NotFoundResponse::new(id)),
            },
        };
        Ok(response)
    }
}
