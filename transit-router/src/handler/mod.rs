//! Stat request dispatch.
//!
//! Answers batches of typed stat requests (stop, bus, route) against a
//! built engine. Requests and responses derive serde traits so a document
//! layer can read and write them directly.

mod dispatch;
mod dto;

pub use dispatch::RequestHandler;
pub use dto::{
    BusResponse, NotFoundResponse, RouteItem, RouteResponse, StatRequest, StatResponse,
    StopResponse,
};
