//! Domain types for the transit catalogue.
//!
//! Stops and routes are plain records addressed by stable integer handles.
//! The catalogue owns them; everything else refers to them by handle or name.

mod error;
mod geo;
mod route;
mod stat;
mod stop;

pub use error::CatalogueError;
pub use geo::{Coordinates, EARTH_RADIUS_M, compute_distance};
pub use route::{Route, RouteId};
pub use stat::RouteStat;
pub use stop::{Stop, StopId};
