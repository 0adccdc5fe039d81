//! The transport catalogue: stops, routes and road distances.
//!
//! Records live in append-only arenas and are addressed by [`StopId`] and
//! [`RouteId`] handles. Name indexes are the single source of truth for
//! lookups, so overwriting a name never leaves the previous record
//! reachable.
//!
//! [`StopId`]: crate::domain::StopId
//! [`RouteId`]: crate::domain::RouteId

mod stats;
mod store;

pub use store::TransportCatalogue;
