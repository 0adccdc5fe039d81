//! Catalogue error types.
//!
//! These errors report references the catalogue cannot resolve. They are
//! returned instead of fabricating records for names that were never added.

/// Errors raised while populating the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A stop name was referenced before the stop was added
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// A route name was referenced before the route was added
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    /// A route was declared without any stops
    #[error("route {0} has no stops")]
    EmptyRoute(String),
}
