//! Transit catalogue and routing engine.
//!
//! Answers two kinds of questions over a small bus network: descriptive
//! statistics about a named route or stop, and the fastest itinerary
//! between two named stops as a sequence of waits and rides.

pub mod catalogue;
pub mod domain;
pub mod graph;
pub mod handler;
pub mod router;
