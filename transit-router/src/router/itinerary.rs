//! Itinerary types.
//!
//! An `Itinerary` is the answer to a from -> to query: the segments a
//! passenger goes through, in order, and the total time in minutes.

use std::sync::Arc;

/// Waiting at a stop for the next bus.
#[derive(Debug, Clone, PartialEq)]
pub struct Wait {
    /// Stop where the passenger waits
    pub stop_name: Arc<str>,
    /// Waiting time (minutes)
    pub time: f64,
}

/// Riding one route for a number of consecutive hops.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    /// Route ridden
    pub route_name: Arc<str>,
    /// Stop-to-stop hops covered without getting off
    pub span_count: usize,
    /// Riding time (minutes)
    pub time: f64,
}

/// A segment of an itinerary: either a wait or a ride.
///
/// Names are shared `Arc<str>` so that turning graph edges into segments
/// never copies strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Waiting at a stop
    Wait(Wait),
    /// Riding a route
    Ride(Ride),
}

impl Segment {
    /// Creates a wait segment.
    pub fn wait(stop_name: impl Into<Arc<str>>, time: f64) -> Self {
        Segment::Wait(Wait {
            stop_name: stop_name.into(),
            time,
        })
    }

    /// Creates a ride segment.
    pub fn ride(route_name: impl Into<Arc<str>>, span_count: usize, time: f64) -> Self {
        Segment::Ride(Ride {
            route_name: route_name.into(),
            span_count,
            time,
        })
    }

    /// Returns the time spent in this segment (minutes).
    pub fn time(&self) -> f64 {
        match self {
            Segment::Wait(wait) => wait.time,
            Segment::Ride(ride) => ride.time,
        }
    }

    /// Returns the stop name for a wait, or the route name for a ride.
    pub fn name(&self) -> &str {
        match self {
            Segment::Wait(wait) => &wait.stop_name,
            Segment::Ride(ride) => &ride.route_name,
        }
    }

    /// Returns true if this is a wait segment.
    pub fn is_wait(&self) -> bool {
        matches!(self, Segment::Wait(_))
    }

    /// Returns true if this is a ride segment.
    pub fn is_ride(&self) -> bool {
        matches!(self, Segment::Ride(_))
    }

    /// Returns the wait if this is a wait segment.
    pub fn as_wait(&self) -> Option<&Wait> {
        match self {
            Segment::Wait(wait) => Some(wait),
            Segment::Ride(_) => None,
        }
    }

    /// Returns the ride if this is a ride segment.
    pub fn as_ride(&self) -> Option<&Ride> {
        match self {
            Segment::Wait(_) => None,
            Segment::Ride(ride) => Some(ride),
        }
    }
}

/// The fastest way from one stop to another.
///
/// # Invariants
///
/// - At least one segment; the first is always a wait at the origin
/// - `total_time` equals the sum of segment times
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    total_time: f64,
    segments: Vec<Segment>,
}

impl Itinerary {
    pub(crate) fn new(total_time: f64, segments: Vec<Segment>) -> Self {
        debug_assert!(!segments.is_empty());
        debug_assert!((segments.iter().map(Segment::time).sum::<f64>() - total_time).abs() < 1e-9);
        Self {
            total_time,
            segments,
        }
    }

    /// Total travel time (minutes).
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Segments in travel order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consumes the itinerary, returning its segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_ride()).count()
    }

    /// Total time spent waiting (minutes).
    pub fn wait_time(&self) -> f64 {
        self.segments
            .iter()
            .filter_map(Segment::as_wait)
            .map(|w| w.time)
            .sum()
    }
}
