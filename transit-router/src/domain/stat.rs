//! Derived route statistics.

/// Descriptive statistics for a route, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteStat {
    /// Stops visited along the full traversal (`2N - 1` for linear routes)
    pub stop_count: usize,
    /// Distinct stops on the route
    pub unique_stop_count: usize,
    /// Great-circle length of the traversal, in meters
    pub geo_length: f64,
    /// Road length of the traversal from the distance table, in meters
    pub route_length: u64,
}

impl RouteStat {
    /// Ratio of road length to great-circle length.
    ///
    /// Reported as zero when the geographic length is zero, e.g. for a
    /// route whose stops all share one location.
    pub fn curvature(&self) -> f64 {
        if self.geo_length > 0.0 {
            self.route_length as f64 / self.geo_length
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zeroed() {
        let stat = RouteStat::default();
        assert_eq!(stat.stop_count, 0);
        assert_eq!(stat.unique_stop_count, 0);
        assert_eq!(stat.route_length, 0);
        assert_eq!(stat.curvature(), 0.0);
    }

    #[test]
    fn curvature_ratio() {
        let stat = RouteStat {
            stop_count: 3,
            unique_stop_count: 2,
            geo_length: 1000.0,
            route_length: 1360,
        };
        assert!((stat.curvature() - 1.36).abs() < 1e-12);
    }
}
