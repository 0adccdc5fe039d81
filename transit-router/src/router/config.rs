//! Routing configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Error returned for unusable routing settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Wait time must be at least one minute
    #[error("bus wait time must be positive")]
    ZeroWaitTime,

    /// Velocity must be a positive, finite number
    #[error("bus velocity must be positive and finite, got {0}")]
    InvalidVelocity(f64),
}

/// Parameters shared by every stop and route when building the graph.
///
/// Field names match the `routing_settings` section of the input document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Time spent waiting at any stop before boarding (minutes).
    pub bus_wait_time: u32,

    /// Bus speed (km/h), identical for every route.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create validated settings.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Result<Self, ConfigError> {
        let settings = Self {
            bus_wait_time,
            bus_velocity,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check settings that were built directly or deserialized.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bus_wait_time == 0 {
            return Err(ConfigError::ZeroWaitTime);
        }
        if !(self.bus_velocity.is_finite() && self.bus_velocity > 0.0) {
            return Err(ConfigError::InvalidVelocity(self.bus_velocity));
        }
        Ok(())
    }

    /// Returns the wait time as a Duration.
    pub fn wait_time(&self) -> Duration {
        Duration::minutes(i64::from(self.bus_wait_time))
    }

    /// Returns the wait time in minutes, as used for edge weights.
    pub fn wait_minutes(&self) -> f64 {
        self.wait_time().num_seconds() as f64 / 60.0
    }

    /// Bus speed converted to meters per minute.
    pub fn meters_per_minute(&self) -> f64 {
        self.bus_velocity * 1000.0 / 60.0
    }

    /// Minutes needed to ride `meters`.
    pub fn ride_minutes(&self, meters: u64) -> f64 {
        meters as f64 / self.meters_per_minute()
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = RoutingSettings::default();

        assert_eq!(settings.bus_wait_time, 6);
        assert_eq!(settings.bus_velocity, 40.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn conversions() {
        let settings = RoutingSettings::new(6, 40.0).unwrap();

        assert_eq!(settings.wait_time(), Duration::minutes(6));
        assert_eq!(settings.wait_minutes(), 6.0);
        assert!((settings.meters_per_minute() - 666.666_666_666_666_7).abs() < 1e-9);
        assert!((settings.ride_minutes(300) - 0.45).abs() < 1e-12);
    }

    #[test]
    fn rejects_zero_wait() {
        assert_eq!(RoutingSettings::new(0, 40.0), Err(ConfigError::ZeroWaitTime));
    }

    #[test]
    fn rejects_bad_velocity() {
        assert!(matches!(
            RoutingSettings::new(6, 0.0),
            Err(ConfigError::InvalidVelocity(_))
        ));
        assert!(matches!(
            RoutingSettings::new(6, -3.0),
            Err(ConfigError::InvalidVelocity(_))
        ));
        assert!(matches!(
            RoutingSettings::new(6, f64::NAN),
            Err(ConfigError::InvalidVelocity(_))
        ));
        assert!(matches!(
            RoutingSettings::new(6, f64::INFINITY),
            Err(ConfigError::InvalidVelocity(_))
        ));
    }

    #[test]
    fn deserialize_from_document_section() {
        let json = r#"{"bus_wait_time": 2, "bus_velocity": 30}"#;
        let settings: RoutingSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings, RoutingSettings::new(2, 30.0).unwrap());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ConfigError::ZeroWaitTime.to_string(),
            "bus wait time must be positive"
        );
        assert_eq!(
            ConfigError::InvalidVelocity(-1.0).to_string(),
            "bus velocity must be positive and finite, got -1"
        );
    }
}
