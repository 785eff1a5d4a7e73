//! Error types for fasli-solar.

use chrono::NaiveDate;

/// Errors raised while resolving a place to coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// Returned when no geocoder knows the requested place.
    #[error("location not found: '{query}'")]
    LocationNotFound {
        /// The place query as it was looked up.
        query: String,
    },

    /// Returned when a remote geocoding service cannot be reached or
    /// answers with something other than a result list.
    #[error("geocoding service unavailable: {reason}")]
    ServiceUnavailable {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when coordinates are outside the valid ranges.
    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates {
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },

    /// Returned when a UTC offset string is not of the form `+HH:MM`.
    #[error("invalid UTC offset: '{value}' (expected +HH:MM or -HH:MM)")]
    InvalidUtcOffset {
        /// The rejected input.
        value: String,
    },
}

/// Errors raised while computing or fetching a sunrise time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SunriseError {
    /// Returned when a remote sunrise service cannot be reached or its
    /// response cannot be understood.
    #[error("time service unavailable: {reason}")]
    TimeServiceUnavailable {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when the sunrise instant falls outside the representable
    /// date range.
    #[error("sunrise for {date} is out of range")]
    OutOfRange {
        /// The requested local date.
        date: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_location_not_found() {
        let err = GeoError::LocationNotFound {
            query: "Atlantis".to_string(),
        };
        assert_eq!(err.to_string(), "location not found: 'Atlantis'");
    }

    #[test]
    fn display_service_unavailable() {
        let err = GeoError::ServiceUnavailable {
            reason: "timed out".to_string(),
        };
        assert_eq!(err.to_string(), "geocoding service unavailable: timed out");
    }

    #[test]
    fn display_invalid_coordinates() {
        let err = GeoError::InvalidCoordinates {
            latitude: 91.0,
            longitude: 0.5,
        };
        assert_eq!(
            err.to_string(),
            "invalid coordinates: latitude 91, longitude 0.5"
        );
    }

    #[test]
    fn display_invalid_offset() {
        let err = GeoError::InvalidUtcOffset {
            value: "IST".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid UTC offset: 'IST' (expected +HH:MM or -HH:MM)"
        );
    }

    #[test]
    fn display_time_service() {
        let err = SunriseError::TimeServiceUnavailable {
            reason: "status 503".to_string(),
        };
        assert_eq!(err.to_string(), "time service unavailable: status 503");
    }

    #[test]
    fn display_out_of_range() {
        let err = SunriseError::OutOfRange {
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        };
        assert_eq!(err.to_string(), "sunrise for 2025-01-02 is out of range");
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<GeoError>();
        assert_bounds::<SunriseError>();
    }
}
