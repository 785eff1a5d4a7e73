//! Error types for fasli-schedule.

use chrono::NaiveDate;
use fasli_calendar::CalendarError;
use fasli_solar::{GeoError, SunriseError};

/// Error type for schedule generation and instant conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// The supplied place could not be geocoded.
    #[error("location not found: '{query}'")]
    LocationNotFound {
        /// The place as it was looked up.
        query: String,
    },

    /// Geocoding failed for a reason other than a missing match.
    #[error("geocoding failed: {reason}")]
    Geocoding {
        /// Description of the underlying failure.
        reason: String,
    },

    /// The sunrise provider failed and no fallback was configured.
    #[error("time service unavailable: {reason}")]
    TimeServiceUnavailable {
        /// Description of the underlying failure.
        reason: String,
    },

    /// A ceremony date cannot be represented.
    #[error("ceremony date out of range (counting from {from})")]
    DateOutOfRange {
        /// The effective death day the arithmetic started from.
        from: NaiveDate,
    },

    /// More monthly recurrences were requested than are supported.
    #[error("too many monthly recurrences: {months} (maximum {max})")]
    InvalidMonths {
        /// The requested count.
        months: u32,
        /// The largest accepted count.
        max: u32,
    },

    /// Wraps an error originating from fasli-calendar.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl ScheduleError {
    /// True for failures caused by caller input rather than the system.
    ///
    /// These should be reported back to the user, not treated as faults.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ScheduleError::LocationNotFound { .. }
                | ScheduleError::DateOutOfRange { .. }
                | ScheduleError::InvalidMonths { .. }
        )
    }
}

impl From<GeoError> for ScheduleError {
    fn from(e: GeoError) -> Self {
        match e {
            GeoError::LocationNotFound { query } => ScheduleError::LocationNotFound { query },
            other => ScheduleError::Geocoding {
                reason: other.to_string(),
            },
        }
    }
}

impl From<SunriseError> for ScheduleError {
    fn from(e: SunriseError) -> Self {
        match e {
            SunriseError::TimeServiceUnavailable { reason } => {
                ScheduleError::TimeServiceUnavailable { reason }
            }
            other => ScheduleError::TimeServiceUnavailable {
                reason: other.to_string(),
            },
        }
    }
}

impl From<CalendarError> for ScheduleError {
    fn from(e: CalendarError) -> Self {
        ScheduleError::Calendar {
            reason: e.to_string(),
        }
    }
}
