// SPDX-License-Identifier: MPL-2.0
//! Toast queue newtypes.
//!
//! This module provides type-safe wrappers for toast queue values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Expiry Interval Bounds
// =============================================================================

/// Auto-expiry interval bounds (0.5s to 5 minutes).
pub mod expiry_interval_bounds {
    /// Minimum interval in milliseconds.
    pub const MIN_MS: u64 = 500;
    /// Maximum interval in milliseconds.
    pub const MAX_MS: u64 = 300_000;
    /// Default interval in milliseconds.
    pub const DEFAULT_MS: u64 = 10_000;
}

// =============================================================================
// ExpiryInterval
// =============================================================================

/// Delay between a toast becoming eligible for expiry and its removal.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500ms–300s).
///
/// # Example
///
/// ```
/// use story_toaster::domain::toasts::ExpiryInterval;
/// use std::time::Duration;
///
/// let interval = ExpiryInterval::from_millis(10_000);
/// assert_eq!(interval.as_duration(), Duration::from_secs(10));
///
/// // Values outside range are clamped
/// let too_short = ExpiryInterval::from_millis(1);
/// assert_eq!(too_short.as_millis(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpiryInterval(u64);

impl ExpiryInterval {
    /// Creates a new interval from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(
            expiry_interval_bounds::MIN_MS,
            expiry_interval_bounds::MAX_MS,
        ))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ExpiryInterval {
    fn default() -> Self {
        Self(expiry_interval_bounds::DEFAULT_MS)
    }
}

impl From<ExpiryInterval> for Duration {
    fn from(interval: ExpiryInterval) -> Self {
        interval.as_duration()
    }
}
