// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.

use crate::domain::toasts::expiry_interval_bounds;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Whether active toasts are removed automatically by default.
pub const DEFAULT_AUTO_REMOVE: bool = true;

/// Delay before an active toast is removed automatically (in milliseconds).
pub const AUTO_REMOVE_TOAST_TIME_INTERVAL: u64 = expiry_interval_bounds::DEFAULT_MS;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Filter used by the binary when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";
