// SPDX-License-Identifier: MPL-2.0
//! Toast queue domain types.
//!
//! This module provides pure domain types for the notification queue:
//! - [`ExpiryInterval`]: Delay before an active toast is removed automatically

mod newtypes;

pub use newtypes::{expiry_interval_bounds, ExpiryInterval};
