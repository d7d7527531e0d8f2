// SPDX-License-Identifier: MPL-2.0
//! `story_toaster` is the notification queue behind the stories dashboard.
//!
//! It keeps alerts and toasts in display order, suppresses duplicates,
//! removes toasts automatically after a configurable interval, and exposes
//! the queue through an explicitly scoped provider/context pair.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod notifications;
