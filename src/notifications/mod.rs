// SPDX-License-Identifier: MPL-2.0
//! Toast and alert notification queue.
//!
//! This module provides a deduplicating notification queue following
//! toast/snackbar UX patterns. Notifications stay active until dismissed or,
//! for toast queues, until their auto-remove interval elapses.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels and dedup keys
//! - [`expiry`] - `ExpirySchedule` of cancellable auto-remove timers
//! - [`queue`] - `NotificationQueue` holding active, inactive and all-seen notifications
//! - [`provider`] - `ToastProvider` task owning a queue, and its `ToastContext` handles
//! - [`error_queue`] - `ErrorQueue` turning API failures into error toasts
//!
//! # Usage
//!
//! ```no_run
//! use story_toaster::domain::toasts::ExpiryInterval;
//! use story_toaster::notifications::{Notification, QueueConfig, ToastProvider};
//!
//! # async fn demo() -> story_toaster::error::Result<()> {
//! let provider = ToastProvider::mount(QueueConfig::toasts(ExpiryInterval::default()));
//! let toasts = provider.context();
//!
//! toasts.add_toast(Notification::success("Story published")).await?;
//! for notification in toasts.state().active {
//!     println!("{notification}");
//! }
//! toasts.remove_toast(0).await?;
//! # Ok(())
//! # }
//! ```

pub mod error_queue;
pub mod expiry;
pub mod notification;
pub mod provider;
pub mod queue;

pub use error_queue::{ApiError, ErrorQueue};
pub use expiry::{ExpirySchedule, TimerHandle};
pub use notification::{DedupKey, Notification, Severity, ToastId, UnknownSeverity};
pub use provider::{ToastContext, ToastProvider};
pub use queue::{NotificationQueue, QueueConfig, QueueSnapshot};
