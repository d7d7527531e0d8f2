// SPDX-License-Identifier: MPL-2.0
//! Bridge from upstream API failures to error toasts.
//!
//! The stories API reports failures as `{ message, errorId }`. Each distinct
//! failure is surfaced once as an error notification keyed by its id.

use super::notification::{Notification, ToastId};
use super::provider::ToastContext;
use crate::error::Result;
use serde::Deserialize;

/// Failure reported by the stories API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default, rename = "errorId")]
    pub error_id: Option<ToastId>,
}

impl ApiError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error_id: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.error_id = Some(ToastId(id));
        self
    }
}

/// Feeds API errors into a toast context.
#[derive(Debug, Clone)]
pub struct ErrorQueue {
    context: ToastContext,
}

impl ErrorQueue {
    #[must_use]
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    /// Surfaces `error` as an error toast.
    ///
    /// Errors without a message are skipped. Resolves to `true` if a new
    /// toast became active.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutsideScope`] if the provider behind the context has
    /// been unmounted.
    ///
    /// [`Error::OutsideScope`]: crate::error::Error::OutsideScope
    pub async fn report(&self, error: &ApiError) -> Result<bool> {
        if error.message.is_empty() {
            return Ok(false);
        }

        let mut notification = Notification::error(error.message.clone());
        if let Some(id) = error.error_id {
            notification = notification.with_id(id);
        }
        tracing::debug!(error_id = ?error.error_id, "reporting api error");
        self.context.add_toast(notification).await
    }

    /// Dismisses the error at `index`, as a click on its close button would.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if no error is shown at `index`, or
    /// [`Error::OutsideScope`] if the provider has been unmounted.
    ///
    /// [`Error::IndexOutOfBounds`]: crate::error::Error::IndexOutOfBounds
    /// [`Error::OutsideScope`]: crate::error::Error::OutsideScope
    pub async fn dismiss(&self, index: usize) -> Result<Notification> {
        self.context.remove_toast(index).await
    }

    /// Errors currently on screen.
    #[must_use]
    pub fn active(&self) -> Vec<Notification> {
        self.context.state().active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::notifications::{QueueConfig, Severity, ToastProvider};

    #[tokio::test]
    async fn report_adds_error_toast_with_id() {
        let provider = ToastProvider::mount(QueueConfig::alerts());
        let errors = ErrorQueue::new(provider.context());

        let added = errors
            .report(&ApiError::new("Unable to load stories").with_id(7))
            .await
            .unwrap();

        assert!(added);
        let active = errors.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].severity(), Severity::Error);
        assert_eq!(active[0].id(), Some(ToastId(7)));
    }

    #[tokio::test]
    async fn empty_message_is_skipped() {
        let provider = ToastProvider::mount(QueueConfig::alerts());
        let errors = ErrorQueue::new(provider.context());

        assert!(!errors.report(&ApiError::new("")).await.unwrap());
        assert!(errors.active().is_empty());
    }

    #[tokio::test]
    async fn repeated_error_id_is_shown_once() {
        let provider = ToastProvider::mount(QueueConfig::alerts());
        let errors = ErrorQueue::new(provider.context());
        let failure = ApiError::new("Unable to load stories").with_id(3);

        assert!(errors.report(&failure).await.unwrap());
        assert!(!errors.report(&failure).await.unwrap());
        errors.dismiss(0).await.unwrap();
        assert!(!errors.report(&failure).await.unwrap());
        assert!(errors.active().is_empty());
    }

    #[tokio::test]
    async fn dismiss_out_of_range_is_error() {
        let provider = ToastProvider::mount(QueueConfig::alerts());
        let errors = ErrorQueue::new(provider.context());

        assert!(matches!(
            errors.dismiss(2).await,
            Err(Error::IndexOutOfBounds { index: 2, len: 0 })
        ));
    }

    #[tokio::test]
    async fn unmounted_provider_rejects_report_and_dismiss() {
        let provider = ToastProvider::mount(QueueConfig::alerts());
        let errors = ErrorQueue::new(provider.context());
        provider.unmount().await;

        assert_eq!(
            errors.report(&ApiError::new("boom")).await,
            Err(Error::OutsideScope)
        );
        assert_eq!(errors.dismiss(0).await, Err(Error::OutsideScope));
    }

    #[test]
    fn api_error_deserializes_upstream_shape() {
        let error: ApiError =
            toml::from_str("message = \"boom\"\nerrorId = 12\n").expect("valid toml");
        assert_eq!(error, ApiError::new("boom").with_id(12));
    }
}
