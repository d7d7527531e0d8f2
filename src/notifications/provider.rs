// SPDX-License-Identifier: MPL-2.0
//! Scoped owner of a notification queue.
//!
//! A [`ToastProvider`] spawns one Tokio task that owns the queue and applies
//! every mutation (adds, dismissals, resets and expiries) one at a time.
//! Consumers talk to it through cloneable [`ToastContext`] handles. Once the
//! provider is unmounted or dropped, every context action fails with
//! [`Error::OutsideScope`].

use super::notification::Notification;
use super::queue::{NotificationQueue, QueueConfig, QueueSnapshot};
use crate::error::{Error, Result};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Commands sent to the provider task.
#[derive(Debug)]
enum Command {
    Add {
        notification: Notification,
        reply: oneshot::Sender<bool>,
    },
    Remove {
        index: usize,
        reply: oneshot::Sender<Result<Notification>>,
    },
    Reset {
        reply: oneshot::Sender<()>,
    },
    Shutdown,
}

/// Owns the queue task. Dropping the provider unmounts it.
#[derive(Debug)]
pub struct ToastProvider {
    context: ToastContext,
    task: Option<JoinHandle<()>>,
}

impl ToastProvider {
    /// Mounts a provider on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn mount(config: QueueConfig) -> Self {
        let queue = NotificationQueue::new(config);
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(queue.snapshot());

        let task = tokio::spawn(run(queue, command_rx, state_tx));
        tracing::debug!(?config, "toast provider mounted");

        Self {
            context: ToastContext {
                command_tx,
                state_rx,
            },
            task: Some(task),
        }
    }

    /// Returns a handle for consumers of this provider.
    #[must_use]
    pub fn context(&self) -> ToastContext {
        self.context.clone()
    }

    /// Stops the queue task and waits for it to finish.
    pub async fn unmount(mut self) {
        let _ = self.context.command_tx.send(Command::Shutdown);
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                tracing::warn!(error = %err, "toast provider task ended abnormally");
            }
        }
    }
}

impl Drop for ToastProvider {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Handle for adding, dismissing and observing toasts.
#[derive(Debug, Clone)]
pub struct ToastContext {
    command_tx: mpsc::UnboundedSender<Command>,
    state_rx: watch::Receiver<QueueSnapshot>,
}

impl ToastContext {
    /// Adds a toast. Resolves to `false` if it was suppressed as a duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutsideScope`] if the provider is gone.
    pub async fn add_toast(&self, notification: Notification) -> Result<bool> {
        self.request(|reply| Command::Add {
            notification,
            reply,
        })
        .await
    }

    /// Dismisses the active toast at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for a bad index and
    /// [`Error::OutsideScope`] if the provider is gone.
    pub async fn remove_toast(&self, index: usize) -> Result<Notification> {
        self.request(|reply| Command::Remove { index, reply })
            .await?
    }

    /// Clears active, inactive and all-seen toasts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutsideScope`] if the provider is gone.
    pub async fn reset_toasts(&self) -> Result<()> {
        self.request(|reply| Command::Reset { reply }).await
    }

    /// Returns the most recently published state.
    #[must_use]
    pub fn state(&self) -> QueueSnapshot {
        self.state_rx.borrow().clone()
    }

    /// Returns a receiver that is notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QueueSnapshot> {
        self.state_rx.clone()
    }

    /// Returns whether the owning provider is still running.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !self.command_tx.is_closed()
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(command(reply_tx))
            .map_err(|_| Error::OutsideScope)?;
        reply_rx.await.map_err(|_| Error::OutsideScope)
    }
}

/// Main loop of the provider task.
async fn run(
    mut queue: NotificationQueue,
    mut command_rx: mpsc::UnboundedReceiver<Command>,
    state_tx: watch::Sender<QueueSnapshot>,
) {
    loop {
        let deadline = queue.next_deadline();
        let wake_at = deadline.map_or_else(Instant::now, Instant::from_std);

        tokio::select! {
            command = command_rx.recv() => {
                let Some(command) = command else { break };
                match command {
                    Command::Add { notification, reply } => {
                        let added = queue.add_at(notification, Instant::now().into_std());
                        if added {
                            publish(&state_tx, &queue);
                        }
                        let _ = reply.send(added);
                    }
                    Command::Remove { index, reply } => {
                        let result = queue.remove(index);
                        if result.is_ok() {
                            publish(&state_tx, &queue);
                        }
                        let _ = reply.send(result);
                    }
                    Command::Reset { reply } => {
                        queue.reset();
                        publish(&state_tx, &queue);
                        let _ = reply.send(());
                    }
                    Command::Shutdown => break,
                }
            }
            () = tokio::time::sleep_until(wake_at), if deadline.is_some() => {
                let expired = queue.expire_due(Instant::now().into_std());
                if !expired.is_empty() {
                    publish(&state_tx, &queue);
                }
            }
        }
    }
    tracing::debug!("toast provider unmounted");
}

fn publish(state_tx: &watch::Sender<QueueSnapshot>, queue: &NotificationQueue) {
    state_tx.send_replace(queue.snapshot());
}
