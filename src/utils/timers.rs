//! Timer utilities.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::error::{Result, UnderscoreError};

/// Runtime handle for the caller's context, or `NoRuntime`.
pub(crate) fn current_handle() -> Result<Handle> {
    Handle::try_current().map_err(|e| UnderscoreError::no_runtime(e.to_string()))
}

/// A one-shot timer that can be cancelled
pub struct CancellableTimer {
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl CancellableTimer {
    /// Spawn a timer on `handle` that executes `callback` after `duration`
    pub fn new<F>(handle: &Handle, duration: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = oneshot::channel();

        handle.spawn(async move {
            tokio::select! {
                _ = sleep(duration) => {
                    callback();
                }
                _ = cancel_rx => {}
            }
        });

        Self {
            cancel_tx: Some(cancel_tx),
        }
    }

    /// Cancel the timer
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Check if the timer is still active
    pub fn is_active(&self) -> bool {
        self.cancel_tx.as_ref().is_some_and(|tx| !tx.is_closed())
    }
}

impl Drop for CancellableTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `f` once after `wait` on the current runtime.
///
/// The returned handle resolves to the function's result; dropping it detaches
/// the task without cancelling it.
pub fn delay<F, R>(wait: Duration, f: F) -> Result<JoinHandle<R>>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let handle = current_handle()?;
    Ok(handle.spawn(async move {
        sleep(wait).await;
        f()
    }))
}

/// [`delay`] with a zero wait: run `f` as soon as the runtime is free.
pub fn defer<F, R>(f: F) -> Result<JoinHandle<R>>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    delay(Duration::ZERO, f)
}
