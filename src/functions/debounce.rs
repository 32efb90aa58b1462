//! Postpone invocation until calls stop arriving.

use parking_lot::Mutex;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::error::Result;
use crate::options::{DebounceConfig, DebounceOptions};
use crate::utils::timers::{current_handle, CancellableTimer};

struct State<A, R> {
    timestamp: Option<Instant>,
    timer: Option<CancellableTimer>,
    args: Option<A>,
    result: Option<R>,
}

struct Inner<A, R> {
    func: Box<dyn Fn(A) -> R + Send + Sync>,
    config: DebounceConfig,
    handle: Handle,
    state: Mutex<State<A, R>>,
}

/// A debounced function: runs once `wait` has passed without further calls,
/// with the arguments of the last call.
///
/// In `immediate` mode it runs on the first call of a burst instead and
/// ignores the rest until the burst has been quiet for `wait`.
pub struct Debounce<A, R> {
    inner: Arc<Inner<A, R>>,
}

impl<A, R> Clone for Debounce<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, R> fmt::Debug for Debounce<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounce")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl<A, R> Debounce<A, R>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    /// Debounce `func` on the trailing edge. Must be called inside a Tokio
    /// runtime.
    pub fn new<F>(wait: Duration, func: F) -> Result<Self>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self::with_options(wait, DebounceOptions::default(), func)
    }

    pub fn with_options<F>(wait: Duration, options: DebounceOptions, func: F) -> Result<Self>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let handle = current_handle()?;
        Ok(Self {
            inner: Arc::new(Inner {
                func: Box::new(func),
                config: DebounceConfig::new(wait, options),
                handle,
                state: Mutex::new(State {
                    timestamp: None,
                    timer: None,
                    args: None,
                    result: None,
                }),
            }),
        })
    }

    /// Record a call, returning the result of the latest invocation.
    pub fn call(&self, args: A) -> Option<R> {
        let inner = &self.inner;
        let mut state = inner.state.lock();
        state.timestamp = Some(Instant::now());
        state.args = Some(args);

        let call_now = inner.config.immediate && state.timer.is_none();
        if state.timer.is_none() {
            state.timer = Some(Inner::schedule(inner, inner.config.wait));
        }

        if call_now {
            let args = state.args.take()?;
            drop(state);

            let result = (inner.func)(args);
            inner.state.lock().result = Some(result.clone());
            return Some(result);
        }
        state.result.clone()
    }

    /// Drop any pending call. In immediate mode the next call fires at once.
    pub fn cancel(&self) {
        let mut state = self.inner.state.lock();
        if let Some(mut timer) = state.timer.take() {
            debug!("Cancelling pending debounced call");
            timer.cancel();
        }
        state.timestamp = None;
        state.args = None;
    }

    /// Whether the quiet-period timer is running.
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().timer.is_some()
    }
}

impl<A, R> Inner<A, R>
where
    A: Send + 'static,
    R: Send + 'static,
{
    fn schedule(inner: &Arc<Self>, after: Duration) -> CancellableTimer {
        debug!("Scheduling debounced call in {:?}", after);
        let weak = Arc::downgrade(inner);
        CancellableTimer::new(&inner.handle, after, move || Self::later(&weak))
    }

    fn later(weak: &Weak<Self>) {
        let Some(inner) = weak.upgrade() else {
            return;
        };

        let args = {
            let mut state = inner.state.lock();
            let elapsed = state.timestamp.map(|t| t.elapsed()).unwrap_or_default();
            if elapsed < inner.config.wait {
                state.timer = Some(Self::schedule(&inner, inner.config.wait - elapsed));
                return;
            }
            state.timer = None;
            if inner.config.immediate {
                return;
            }
            state.args.take()
        };
        let Some(args) = args else {
            return;
        };

        match catch_unwind(AssertUnwindSafe(|| (inner.func)(args))) {
            Ok(result) => inner.state.lock().result = Some(result),
            Err(_) => warn!("Debounced function panicked"),
        }
    }
}
