//! Rate limiting: at most one invocation per window.

use parking_lot::Mutex;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::error::Result;
use crate::options::{ThrottleConfig, ThrottleOptions};
use crate::utils::timers::{current_handle, CancellableTimer};

struct State<A, R> {
    previous: Option<Instant>,
    timer: Option<CancellableTimer>,
    args: Option<A>,
    result: Option<R>,
}

struct Inner<A, R> {
    func: Box<dyn Fn(A) -> R + Send + Sync>,
    config: ThrottleConfig,
    handle: Handle,
    state: Mutex<State<A, R>>,
}

/// A throttled function: invoked at most once per `wait`.
///
/// The first call runs immediately (unless `leading` is off). Calls inside
/// the window are collapsed into a single trailing call that receives the most
/// recent arguments (unless `trailing` is off). Every call returns the result
/// of the latest invocation.
///
/// Clones share the same window. Dropping the last clone cancels any pending
/// trailing call.
pub struct Throttle<A, R> {
    inner: Arc<Inner<A, R>>,
}

impl<A, R> Clone for Throttle<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, R> fmt::Debug for Throttle<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttle")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl<A, R> Throttle<A, R>
where
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    /// Throttle `func` with both edges enabled. Must be called inside a Tokio
    /// runtime.
    pub fn new<F>(wait: Duration, func: F) -> Result<Self>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self::with_options(wait, ThrottleOptions::default(), func)
    }

    pub fn with_options<F>(wait: Duration, options: ThrottleOptions, func: F) -> Result<Self>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let handle = current_handle()?;
        Ok(Self {
            inner: Arc::new(Inner {
                func: Box::new(func),
                config: ThrottleConfig::new(wait, options),
                handle,
                state: Mutex::new(State {
                    previous: None,
                    timer: None,
                    args: None,
                    result: None,
                }),
            }),
        })
    }

    /// Invoke or schedule the function, returning the latest result.
    ///
    /// `None` until the function has run at least once.
    pub fn call(&self, args: A) -> Option<R> {
        let inner = &self.inner;
        let now = Instant::now();
        let mut state = inner.state.lock();

        if state.previous.is_none() && !inner.config.leading {
            state.previous = Some(now);
        }
        let remaining = match state.previous {
            Some(previous) => inner.config.wait.saturating_sub(now - previous),
            None => Duration::ZERO,
        };
        state.args = Some(args);

        if remaining.is_zero() {
            if let Some(mut timer) = state.timer.take() {
                timer.cancel();
            }
            state.previous = Some(now);
            let args = state.args.take()?;
            drop(state);

            let result = (inner.func)(args);
            inner.state.lock().result = Some(result.clone());
            return Some(result);
        }

        if state.timer.is_none() && inner.config.trailing {
            debug!("Scheduling trailing call in {:?}", remaining);
            let weak = Arc::downgrade(inner);
            state.timer = Some(CancellableTimer::new(&inner.handle, remaining, move || {
                Inner::trailing(&weak);
            }));
        }
        state.result.clone()
    }

    /// Drop any pending trailing call and reset the window.
    pub fn cancel(&self) {
        let mut state = self.inner.state.lock();
        if let Some(mut timer) = state.timer.take() {
            debug!("Cancelling pending trailing call");
            timer.cancel();
        }
        state.previous = None;
        state.args = None;
    }

    /// Whether a trailing call is scheduled.
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().timer.is_some()
    }
}

impl<A, R> Inner<A, R> {
    fn trailing(weak: &Weak<Self>) {
        let Some(inner) = weak.upgrade() else {
            return;
        };

        let args = {
            let mut state = inner.state.lock();
            state.previous = inner.config.leading.then(Instant::now);
            state.timer = None;
            state.args.take()
        };
        let Some(args) = args else {
            return;
        };

        match catch_unwind(AssertUnwindSafe(|| (inner.func)(args))) {
            Ok(result) => inner.state.lock().result = Some(result),
            Err(_) => warn!("Throttled function panicked during trailing call"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    fn counter() -> (Arc<AtomicUsize>, impl Fn(()) -> usize + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        (count, move |_| c.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_trailing_call() {
        let (count, incr) = counter();
        let throttled = Throttle::new(Duration::from_millis(32), incr).unwrap();

        throttled.call(());
        throttled.call(());
        assert!(throttled.is_pending());

        throttled.cancel();
        assert!(!throttled.is_pending());
        sleep(Duration::from_millis(64)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // window was reset, so the next call is a leading one again
        assert_eq!(throttled.call(()), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_trailing_call() {
        let (count, incr) = counter();
        let throttled = Throttle::new(Duration::from_millis(32), incr).unwrap();
        throttled.call(());
        throttled.call(());
        drop(throttled);

        sleep(Duration::from_millis(64)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_trailing_disabled() {
        let (count, incr) = counter();
        let throttled = Throttle::with_options(
            Duration::from_millis(32),
            ThrottleOptions::new().trailing(false),
            incr,
        )
        .unwrap();

        throttled.call(());
        throttled.call(());
        assert!(!throttled.is_pending());
        sleep(Duration::from_millis(64)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_trailing_call_is_contained() {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        let throttled = Throttle::new(Duration::from_millis(10), move |_: ()| {
            if c.fetch_add(1, Ordering::SeqCst) == 1 {
                panic!("boom");
            }
        })
        .unwrap();

        throttled.call(());
        throttled.call(());
        sleep(Duration::from_millis(20)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!throttled.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debug_shows_config() {
        let throttled = Throttle::new(Duration::from_millis(32), |_: ()| ()).unwrap();
        let debug = format!("{:?}", throttled);
        assert!(debug.starts_with("Throttle { config: ThrottleConfig"));
        assert!(debug.contains("leading: true"));
    }

    #[test]
    fn test_requires_runtime() {
        assert!(Throttle::new(Duration::from_millis(1), |_: ()| ()).is_err());
    }
}
