//! Function combinators: partial application, caching, call gating and
//! (with the `timers` feature) time-based rate limiting.

mod combinators;
mod memoize;

#[cfg(all(not(target_arch = "wasm32"), feature = "timers"))]
mod debounce;
#[cfg(all(not(target_arch = "wasm32"), feature = "timers"))]
mod throttle;

pub use combinators::*;
pub use memoize::{memoize, Memoize};

#[cfg(all(not(target_arch = "wasm32"), feature = "timers"))]
pub use debounce::Debounce;
#[cfg(all(not(target_arch = "wasm32"), feature = "timers"))]
pub use throttle::Throttle;
