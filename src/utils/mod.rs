//! Utility functions and types.

mod helpers;
mod random;
#[cfg(all(not(target_arch = "wasm32"), feature = "timers"))]
pub mod timers;

pub use helpers::*;
pub use random::*;
#[cfg(all(not(target_arch = "wasm32"), feature = "timers"))]
pub use timers::{defer, delay, CancellableTimer};
