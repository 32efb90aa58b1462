//! # Underscore
//!
//! Functional helpers for slices, maps and closures in the style of
//! Underscore.js, plus a chainable wrapper.
//!
//! ## Features
//!
//! - Collection functions: each, map, reduce, filter, group_by, sort_by, ...
//! - Array functions: first/last/rest, flatten, uniq, set operations, zip, range
//! - Object functions over `HashMap`: keys, values, extend, defaults, pick, omit
//! - Function combinators: partial, memoize, once, after, wrap, compose
//! - Rate limiting on Tokio: throttle, debounce, delay (`timers` feature)
//! - A chaining wrapper, [`Underscore`]
//!
//! Heterogeneous inputs are expressed with small traits instead of runtime
//! type checks: [`Truthy`] for `compact`, [`Record`] for `pluck`/`where`,
//! [`Collection`] for `size`, and [`Nested`] for arbitrarily nested lists.
//!
//! ## Example
//!
//! ```
//! use underscore::{nested, Underscore};
//!
//! let flat = underscore::flatten(&nested![1, [2], [3, [[[4]]]]]);
//! assert_eq!(flat, vec![1, 2, 3, 4]);
//!
//! let total = Underscore::chain(vec![1, 2, 3, 4])
//!     .reject(|n| n % 2 == 0)
//!     .reduce(|sum, n, _| sum + n, 0)
//!     .value();
//! assert_eq!(total, 4);
//! ```

pub mod arrays;
pub mod collections;
pub mod functions;
pub mod objects;
pub mod utils;
pub mod value;

mod chain;
mod error;
mod options;

// Re-exports
pub use arrays::*;
pub use chain::{chain, Underscore};
pub use collections::*;
pub use error::{Result, UnderscoreError};
pub use functions::*;
pub use objects::*;
pub use options::{DebounceConfig, DebounceOptions, ThrottleConfig, ThrottleOptions};
pub use utils::*;
pub use value::{Collection, Nested, Record, Truthy};
