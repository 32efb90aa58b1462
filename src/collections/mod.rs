//! Collection functions: iteration, querying, ordering and grouping.
//!
//! Every function takes its input by reference and returns a new value; the
//! only side effects are the ones performed by the caller's closures.

mod grouping;
mod iteration;
mod ordering;
mod records;

pub use grouping::*;
pub use iteration::*;
pub use ordering::*;
pub use records::*;
