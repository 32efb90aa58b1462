//! Array functions: slicing, flattening, set operations, search and ranges.

mod search;
mod sets;
mod slicing;

pub use search::*;
pub use sets::*;
pub use slicing::*;
