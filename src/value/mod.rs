//! Typed shapes of input accepted by the collection functions.

mod collection;
mod nested;
mod record;
mod truthy;

pub use collection::Collection;
pub use nested::Nested;
pub use record::Record;
pub use truthy::Truthy;
