//! Small general-purpose helpers.

use std::sync::atomic::{AtomicU64, Ordering};

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Returns its argument unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// Call `f` with `0..n` and collect the results. Negative `n` yields nothing.
pub fn times<R, F>(n: i64, f: F) -> Vec<R>
where
    F: FnMut(i64) -> R,
{
    (0..n.max(0)).map(f).collect()
}

/// Process-wide unique id, optionally prefixed.
pub fn unique_id(prefix: &str) -> String {
    let id = ID_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
    format!("{}{}", prefix, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_differ() {
        let a = unique_id("c");
        let b = unique_id("c");
        assert_ne!(a, b);
        assert!(a.starts_with('c'));
    }

    #[test]
    fn test_times_negative() {
        assert!(times(-2, identity).is_empty());
    }
}
