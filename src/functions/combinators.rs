//! Function combinators that need no runtime.

/// Pre-fill the leading arguments of a slice-taking function.
///
/// ```
/// let greet = underscore::partial(|words: &[&str]| words.join(" "), vec!["hello"]);
/// assert_eq!(greet(&["world"]), "hello world");
/// ```
pub fn partial<T, R, F>(f: F, saved: Vec<T>) -> impl Fn(&[T]) -> R
where
    T: Clone,
    F: Fn(&[T]) -> R,
{
    move |args: &[T]| {
        let mut all = Vec::with_capacity(saved.len() + args.len());
        all.extend_from_slice(&saved);
        all.extend_from_slice(args);
        f(&all)
    }
}

/// Run `f` on the first call only; every later call returns that first result.
pub fn once<A, R, F>(mut f: F) -> impl FnMut(A) -> R
where
    R: Clone,
    F: FnMut(A) -> R,
{
    let mut memo: Option<R> = None;
    move |args| memo.get_or_insert_with(|| f(args)).clone()
}

/// Run `f` only from the `times`-th call onwards. With `times == 0` the very
/// first call already runs it.
pub fn after<A, R, F>(times: usize, mut f: F) -> impl FnMut(A) -> Option<R>
where
    F: FnMut(A) -> R,
{
    let mut remaining = times;
    move |args| {
        remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            Some(f(args))
        } else {
            None
        }
    }
}

/// Hand `f` to `wrapper` along with the arguments, letting it run code before
/// and after or decide not to call `f` at all.
pub fn wrap<A, R, F, W>(f: F, wrapper: W) -> impl Fn(A) -> R
where
    F: Fn(A) -> R,
    W: Fn(&F, A) -> R,
{
    move |args| wrapper(&f, args)
}

/// `f ∘ g`: feed the result of `g` into `f`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |args| f(g(args))
}

/// Compose a list of functions; the last one runs first.
pub fn compose_all<T>(fns: Vec<Box<dyn Fn(T) -> T + Send + Sync>>) -> impl Fn(T) -> T {
    move |value| fns.iter().rev().fold(value, |acc, f| f(acc))
}

/// Milliseconds since the Unix epoch.
pub fn now() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_ignores_later_arguments() {
        let mut double = once(|n: i32| n * 2);
        assert_eq!(double(2), 4);
        assert_eq!(double(10), 4);
    }

    #[test]
    fn test_after_keeps_firing() {
        let mut fire = after(2, |_: ()| "done");
        assert_eq!(fire(()), None);
        assert_eq!(fire(()), Some("done"));
        assert_eq!(fire(()), Some("done"));
    }

    #[test]
    fn test_compose_all_empty_is_identity() {
        let id = compose_all::<i32>(Vec::new());
        assert_eq!(id(7), 7);
    }

    #[test]
    fn test_now_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(now() > 1_577_836_800_000);
    }
}
