//! Function combinator tests (the runtime-free ones; see timers_test.rs for
//! throttle, debounce and delay).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use underscore::*;

type Step = Box<dyn Fn(String) -> String + Send + Sync>;

fn fib(n: &u64) -> u64 {
    static FAST_FIB: OnceLock<Memoize<u64, u64>> = OnceLock::new();
    FAST_FIB
        .get_or_init(|| Memoize::new(|n: &u64| if *n < 2 { *n } else { fib(&(n - 1)) + fib(&(n - 2)) }))
        .call(n)
}

fn slow_fib(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        slow_fib(n - 1) + slow_fib(n - 2)
    }
}

#[test]
fn test_partial() {
    let funk = |args: &[String]| format!("[{}]", args.join(" "));
    let pass_ab = partial(funk, vec!["a".to_string(), "b".to_string()]);

    assert_eq!(pass_ab(&["c".to_string(), "d".to_string()]), "[a b c d]");
    assert_eq!(pass_ab(&["e".to_string(), "f".to_string()]), "[a b e f]");
    assert_eq!(pass_ab(&["1".to_string(), 2.to_string()]), "[a b 1 2]");
}

#[test]
fn test_memoize() {
    assert_eq!(slow_fib(10), 55);
    assert_eq!(fib(&10), 55);

    let o = |s: &String| s.clone();
    let fast_o = memoize(o);
    assert_eq!(o(&"toString".to_string()), "toString");
    assert_eq!(fast_o.call(&"toString".to_string()), "toString");
}

#[test]
fn test_memoize_is_shared_across_threads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = calls.clone();
    let square = Arc::new(Memoize::new(move |n: &u64| {
        counted.fetch_add(1, Ordering::SeqCst);
        n * n
    }));
    square.call(&7);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let square = square.clone();
            std::thread::spawn(move || square.call(&7))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 49);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_once() {
    let mut num = 0;
    let mut increment = once(|_: ()| {
        num += 1;
        num
    });
    increment(());
    increment(());
    drop(increment);
    assert_eq!(num, 1);
}

#[test]
fn test_wrap() {
    let greet = |name: &str| format!("hi: {}", name);
    let backwards = wrap(greet, |f, name: &str| {
        format!("{} {}", f(name), name.chars().rev().collect::<String>())
    });
    assert_eq!(backwards("moe"), "hi: moe eom");

    let inner = |_: &HashMap<&str, &str>| "Hello ".to_string();
    let obj = HashMap::from([("name", "Moe")]);
    let hi = wrap(inner, |f, obj: &HashMap<&str, &str>| f(obj) + obj["name"]);
    assert_eq!(hi(&obj), "Hello Moe");
}

#[test]
fn test_compose() {
    fn greet(name: String) -> String {
        format!("hi: {}", name)
    }
    fn exclaim(sentence: String) -> String {
        sentence + "!"
    }
    fn pause(midway: String) -> String {
        midway + ", "
    }

    let composed = compose(exclaim, greet);
    assert_eq!(composed("moe".to_string()), "hi: moe!");

    let composed2 = compose(greet, exclaim);
    assert_eq!(composed2("moe".to_string()), "hi: moe!");

    let steps: Vec<Step> = vec![Box::new(greet), Box::new(pause), Box::new(exclaim)];
    let composed3 = compose_all(steps);
    assert_eq!(composed3("moe".to_string()), "hi: moe!, ");

    let steps: Vec<Step> = vec![Box::new(greet), Box::new(exclaim), Box::new(pause)];
    let composed4 = compose_all(steps);
    assert_eq!(composed4("moe".to_string()), "hi: moe, !");
}

#[test]
fn test_after() {
    fn count_calls(after_amount: usize, times_called: usize) -> usize {
        let mut after_called = 0;
        {
            let mut after_fn = after(after_amount, |_: ()| after_called += 1);
            for _ in 0..times_called {
                after_fn(());
            }
        }
        after_called
    }

    assert_eq!(count_calls(5, 5), 1);
    assert_eq!(count_calls(5, 4), 0);
    assert_eq!(count_calls(0, 0), 0);
    assert_eq!(count_calls(0, 1), 1);
}

#[test]
fn test_now() {
    let before = chrono::Utc::now().timestamp_millis();
    let stamp = now();
    let after = chrono::Utc::now().timestamp_millis();
    assert!(before <= stamp && stamp <= after);
}
