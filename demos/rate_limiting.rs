//! Example usage of throttle, debounce and delay.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use underscore::{delay, Debounce, DebounceOptions, Throttle, ThrottleOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Throttle: at most one call every 100ms, with a trailing call
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = calls.clone();
    let throttled = Throttle::with_options(
        Duration::from_millis(100),
        ThrottleOptions::new().leading(true).trailing(true),
        move |event: &'static str| {
            let n = counted.fetch_add(1, Ordering::SeqCst) + 1;
            println!("[Throttle] call #{} for {}", n, event);
            n
        },
    )?;

    for _ in 0..10 {
        throttled.call("scroll");
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    // Debounce: fire once input has been quiet for 50ms
    let search = Debounce::with_options(
        Duration::from_millis(50),
        DebounceOptions::from_json(r#"{"immediate": false}"#)?,
        |query: String| {
            println!("[Debounce] searching for {:?}", query);
            query.len()
        },
    )?;

    for query in ["r", "ru", "rus", "rust"] {
        search.call(query.to_string());
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    // Delay
    let handle = delay(Duration::from_millis(200), || println!("[Delay] done waiting"))?;
    handle.await?;

    println!("Throttled function ran {} times.", calls.load(Ordering::SeqCst));
    Ok(())
}
