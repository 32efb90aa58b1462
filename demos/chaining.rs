//! Example usage of the chaining wrapper and the free functions.

use serde_json::json;
use std::collections::HashMap;
use underscore::{nested, Underscore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Letter frequencies of a song
    let lyrics = vec![
        "I'm a lumberjack and I'm okay",
        "I sleep all night and I work all day",
    ];
    let counts = Underscore::chain(lyrics)
        .map(|line| line.chars().filter(|c| c.is_alphabetic()).collect::<Vec<_>>())
        .flatten()
        .count_by(|c| Some(c.to_ascii_lowercase()))
        .value();
    println!("Letter 'a' appears {} times", counts.get(&'a').copied().unwrap_or(0));

    // Filter, reject and sort in one pipeline
    let numbers = Underscore::chain((1..=10).collect::<Vec<i32>>())
        .select(|n| n % 2 == 0)
        .reject(|n| n % 4 == 0)
        .sort_by(|n| -n)
        .value();
    println!("Evens not divisible by four, descending: {:?}", numbers);

    // Records from JSON
    let stooges = vec![
        json!({"name": "moe", "age": 40}),
        json!({"name": "larry", "age": 50}),
        json!({"name": "curly", "age": 60}),
    ];
    let names = Underscore::chain(stooges.clone()).pluck("name").value();
    println!("Names: {:?}", names);
    let fifty = Underscore::chain(stooges).find_where(&[("age", json!(50))]).value();
    println!("Fifty years old: {:?}", fifty);

    // Nested lists
    let flat = underscore::flatten(&nested![1, [2], [3, [[[4]]]]]);
    println!("Flattened: {:?}", flat);

    // Objects
    let options = underscore::defaults(
        HashMap::from([("flavor", "chocolate")]),
        [HashMap::from([("flavor", "vanilla"), ("sprinkles", "lots")])],
    );
    println!("Ice cream: {:?}", options);

    let reduced = Underscore::chain(vec![1, 2, 3]).reduce_first(|a, b, _| a + b).value()?;
    println!("Sum: {}", reduced);

    Ok(())
}
