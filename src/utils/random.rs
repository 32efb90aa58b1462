//! Random numbers.

use rand::Rng;
use std::cmp::Ordering;

/// Random integer between 0 and `max`, inclusive.
pub fn random(max: i64) -> i64 {
    random_range(0, max)
}

/// Random integer between `min` and `max`, inclusive. The bounds may be given
/// in either order.
pub fn random_range(min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rand::thread_rng().gen_range(low..=high)
}

/// Random float in `[min, max)`; `min` itself when the range is empty.
///
/// Infinite bounds are clamped to the largest finite values. Spans wider than
/// `f64::MAX` are sampled by interpolating between the bounds.
pub fn random_float(min: f64, max: f64) -> f64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let (low, high) = (low.clamp(f64::MIN, f64::MAX), high.clamp(f64::MIN, f64::MAX));
    if low.partial_cmp(&high) != Some(Ordering::Less) {
        return low;
    }

    let mut rng = rand::thread_rng();
    if (high - low).is_finite() {
        return rng.gen_range(low..high);
    }
    let t: f64 = rng.gen();
    let value = low * (1.0 - t) + high * t;
    if value < high {
        value
    } else {
        low
    }
}
