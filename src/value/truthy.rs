//! Truthiness, as used by `compact` and the `*_truthy` helpers.

use serde_json::Value;

/// Values that can be judged "falsy" the way a dynamic language would.
pub trait Truthy {
    fn is_truthy(&self) -> bool;

    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// Arrays and objects are truthy even when empty.
impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert!(1.is_truthy());
        assert!(0u8.is_falsy());
        assert!(f64::NAN.is_falsy());
        assert!("".is_falsy());
        assert!(String::from("x").is_truthy());
        assert!(None::<i32>.is_falsy());
        assert!(Some(0).is_falsy());
        assert!(Some(3).is_truthy());
    }

    #[test]
    fn test_json_values() {
        assert!(json!(null).is_falsy());
        assert!(json!(false).is_falsy());
        assert!(json!(0).is_falsy());
        assert!(json!(0.0).is_falsy());
        assert!(json!("").is_falsy());
        assert!(json!([]).is_truthy());
        assert!(json!({}).is_truthy());
        assert!(json!(-1).is_truthy());
    }
}
