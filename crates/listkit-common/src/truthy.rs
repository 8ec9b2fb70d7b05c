//! # Truthiness
//!
//! Rust has no implicit boolean conversion, so "keep the truthy values"
//! needs a table. The falsy values are exactly:
//!
//! - `0` of any integer type
//! - `0.0`, `-0.0` and `NaN`
//! - the empty string
//! - `false`
//! - `None` and `()` (absent values)
//! - JSON `null`, `false`, `0` and `""`
//!
//! Everything else is truthy, including empty vectors and empty records.
//!
//! ## Example
//!
//! ```
//! use listkit_common::Truthy;
//!
//! assert!(!0_i32.is_truthy());
//! assert!(!"".is_truthy());
//! assert!(!f64::NAN.is_truthy());
//! assert!(!None::<i32>.is_truthy());
//! assert!(Some(1_i32).is_truthy());
//! assert!(Vec::<i32>::new().is_truthy());
//! ```

use std::rc::Rc;
use std::sync::Arc;

use crate::record::Record;
use crate::tree::Tree;

/// Whether a value counts as `true` in a conditional context.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! int_truthy {
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

int_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        // NaN compares unequal to 0.0, so it needs its own check
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f32 {
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

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<V> Truthy for Record<V> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for Tree<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Rc<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Arc<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(feature = "json")]
impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        use serde_json::Value;

        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f.is_truthy()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}
